//! Daily weather chart renderer.
//!
//! Reads yesterday's and today's station logs and writes one PNG chart per
//! metric.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use chart_render::{run_report, ChartConfig, MetricSelection};
use wx_common::ChartDays;

#[derive(Parser, Debug)]
#[command(name = "chart-render")]
#[command(about = "Render two-day weather charts from station logs")]
struct Args {
    /// Metric to render, or "all"
    #[arg(short, long, default_value = "all")]
    metric: MetricSelection,

    /// Day to chart as "today" (default: local date)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Directory holding the YYYY_MM_DDdata.log files
    #[arg(long, env = "WEATHER_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Directory charts are written to
    #[arg(short, long, env = "CHART_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "CHART_CONFIG")]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = ChartConfig::load(args.config.as_deref(), args.log_dir, args.output_dir)?;
    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let days = ChartDays::ending(today);

    info!(
        log_dir = ?config.log_dir,
        output_dir = ?config.output_dir,
        yesterday = %days.yesterday,
        today = %days.today,
        metrics = %args.metric,
        "Rendering charts"
    );

    let metrics = args.metric.metrics();
    let summary = run_report(&config, &days, &metrics);

    info!(
        written = summary.written.len(),
        failed = summary.failed.len(),
        "Run complete"
    );

    if !summary.is_success() {
        anyhow::bail!(
            "{} of {} charts failed",
            summary.failed.len(),
            metrics.len()
        );
    }
    Ok(())
}
