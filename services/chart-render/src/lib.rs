//! Daily chart rendering over a station's weather logs.
//!
//! For each requested metric: aggregate yesterday's and today's logs,
//! render the two-day chart and write `<output_dir>/<metric>.png`.
//! A failing metric is logged and skipped; the run continues.

pub mod config;

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use tracing::{error, info};

use log_ingest::aggregate_days;
use renderer::{render_chart, DaySeries};
use wx_common::{ChartDays, ChartError, Extrema, Metric};

pub use config::{ChartConfig, ConfigFile};

/// Why one metric produced no chart.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{metric}: {source}")]
    Chart {
        metric: Metric,
        #[source]
        source: ChartError,
    },

    #[error("{metric}: failed to write {path:?}: {source}")]
    Write {
        metric: Metric,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReportError {
    pub fn metric(&self) -> Metric {
        match self {
            ReportError::Chart { metric, .. } | ReportError::Write { metric, .. } => *metric,
        }
    }
}

/// Which metrics to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricSelection {
    All,
    One(Metric),
}

impl MetricSelection {
    pub fn metrics(&self) -> Vec<Metric> {
        match self {
            MetricSelection::All => Metric::ALL.to_vec(),
            MetricSelection::One(metric) => vec![*metric],
        }
    }
}

impl FromStr for MetricSelection {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(MetricSelection::All)
        } else {
            s.parse().map(MetricSelection::One)
        }
    }
}

impl fmt::Display for MetricSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricSelection::All => f.write_str("all"),
            MetricSelection::One(metric) => write!(f, "{}", metric),
        }
    }
}

/// A chart that was written.
#[derive(Debug, Clone)]
pub struct ChartReport {
    pub metric: Metric,
    pub path: PathBuf,
    pub bytes: usize,
    pub yesterday: Extrema,
    pub today: Extrema,
}

/// Outcome of a run over several metrics.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub written: Vec<ChartReport>,
    pub failed: Vec<ReportError>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Output path of a metric's chart.
pub fn chart_path(config: &ChartConfig, metric: Metric) -> PathBuf {
    config.output_dir.join(format!("{}.png", metric.name()))
}

/// Render and write one metric's chart.
pub fn render_metric(
    config: &ChartConfig,
    days: &ChartDays,
    metric: Metric,
) -> Result<ChartReport, ReportError> {
    let chart_err = |source: ChartError| ReportError::Chart { metric, source };

    let policy = config.policies.get(metric).map_err(chart_err)?;
    let pair = aggregate_days(&config.log_dir, days, policy).map_err(chart_err)?;
    let png = render_chart(
        policy,
        &config.style,
        DaySeries::new(&pair.yesterday.series, &pair.yesterday.extrema),
        DaySeries::new(&pair.today.series, &pair.today.extrema),
    )
    .map_err(chart_err)?;

    let path = chart_path(config, metric);
    fs::create_dir_all(&config.output_dir)
        .and_then(|_| fs::write(&path, &png))
        .map_err(|source| ReportError::Write {
            metric,
            path: path.clone(),
            source,
        })?;

    let report = ChartReport {
        metric,
        path,
        bytes: png.len(),
        yesterday: pair.yesterday.extrema,
        today: pair.today.extrema,
    };
    info!(
        metric = %metric,
        path = ?report.path,
        bytes = report.bytes,
        yesterday_min = report.yesterday.min,
        yesterday_max = report.yesterday.max,
        yesterday_max_bucket = ?report.yesterday.bucket_of_max,
        today_min = report.today.min,
        today_max = report.today.max,
        today_max_bucket = ?report.today.bucket_of_max,
        "Wrote chart"
    );
    Ok(report)
}

/// Render every metric in `metrics`, continuing past failures.
pub fn run_report(config: &ChartConfig, days: &ChartDays, metrics: &[Metric]) -> RunSummary {
    let mut summary = RunSummary::default();
    for &metric in metrics {
        match render_metric(config, days, metric) {
            Ok(report) => summary.written.push(report),
            Err(e) => {
                error!(metric = %metric, error = %e, "Chart failed");
                summary.failed.push(e);
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_parse() {
        assert_eq!("all".parse::<MetricSelection>().unwrap(), MetricSelection::All);
        assert_eq!(
            "wind-speed".parse::<MetricSelection>().unwrap(),
            MetricSelection::One(Metric::WindSpeed)
        );
        assert!("sunshine".parse::<MetricSelection>().is_err());
    }

    #[test]
    fn test_selection_metrics() {
        assert_eq!(MetricSelection::All.metrics().len(), 6);
        assert_eq!(
            MetricSelection::One(Metric::Pressure).metrics(),
            vec![Metric::Pressure]
        );
    }
}
