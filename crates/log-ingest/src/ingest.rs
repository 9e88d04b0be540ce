//! Reading day logs from disk.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use wx_common::{ChartDays, ChartError, ChartResult, MetricPolicy};

use crate::aggregator::{BucketAggregator, DayAggregate};
use crate::record::parse_line;

/// Aggregate every record from `reader`, up to `policy.max_records` lines.
pub fn aggregate_reader<R: BufRead>(reader: R, policy: &MetricPolicy) -> ChartResult<DayAggregate> {
    let mut aggregator = BucketAggregator::new(policy);

    for (index, line) in reader.lines().take(policy.max_records).enumerate() {
        let line = line?;
        if let Some(sample) = parse_line(&line, index + 1)? {
            aggregator.push(&sample)?;
        }
    }

    Ok(aggregator.finish())
}

/// Aggregate one day's log file.
///
/// A missing or unreadable file is fatal for that day; nothing partial is
/// returned.
pub fn aggregate_file(path: &Path, policy: &MetricPolicy) -> ChartResult<DayAggregate> {
    let file = File::open(path).map_err(|source| ChartError::LogUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let aggregate = aggregate_reader(BufReader::new(file), policy)?;

    tracing::debug!(
        path = %path.display(),
        accepted = aggregate.accepted,
        rejected = aggregate.rejected,
        filled_buckets = aggregate.series.filled(),
        min = aggregate.extrema.min,
        max = aggregate.extrema.max,
        bucket_of_max = ?aggregate.extrema.bucket_of_max,
        "Aggregated day log"
    );

    Ok(aggregate)
}

/// Both days of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPair {
    pub yesterday: DayAggregate,
    pub today: DayAggregate,
}

/// Aggregate yesterday's and today's logs from `dir` in parallel.
///
/// The two days share no state; the first error wins.
pub fn aggregate_days(dir: &Path, days: &ChartDays, policy: &MetricPolicy) -> ChartResult<DayPair> {
    let (yesterday_path, today_path) = days.log_paths(dir);

    let (yesterday, today) = rayon::join(
        || aggregate_file(&yesterday_path, policy),
        || aggregate_file(&today_path, policy),
    );

    Ok(DayPair {
        yesterday: yesterday?,
        today: today?,
    })
}
