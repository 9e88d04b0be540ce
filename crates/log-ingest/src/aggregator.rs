//! Folding a day of samples into a bucket series.
//!
//! Samples arrive in time order. Each accepted sample is appended to the
//! running window of its bucket and the bucket value is recomputed as the
//! mean of the whole window. The window is cleared whenever a sample lands in
//! a different bucket than the last accepted one.

use wx_common::{BucketSeries, ChartResult, Extrema, MetricPolicy};

use crate::record::Sample;

/// Accepted raw values of the bucket currently being filled.
#[derive(Debug, Default)]
struct RunningWindow {
    values: Vec<f64>,
}

impl RunningWindow {
    fn reset(&mut self) {
        self.values.clear();
    }

    fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    fn mean(&self) -> f64 {
        let sum: f64 = self.values.iter().sum();
        sum / self.values.len() as f64
    }
}

/// Outcome of feeding one sample to the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Accepted,
    Rejected,
}

/// Result of aggregating one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayAggregate {
    pub series: BucketSeries,
    pub extrema: Extrema,
    pub accepted: usize,
    pub rejected: usize,
}

/// Per-day aggregation state for one metric.
#[derive(Debug)]
pub struct BucketAggregator<'a> {
    policy: &'a MetricPolicy,
    series: BucketSeries,
    extrema: Extrema,
    window: RunningWindow,
    last_bucket: Option<usize>,
    last_accepted: Option<f64>,
    accepted: usize,
    rejected: usize,
}

impl<'a> BucketAggregator<'a> {
    pub fn new(policy: &'a MetricPolicy) -> Self {
        Self {
            policy,
            series: BucketSeries::new(policy.day_span(), policy.sentinel),
            extrema: Extrema::seeded(policy.seeds),
            window: RunningWindow::default(),
            last_bucket: None,
            last_accepted: None,
            accepted: 0,
            rejected: 0,
        }
    }

    /// Feed one sample.
    ///
    /// Fails only when the record lacks a field the policy reads or that
    /// field is not numeric.
    pub fn push(&mut self, sample: &Sample) -> ChartResult<Disposition> {
        let bucket = self.policy.bucket_index(sample.minute_of_day);
        if self.last_bucket != Some(bucket) {
            self.window.reset();
        }

        let candidate = sample.value(self.policy.value_field)?;
        if !self.accepts(sample, candidate)? {
            self.rejected += 1;
            tracing::trace!(
                line = sample.line,
                bucket,
                value = candidate,
                "sample rejected"
            );
            return Ok(Disposition::Rejected);
        }

        self.extrema.observe(candidate, bucket);
        self.window.push(candidate);
        self.series.set(bucket, self.window.mean());
        self.last_bucket = Some(bucket);
        self.last_accepted = Some(candidate);
        self.accepted += 1;

        Ok(Disposition::Accepted)
    }

    fn accepts(&self, sample: &Sample, candidate: f64) -> ChartResult<bool> {
        let acceptance = &self.policy.acceptance;
        let checked = match acceptance.field {
            Some(field) if field != self.policy.value_field => sample.value(field)?,
            _ => candidate,
        };
        Ok(acceptance.within_step(candidate, self.last_accepted)
            && acceptance.within_bounds(checked))
    }

    pub fn finish(self) -> DayAggregate {
        DayAggregate {
            series: self.series,
            extrema: self.extrema,
            accepted: self.accepted,
            rejected: self.rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_window_mean() {
        let mut window = RunningWindow::default();
        window.push(1.0);
        window.push(2.0);
        window.push(6.0);
        assert_eq!(window.mean(), 3.0);
        window.reset();
        window.push(10.0);
        assert_eq!(window.mean(), 10.0);
    }
}
