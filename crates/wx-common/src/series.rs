//! Per-day bucket series and extrema.

use serde::{Deserialize, Serialize};

use crate::policy::ExtremaSeeds;

pub const MINUTES_PER_DAY: u32 = 1440;

/// One value per time bucket of a day.
///
/// A bucket holds either the mean of the samples accepted into it or the
/// sentinel, meaning nothing valid fell into that bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSeries {
    values: Vec<f64>,
    sentinel: f64,
}

impl BucketSeries {
    /// Create a series of `len` buckets, all set to the sentinel.
    pub fn new(len: usize, sentinel: f64) -> Self {
        Self {
            values: vec![sentinel; len],
            sentinel,
        }
    }

    /// Build a series from raw values; entries equal to `sentinel` are gaps.
    pub fn from_values(values: Vec<f64>, sentinel: f64) -> Self {
        Self { values, sentinel }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn sentinel(&self) -> f64 {
        self.sentinel
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The bucket value, or `None` for a gap or an out-of-range index.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values
            .get(index)
            .copied()
            .filter(|value| *value != self.sentinel)
    }

    pub fn is_gap(&self, index: usize) -> bool {
        self.get(index).is_none()
    }

    pub fn set(&mut self, index: usize, value: f64) {
        self.values[index] = value;
    }

    /// Number of buckets holding data.
    pub fn filled(&self) -> usize {
        self.values.iter().filter(|v| **v != self.sentinel).count()
    }
}

/// Minimum and maximum of the accepted samples of one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extrema {
    pub min: f64,
    pub max: f64,
    /// Bucket of the sample that set `max`; `None` until one did.
    pub bucket_of_max: Option<usize>,
}

impl Extrema {
    pub fn seeded(seeds: ExtremaSeeds) -> Self {
        Self {
            min: seeds.min,
            max: seeds.max,
            bucket_of_max: None,
        }
    }

    /// Fold in an accepted sample.
    pub fn observe(&mut self, value: f64, bucket: usize) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
            self.bucket_of_max = Some(bucket);
        }
    }

    /// Combined extent of two days.
    pub fn joint(&self, other: &Extrema) -> (f64, f64) {
        (self.min.min(other.min), self.max.max(other.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_series_is_all_gaps() {
        let series = BucketSeries::new(360, 2000.0);
        assert_eq!(series.len(), 360);
        assert_eq!(series.filled(), 0);
        assert!((0..360).all(|i| series.is_gap(i)));
    }

    #[test]
    fn test_extrema_tracks_bucket_of_max() {
        let mut extrema = Extrema::seeded(ExtremaSeeds { min: 100.0, max: -100.0 });
        extrema.observe(3.0, 10);
        extrema.observe(7.0, 12);
        extrema.observe(7.0, 20);
        extrema.observe(-2.0, 30);
        assert_eq!(extrema.min, -2.0);
        assert_eq!(extrema.max, 7.0);
        assert_eq!(extrema.bucket_of_max, Some(12));
    }
}
