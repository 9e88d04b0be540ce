//! Per-metric chart policies.
//!
//! Every chart runs the same ingest/render pipeline; what differs between
//! humidity, pressure, wind and rain is captured here as plain data so it can
//! be overridden from a YAML file instead of being compiled in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ChartError, ChartResult};
use crate::series::MINUTES_PER_DAY;

/// Default cap on log lines read per day (one per minute plus slack).
pub const DEFAULT_MAX_RECORDS: usize = 1442;

/// The charted quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Humidity,
    Pressure,
    WindChill,
    WindSpeed,
    WindDirection,
    RainRate,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Humidity,
        Metric::Pressure,
        Metric::WindChill,
        Metric::WindSpeed,
        Metric::WindDirection,
        Metric::RainRate,
    ];

    /// Stable identifier, used for config keys and output file names.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Humidity => "humidity",
            Metric::Pressure => "pressure",
            Metric::WindChill => "wind_chill",
            Metric::WindSpeed => "wind_speed",
            Metric::WindDirection => "wind_direction",
            Metric::RainRate => "rain_rate",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "humidity" => Ok(Metric::Humidity),
            "pressure" => Ok(Metric::Pressure),
            "wind_chill" | "windchill" => Ok(Metric::WindChill),
            "wind_speed" | "windspeed" => Ok(Metric::WindSpeed),
            "wind_direction" | "winddir" => Ok(Metric::WindDirection),
            "rain_rate" | "rain" => Ok(Metric::RainRate),
            _ => Err(ChartError::UnknownMetric(s.to_string())),
        }
    }
}

/// How a value maps onto the vertical pixel axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginRule {
    /// Bottom of the plot is always the range minimum.
    Shifted,
    /// Bottom of the plot is value 0 when the range minimum is non-negative,
    /// otherwise the range minimum.
    SignAware,
}

/// Plausibility rule deciding whether a raw sample is aggregated.
///
/// Bounds are exclusive rejections: a value strictly below `min` or strictly
/// above `max` is dropped. When `field` is set the bounds are checked against
/// that field instead of the charted value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Acceptance {
    #[serde(default)]
    pub field: Option<usize>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    /// Largest allowed jump from the previously accepted value.
    #[serde(default)]
    pub max_step: Option<f64>,
}

impl Acceptance {
    pub fn within_bounds(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        if self.min.is_some_and(|min| value < min) {
            return false;
        }
        if self.max.is_some_and(|max| value > max) {
            return false;
        }
        true
    }

    /// Step check against the last accepted value; passes when nothing has
    /// been accepted yet.
    pub fn within_step(&self, value: f64, previous: Option<f64>) -> bool {
        match (self.max_step, previous) {
            (Some(step), Some(prev)) => value >= prev - step && value <= prev + step,
            _ => true,
        }
    }
}

/// Initial extrema, chosen so the first accepted sample replaces them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtremaSeeds {
    pub min: f64,
    pub max: f64,
}

/// Lower limit applied to the maximum of a combined range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFloor {
    /// Applies when the observed maximum is below this value.
    pub below: f64,
    /// Replacement maximum.
    pub raise_to: f64,
}

/// How the plotted value range is derived from the observed extrema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeRule {
    /// Constant axis, independent of the data.
    Fixed { min: f64, max: f64 },
    /// Observed extrema, widened so typical baselines stay visible.
    Observed {
        /// The minimum is never above this value.
        #[serde(default)]
        min_ceiling: Option<f64>,
        #[serde(default)]
        max_floor: Option<RangeFloor>,
        /// Added on both ends after the ceiling/floor adjustment.
        #[serde(default)]
        pad: f64,
        /// Truncate both ends toward zero.
        #[serde(default)]
        whole_units: bool,
    },
}

impl RangeRule {
    /// Resolve the plotted (min, max) from combined observed extrema.
    pub fn resolve(&self, observed_min: f64, observed_max: f64) -> (f64, f64) {
        match self {
            RangeRule::Fixed { min, max } => (*min, *max),
            RangeRule::Observed {
                min_ceiling,
                max_floor,
                pad,
                whole_units,
            } => {
                let mut min = observed_min;
                let mut max = observed_max;
                if let Some(ceiling) = min_ceiling {
                    if min > *ceiling {
                        min = *ceiling;
                    }
                }
                if let Some(floor) = max_floor {
                    if max < floor.below {
                        max = floor.raise_to;
                    }
                }
                min -= pad;
                max += pad;
                if *whole_units {
                    min = min.trunc();
                    max = max.trunc();
                }
                (min, max)
            }
        }
    }
}

/// Pixel geometry of a chart.
///
/// The plot area spans one pixel column per bucket starting at `x_origin`;
/// the canvas adds `margin` pixels to both the plot width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub x_origin: f64,
    pub y_top: f64,
    pub y_height: f64,
    pub margin: u32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            x_origin: 60.0,
            y_top: 19.0,
            y_height: 270.0,
            margin: 80,
        }
    }
}

/// Everything the pipeline needs to know about one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPolicy {
    /// Minutes per bucket.
    pub bucket_width: u32,
    /// Out-of-domain value marking an empty bucket.
    pub sentinel: f64,
    /// Index of the charted value in a log record.
    pub value_field: usize,
    #[serde(default)]
    pub acceptance: Acceptance,
    pub seeds: ExtremaSeeds,
    pub origin: OriginRule,
    pub range: RangeRule,
    #[serde(default)]
    pub layout: ChartLayout,
    /// Size of the cross drawn at each day's maximum, if any.
    #[serde(default)]
    pub max_marker: Option<f64>,
    #[serde(default = "default_max_records")]
    pub max_records: usize,
}

fn default_max_records() -> usize {
    DEFAULT_MAX_RECORDS
}

impl MetricPolicy {
    /// Number of buckets in a day.
    pub fn day_span(&self) -> usize {
        (MINUTES_PER_DAY / self.bucket_width) as usize
    }

    /// Bucket holding the given minute of day.
    pub fn bucket_index(&self, minute_of_day: u32) -> usize {
        (minute_of_day / self.bucket_width) as usize
    }

    /// Canvas size in pixels (width, height).
    pub fn canvas_size(&self) -> (u32, u32) {
        let width = self.day_span() as u32 + self.layout.margin;
        let height = self.layout.y_height as u32 + self.layout.margin;
        (width, height)
    }

    /// Check the policy for values the pipeline cannot work with.
    pub fn validate(&self, metric: &str) -> ChartResult<()> {
        if self.bucket_width == 0 || self.bucket_width > MINUTES_PER_DAY {
            return Err(ChartError::invalid_policy(
                metric,
                format!("bucket_width must be in 1..={}", MINUTES_PER_DAY),
            ));
        }
        if !self.sentinel.is_finite() {
            return Err(ChartError::invalid_policy(metric, "sentinel must be finite"));
        }
        if self.value_field == 0 {
            return Err(ChartError::invalid_policy(
                metric,
                "value_field 0 is the timestamp",
            ));
        }
        if self.acceptance.field == Some(0) {
            return Err(ChartError::invalid_policy(
                metric,
                "acceptance field 0 is the timestamp",
            ));
        }
        if self.layout.y_height <= 0.0 {
            return Err(ChartError::invalid_policy(metric, "layout.y_height must be positive"));
        }
        if self.max_records == 0 {
            return Err(ChartError::invalid_policy(metric, "max_records must be positive"));
        }
        Ok(())
    }

    /// Built-in policy for a metric.
    pub fn default_for(metric: Metric) -> Self {
        let narrow = ChartLayout {
            y_height: 208.0,
            ..ChartLayout::default()
        };
        let non_negative = RangeRule::Observed {
            min_ceiling: Some(0.0),
            max_floor: Some(RangeFloor {
                below: 5.0,
                raise_to: 5.1,
            }),
            pad: 0.0,
            whole_units: false,
        };

        match metric {
            Metric::Humidity => Self {
                bucket_width: 4,
                sentinel: 2000.0,
                value_field: 4,
                acceptance: Acceptance {
                    max: Some(100.1),
                    ..Acceptance::default()
                },
                seeds: ExtremaSeeds { min: 200.0, max: -1.0 },
                origin: OriginRule::Shifted,
                range: RangeRule::Fixed { min: 0.0, max: 100.0 },
                layout: ChartLayout::default(),
                max_marker: None,
                max_records: DEFAULT_MAX_RECORDS,
            },
            Metric::Pressure => Self {
                bucket_width: 4,
                sentinel: 2000.0,
                value_field: 3,
                acceptance: Acceptance {
                    min: Some(800.0),
                    max: Some(1250.0),
                    ..Acceptance::default()
                },
                seeds: ExtremaSeeds { min: 2000.0, max: 100.0 },
                origin: OriginRule::Shifted,
                range: RangeRule::Observed {
                    min_ceiling: Some(985.0),
                    max_floor: Some(RangeFloor {
                        below: 1045.0,
                        raise_to: 1045.0,
                    }),
                    pad: 1.0,
                    whole_units: true,
                },
                layout: ChartLayout::default(),
                max_marker: None,
                max_records: DEFAULT_MAX_RECORDS,
            },
            Metric::WindChill => Self {
                bucket_width: 4,
                sentinel: 1000.0,
                value_field: 12,
                acceptance: Acceptance {
                    max: Some(75.0),
                    max_step: Some(15.0),
                    ..Acceptance::default()
                },
                seeds: ExtremaSeeds { min: 100.0, max: -100.0 },
                origin: OriginRule::SignAware,
                range: RangeRule::Observed {
                    min_ceiling: Some(0.0),
                    max_floor: Some(RangeFloor {
                        below: 0.0,
                        raise_to: 0.0,
                    }),
                    pad: 0.0,
                    whole_units: false,
                },
                layout: ChartLayout::default(),
                max_marker: None,
                max_records: DEFAULT_MAX_RECORDS,
            },
            Metric::WindSpeed => Self {
                bucket_width: 5,
                sentinel: 1000.0,
                value_field: 8,
                acceptance: Acceptance {
                    field: Some(8),
                    max: Some(175.0),
                    ..Acceptance::default()
                },
                seeds: ExtremaSeeds { min: 100.0, max: -100.0 },
                origin: OriginRule::SignAware,
                range: non_negative,
                layout: narrow,
                max_marker: Some(4.0),
                max_records: DEFAULT_MAX_RECORDS,
            },
            Metric::WindDirection => Self {
                bucket_width: 5,
                sentinel: 1000.0,
                value_field: 5,
                acceptance: Acceptance {
                    field: Some(8),
                    max: Some(175.0),
                    ..Acceptance::default()
                },
                seeds: ExtremaSeeds { min: 1000.0, max: -1000.0 },
                origin: OriginRule::SignAware,
                range: RangeRule::Fixed { min: 0.0, max: 359.9 },
                layout: ChartLayout {
                    y_top: 20.0,
                    ..narrow
                },
                max_marker: None,
                max_records: DEFAULT_MAX_RECORDS,
            },
            Metric::RainRate => Self {
                bucket_width: 5,
                sentinel: 1000.0,
                value_field: 13,
                acceptance: Acceptance {
                    max: Some(500.0),
                    ..Acceptance::default()
                },
                seeds: ExtremaSeeds { min: 100.0, max: -100.0 },
                origin: OriginRule::SignAware,
                range: non_negative,
                layout: narrow,
                max_marker: Some(4.0),
                max_records: DEFAULT_MAX_RECORDS,
            },
        }
    }
}

/// Policies for every metric, keyed by metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyTable {
    policies: BTreeMap<Metric, MetricPolicy>,
}

impl Default for PolicyTable {
    fn default() -> Self {
        let policies = Metric::ALL
            .iter()
            .map(|&metric| (metric, MetricPolicy::default_for(metric)))
            .collect();
        Self { policies }
    }
}

impl PolicyTable {
    pub fn get(&self, metric: Metric) -> ChartResult<&MetricPolicy> {
        self.policies
            .get(&metric)
            .ok_or_else(|| ChartError::UnknownMetric(metric.to_string()))
    }

    /// Replace the built-in policy of every metric named in `overrides`.
    pub fn apply_overrides(&mut self, overrides: BTreeMap<Metric, MetricPolicy>) -> ChartResult<()> {
        for (metric, policy) in overrides {
            policy.validate(metric.name())?;
            self.policies.insert(metric, policy);
        }
        Ok(())
    }

    /// Parse a YAML map of metric name to policy and apply it over the
    /// built-in table.
    pub fn from_yaml_overrides(yaml: &str) -> ChartResult<Self> {
        let overrides: BTreeMap<Metric, MetricPolicy> = serde_yaml::from_str(yaml)?;
        let mut table = Self::default();
        table.apply_overrides(overrides)?;
        Ok(table)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &MetricPolicy)> {
        self.policies.iter().map(|(metric, policy)| (*metric, policy))
    }
}
