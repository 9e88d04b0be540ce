//! Common types and utilities shared across the weather chart crates.

pub mod error;
pub mod policy;
pub mod series;
pub mod time;

pub use error::{ChartError, ChartResult};
pub use policy::{
    Acceptance, ChartLayout, ExtremaSeeds, Metric, MetricPolicy, OriginRule, PolicyTable,
    RangeFloor, RangeRule,
};
pub use series::{BucketSeries, Extrema, MINUTES_PER_DAY};
pub use time::{day_log_name, ChartDays};
