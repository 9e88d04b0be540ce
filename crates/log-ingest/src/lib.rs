//! Weather log ingestion.
//!
//! Turns per-minute log records into per-bucket averages for one metric:
//! - Record parsing (`record`)
//! - Bucket aggregation with outlier rejection (`aggregator`)
//! - Day file and two-day ingestion (`ingest`)

pub mod aggregator;
pub mod ingest;
pub mod record;

pub use aggregator::{BucketAggregator, DayAggregate, Disposition};
pub use ingest::{aggregate_days, aggregate_file, aggregate_reader, DayPair};
pub use record::{parse_line, Sample};
