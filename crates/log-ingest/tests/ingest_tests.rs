//! Tests for reading day logs from disk.

use chrono::NaiveDate;
use log_ingest::{aggregate_days, aggregate_file};
use test_utils::{day_with_gap, diurnal_day, LogDir};
use wx_common::{ChartDays, ChartError, Metric, MetricPolicy};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

#[test]
fn test_aggregate_file_reads_day() {
    let logs = LogDir::new();
    let path = logs.write_day(today(), &diurnal_day());
    let policy = MetricPolicy::default_for(Metric::WindSpeed);

    let day = aggregate_file(&path, &policy).unwrap();
    assert_eq!(day.accepted, 1440);
    assert_eq!(day.series.filled(), 288);
    assert!(day.extrema.bucket_of_max.is_some());
}

#[test]
fn test_missing_log_is_fatal() {
    let logs = LogDir::new();
    let policy = MetricPolicy::default_for(Metric::Humidity);
    let err = aggregate_file(&logs.path().join("nope.log"), &policy).unwrap_err();
    assert!(matches!(err, ChartError::LogUnavailable { .. }));
    assert!(err.is_input_error());
}

#[test]
fn test_aggregate_days_reads_both_logs() {
    let logs = LogDir::new();
    let days = ChartDays::ending(today());
    logs.write_day(days.yesterday, &diurnal_day());
    logs.write_day(days.today, &day_with_gap(600, 720));
    let policy = MetricPolicy::default_for(Metric::Humidity);

    let pair = aggregate_days(logs.path(), &days, &policy).unwrap();
    assert_eq!(pair.yesterday.series.filled(), 360);
    // 10:00-12:00 missing: buckets 150..180.
    assert_eq!(pair.today.series.filled(), 330);
    assert!(pair.today.series.is_gap(150));
    assert!(pair.today.series.is_gap(179));
    assert!(!pair.today.series.is_gap(180));
}

#[test]
fn test_aggregate_days_fails_when_one_day_missing() {
    let logs = LogDir::new();
    let days = ChartDays::ending(today());
    logs.write_day(days.today, &diurnal_day());
    let policy = MetricPolicy::default_for(Metric::Pressure);

    let err = aggregate_days(logs.path(), &days, &policy).unwrap_err();
    match err {
        ChartError::LogUnavailable { path, .. } => {
            assert!(path.ends_with("2024_02_29data.log"));
        }
        other => panic!("expected LogUnavailable, got {:?}", other),
    }
}
