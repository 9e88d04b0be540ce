//! Common test fixtures for weather chart tests.
//!
//! This module provides pre-defined log records that represent common
//! scenarios in station logs.

/// A record copied from a station log, with its uneven padding intact.
pub const STATION_RECORD: &str =
    "14:32  18.45  987.3 1015.6  54 247.5 WSW  4.2  15.1   8.2  3  9.12  17.80   0.0   2.4";

/// The station record split into its logical columns.
pub const STATION_RECORD_FIELDS: [&str; 15] = [
    "14:32", "18.45", "987.3", "1015.6", "54", "247.5", "WSW", "4.2", "15.1", "8.2", "3", "9.12",
    "17.80", "0.0", "2.4",
];

/// Humidity (column 4) for the first bucket of a day; the 200% reading is
/// sensor noise and must be rejected.
pub const HUMIDITY_FIRST_BUCKET: [&str; 4] = [
    "00:00 0 0 0 45.0",
    "00:01 0 0 0 46.0",
    "00:02 0 0 0 200.0",
    "00:03 0 0 0 44.0",
];

/// Wind-chill (column 12) with a sensor spike, a recovery, and an
/// implausible hot reading.
pub const WIND_CHILL_SPIKE: [&str; 5] = [
    "00:00 0 0 0 0 0 x 0 0 0 0 0 5.0",
    "00:01 0 0 0 0 0 x 0 0 0 0 0 30.0",
    "00:02 0 0 0 0 0 x 0 0 0 0 0 7.0",
    "00:03 0 0 0 0 0 x 0 0 0 0 0 19.0",
    "00:04 0 0 0 0 0 x 0 0 0 0 0 80.0",
];

/// A record cut off before the humidity column.
pub const TRUNCATED_RECORD: &str = "08:15 12.30 985.0";
