//! Day selection and log file naming.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the log written for `date`, e.g. `2024_01_15data.log`.
pub fn day_log_name(date: NaiveDate) -> String {
    format!("{}data.log", date.format("%Y_%m_%d"))
}

/// The two days drawn on every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDays {
    pub yesterday: NaiveDate,
    pub today: NaiveDate,
}

impl ChartDays {
    /// `today` and the calendar day before it.
    pub fn ending(today: NaiveDate) -> Self {
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        Self { yesterday, today }
    }

    /// Log paths for (yesterday, today) inside `dir`.
    pub fn log_paths(&self, dir: &Path) -> (PathBuf, PathBuf) {
        (
            dir.join(day_log_name(self.yesterday)),
            dir.join(day_log_name(self.today)),
        )
    }
}
