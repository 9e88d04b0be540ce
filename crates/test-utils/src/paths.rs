//! Temporary log directories for tests.
//!
//! Logs are written with the station's naming scheme (`YYYY_MM_DDdata.log`)
//! so tests exercise the same lookup the chart service does.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use wx_common::day_log_name;

/// A temporary directory holding day logs.
///
/// The directory is removed when the value is dropped.
pub struct LogDir {
    dir: tempfile::TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("wx_logs_")
            .tempdir()
            .expect("Failed to create temporary log directory");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write the log for `date` and return its path.
    pub fn write_day<S: AsRef<str>>(&self, date: NaiveDate, lines: &[S]) -> PathBuf {
        let path = self.path().join(day_log_name(date));
        let mut contents = String::new();
        for line in lines {
            contents.push_str(line.as_ref());
            contents.push('\n');
        }
        fs::write(&path, contents).expect("Failed to write day log");
        path
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a temporary directory for test output.
///
/// The directory is automatically cleaned up when the returned `TempDir` is dropped.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary test directory")
}
