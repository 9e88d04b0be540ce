//! Generators for synthetic weather log records.
//!
//! Records are formatted with the same column widths the station logger
//! uses, so padding varies between fields just like in real logs.

/// One minute of station readings.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub temperature: f64,
    pub abs_pressure: f64,
    pub rel_pressure: f64,
    pub humidity: f64,
    pub direction: f64,
    pub direction_text: &'static str,
    pub speed_ms: f64,
    pub speed_kmh: f64,
    pub speed_kn: f64,
    pub beaufort: u32,
    pub dewpoint: f64,
    pub windchill: f64,
    pub rain_hour: f64,
    pub rain_day: f64,
}

impl Default for Reading {
    fn default() -> Self {
        Self {
            temperature: 12.5,
            abs_pressure: 985.2,
            rel_pressure: 1013.4,
            humidity: 65.0,
            direction: 225.0,
            direction_text: "SW",
            speed_ms: 3.1,
            speed_kmh: 11.2,
            speed_kn: 6.0,
            beaufort: 2,
            dewpoint: 6.1,
            windchill: 11.8,
            rain_hour: 0.0,
            rain_day: 1.2,
        }
    }
}

impl Reading {
    /// Set a field by its log column index (1..=14).
    ///
    /// # Panics
    ///
    /// Panics on the timestamp column, the direction text column, or an
    /// index past the last column.
    pub fn with_field(mut self, index: usize, value: f64) -> Self {
        match index {
            1 => self.temperature = value,
            2 => self.abs_pressure = value,
            3 => self.rel_pressure = value,
            4 => self.humidity = value,
            5 => self.direction = value,
            7 => self.speed_ms = value,
            8 => self.speed_kmh = value,
            9 => self.speed_kn = value,
            10 => self.beaufort = value as u32,
            11 => self.dewpoint = value,
            12 => self.windchill = value,
            13 => self.rain_hour = value,
            14 => self.rain_day = value,
            _ => panic!("column {} is not a numeric reading", index),
        }
        self
    }
}

/// Format one log record at `minute_of_day`.
pub fn format_record(minute_of_day: u32, reading: &Reading) -> String {
    format!(
        "{:02}:{:02} {:6.2} {:6.1} {:6.1} {:3} {:5.1} {:>3} {:4.1} {:5.1} {:5.1} {:2} {:6.2} {:6.2} {:5.1} {:5.1}",
        minute_of_day / 60,
        minute_of_day % 60,
        reading.temperature,
        reading.abs_pressure,
        reading.rel_pressure,
        reading.humidity.round() as i64,
        reading.direction,
        reading.direction_text,
        reading.speed_ms,
        reading.speed_kmh,
        reading.speed_kn,
        reading.beaufort,
        reading.dewpoint,
        reading.windchill,
        reading.rain_hour,
        reading.rain_day,
    )
}

/// Minimal record with only a timestamp and the given fields, separated by
/// single spaces. Useful for hand-written scenarios.
pub fn sparse_record(minute_of_day: u32, fields: &[(usize, f64)]) -> String {
    let width = fields.iter().map(|(i, _)| *i).max().unwrap_or(0);
    let mut columns = vec!["0".to_string(); width + 1];
    columns[0] = format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60);
    for (index, value) in fields {
        columns[*index] = value.to_string();
    }
    columns.join(" ")
}

/// A full day of one-minute records following a smooth daily cycle.
pub fn diurnal_day() -> Vec<String> {
    (0..1440)
        .map(|minute| format_record(minute, &diurnal_reading(minute)))
        .collect()
}

/// A day of records with the minutes in `[start, end)` missing.
pub fn day_with_gap(start: u32, end: u32) -> Vec<String> {
    (0..1440)
        .filter(|minute| *minute < start || *minute >= end)
        .map(|minute| format_record(minute, &diurnal_reading(minute)))
        .collect()
}

/// Reading for a minute of a mild day: coolest before dawn, warmest
/// mid-afternoon, wind picking up with the heat.
pub fn diurnal_reading(minute_of_day: u32) -> Reading {
    let phase = (minute_of_day as f64 / 1440.0 - 0.625) * std::f64::consts::TAU;
    let warmth = phase.cos();
    let speed_kmh = 10.0 + 8.0 * warmth;

    Reading {
        temperature: 12.0 + 6.0 * warmth,
        rel_pressure: 1013.0 + 2.0 * (phase / 2.0).sin(),
        humidity: 70.0 - 20.0 * warmth,
        direction: 180.0 + 45.0 * phase.sin(),
        speed_kmh,
        speed_ms: speed_kmh / 3.6,
        speed_kn: speed_kmh / 1.852,
        windchill: 11.0 + 6.0 * warmth,
        ..Reading::default()
    }
}
