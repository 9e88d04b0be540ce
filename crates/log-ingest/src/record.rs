//! Parsing of weather log records.
//!
//! A record is one line: an `HH:MM` timestamp followed by fixed-position,
//! space-padded numeric fields.

use wx_common::{ChartError, ChartResult};

/// Padding runs collapsed to a single space, longest first. A longer run is
/// consumed greedily, so five spaces become two.
const PADDING_RUNS: [&str; 3] = ["    ", "   ", "  "];

/// One parsed log record.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// 1-based line number in the source, for error reporting.
    pub line: usize,
    pub minute_of_day: u32,
    /// All fields including the timestamp at index 0.
    pub fields: Vec<String>,
}

impl Sample {
    /// Raw field text.
    pub fn field(&self, index: usize) -> ChartResult<&str> {
        self.fields.get(index).map(String::as_str).ok_or_else(|| {
            ChartError::malformed(
                self.line,
                format!(
                    "field {} requested but record has {} fields",
                    index,
                    self.fields.len()
                ),
            )
        })
    }

    /// Field parsed as a finite number. `NaN` and `inf` are malformed.
    pub fn value(&self, index: usize) -> ChartResult<f64> {
        let raw = self.field(index)?;
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ChartError::malformed(
                self.line,
                format!("field {} is not a finite number: {:?}", index, raw),
            )),
        }
    }
}

/// Collapse padding runs of 2-4 spaces into one.
pub fn normalize_padding(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    'outer: while !rest.is_empty() {
        for run in PADDING_RUNS {
            if let Some(tail) = rest.strip_prefix(run) {
                out.push(' ');
                rest = tail;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    out
}

/// Parse one log line. Empty lines yield `Ok(None)`.
pub fn parse_line(line: &str, line_number: usize) -> ChartResult<Option<Sample>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Ok(None);
    }

    let cleaned = normalize_padding(line);
    let fields: Vec<String> = cleaned.split(' ').map(str::to_string).collect();
    let minute_of_day = parse_timestamp(&fields[0], line_number)?;

    Ok(Some(Sample {
        line: line_number,
        minute_of_day,
        fields,
    }))
}

fn parse_timestamp(token: &str, line_number: usize) -> ChartResult<u32> {
    let (hour, minute) = token
        .split_once(':')
        .ok_or_else(|| ChartError::malformed(line_number, format!("bad timestamp {:?}", token)))?;
    let hour: u32 = hour
        .parse()
        .map_err(|_| ChartError::malformed(line_number, format!("bad hour in {:?}", token)))?;
    let minute: u32 = minute
        .parse()
        .map_err(|_| ChartError::malformed(line_number, format!("bad minute in {:?}", token)))?;

    if hour >= 24 || minute >= 60 {
        return Err(ChartError::malformed(
            line_number,
            format!("timestamp {:?} is not a time of day", token),
        ));
    }
    Ok(hour * 60 + minute)
}
