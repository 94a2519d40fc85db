//! CSV parsing module for reading OHLCV price data.
//!
//! # Column Detection
//!
//! Header names are trimmed and lower-cased before matching, so `Close`,
//! ` CLOSE ` and `close` all name the same column:
//!
//! - `close` and `volume` are required
//! - `open`, `high`, `low` are parsed when present
//! - Date columns (`date`, `time`, `datetime`, `timestamp`, `dt`) are kept as
//!   labels for output alignment but not parsed as numbers
//! - Any other column is ignored
//!
//! # Strictness
//!
//! Every cell of a parsed numeric column must hold a finite number. Empty
//! cells, text and `NaN`/`inf` literals are rejected with the line number, so
//! the analysis never runs on silently patched data.

use crate::error::{CliError, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One OHLCV table, column-major, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    /// Date/time labels (if a date column is present).
    pub dates: Option<Vec<String>>,
    /// Open prices, if the file has an `open` column.
    pub open: Option<Vec<f64>>,
    /// High prices, if present.
    pub high: Option<Vec<f64>>,
    /// Low prices, if present.
    pub low: Option<Vec<f64>>,
    /// Close prices.
    pub close: Vec<f64>,
    /// Traded volume.
    pub volume: Vec<f64>,
}

impl PriceTable {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Returns true if the file had a header but no data rows.
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Date labels as a slice, if present.
    pub fn dates(&self) -> Option<&[String]> {
        self.dates.as_deref()
    }
}

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Check if a header represents a date column.
fn is_date_column(header: &str) -> bool {
    let normalized = normalize_header(header);
    matches!(
        normalized.as_str(),
        "date" | "time" | "datetime" | "timestamp" | "dt"
    )
}

/// Parse one cell as a finite number.
fn parse_value(value: Option<&str>, column: &str, line: usize) -> Result<f64> {
    let trimmed = value.unwrap_or("").trim();
    if trimmed.is_empty() {
        return Err(CliError::CsvParseError {
            message: format!("missing value in column '{column}'"),
            line: Some(line),
        });
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(CliError::CsvParseError {
            message: format!("cannot parse '{trimmed}' as a finite number in column '{column}'"),
            line: Some(line),
        }),
    }
}

/// Positions of the columns the analysis reads.
struct ColumnLayout {
    date: Option<usize>,
    open: Option<usize>,
    high: Option<usize>,
    low: Option<usize>,
    close: usize,
    volume: usize,
}

impl ColumnLayout {
    fn from_headers(headers: &[String]) -> Result<Self> {
        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
        let find = |name: &str| normalized.iter().position(|h| h == name);
        let require = |name: &'static str| {
            find(name).ok_or_else(|| CliError::MissingColumn {
                column: name,
                found: normalized.clone(),
            })
        };

        Ok(Self {
            date: headers.iter().position(|h| is_date_column(h)),
            open: find("open"),
            high: find("high"),
            low: find("low"),
            close: require("close")?,
            volume: require("volume")?,
        })
    }
}

/// Parse an OHLCV CSV file.
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be read,
/// `CliError::MissingColumn` if `close` or `volume` is absent, or
/// `CliError::CsvParseError` for a malformed row or cell.
pub fn parse_price_table<P: AsRef<Path>>(path: P) -> Result<PriceTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::IoError {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    parse_price_table_from_reader(BufReader::new(file))
}

/// Parse OHLCV CSV data from a reader.
///
/// This is useful for testing or parsing from non-file sources.
///
/// # Errors
///
/// Same as [`parse_price_table`], minus the file error.
pub fn parse_price_table_from_reader<R: Read>(reader: R) -> Result<PriceTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(String::from)
        .collect();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(CliError::CsvParseError {
            message: "CSV file has no headers".to_string(),
            line: Some(1),
        });
    }

    let layout = ColumnLayout::from_headers(&headers)?;

    let mut dates = layout.date.map(|_| Vec::new());
    let mut open = layout.open.map(|_| Vec::new());
    let mut high = layout.high.map(|_| Vec::new());
    let mut low = layout.low.map(|_| Vec::new());
    let mut close = Vec::new();
    let mut volume = Vec::new();

    for (row_idx, result) in csv_reader.records().enumerate() {
        // +2 for the header and 0-indexing
        let line = row_idx + 2;
        let record = result.map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(line),
        })?;

        if let (Some(idx), Some(values)) = (layout.date, dates.as_mut()) {
            values.push(record.get(idx).unwrap_or("").trim().to_string());
        }
        for (idx, values, name) in [
            (layout.open, open.as_mut(), "open"),
            (layout.high, high.as_mut(), "high"),
            (layout.low, low.as_mut(), "low"),
        ] {
            if let (Some(idx), Some(values)) = (idx, values) {
                values.push(parse_value(record.get(idx), name, line)?);
            }
        }
        close.push(parse_value(record.get(layout.close), "close", line)?);
        volume.push(parse_value(record.get(layout.volume), "volume", line)?);
    }

    Ok(PriceTable {
        dates,
        open,
        high,
        low,
        close,
        volume,
    })
}
