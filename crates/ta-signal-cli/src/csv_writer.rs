//! Output module for writing analysis results.
//!
//! Three views of the same analysis are available:
//!
//! - **Table** ([`write_table`]): one CSV row per input row. No lookback rows
//!   are dropped, so row `i` of the output lines up with row `i` of the input;
//!   undefined values are written as empty cells.
//! - **Signals only** ([`write_signal_rows`]): the same columns, restricted to
//!   rows where a buy or sell signal fired.
//! - **Summary** ([`write_summary`]): a JSON document with counts, signal
//!   positions and the last defined value of every series.
//!
//! # Table Columns
//!
//! `[date,]close,sma_20,ema_20,rsi_14,macd,macd_signal,macd_hist,bb_upper,`
//! `bb_middle,bb_lower,vwap,buy_signal,sell_signal`
//!
//! The period suffixes follow the configuration used for the run. Rows go
//! through a [`csv::Writer`], so a date label holding a comma or quote is
//! quoted and every row keeps the header's field count.

use crate::csv_parser::PriceTable;
use crate::error::{CliError, Result};
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use ta_signal::{Analysis, IndicatorConfig, SignalSeries};

/// Output destination: either stdout or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// Create a writer for this output destination.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputDest::Stdout => Ok(Box::new(BufWriter::new(io::stdout()))),
            OutputDest::File(path) => {
                let file = File::create(path).map_err(|e| CliError::IoError {
                    source: e,
                    path: Some(path.clone()),
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }

    /// Human-readable name for log messages.
    pub fn describe(&self) -> &str {
        match self {
            OutputDest::Stdout => "stdout",
            OutputDest::File(path) => path,
        }
    }
}

/// Column headers for the table view.
pub fn table_headers(config: &IndicatorConfig, with_dates: bool) -> Vec<String> {
    let mut headers = Vec::with_capacity(15);
    if with_dates {
        headers.push("date".to_string());
    }
    headers.push("close".to_string());
    headers.push(format!("sma_{}", config.sma_period));
    headers.push(format!("ema_{}", config.ema_period));
    headers.push(format!("rsi_{}", config.rsi_period));
    headers.extend(
        [
            "macd",
            "macd_signal",
            "macd_hist",
            "bb_upper",
            "bb_middle",
            "bb_lower",
            "vwap",
            "buy_signal",
            "sell_signal",
        ]
        .map(String::from),
    );
    headers
}

/// Format an optional value; undefined becomes an empty cell.
fn format_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn csv_writer(dest: &OutputDest) -> Result<Writer<Box<dyn Write>>> {
    Ok(WriterBuilder::new().from_writer(dest.writer()?))
}

fn write_header<W: Write>(
    writer: &mut Writer<W>,
    analysis: &Analysis<f64>,
    with_dates: bool,
) -> Result<()> {
    writer.write_record(table_headers(&analysis.config, with_dates))?;
    Ok(())
}

fn write_row<W: Write>(
    writer: &mut Writer<W>,
    table: &PriceTable,
    analysis: &Analysis<f64>,
    i: usize,
) -> Result<()> {
    let mut cells = Vec::with_capacity(15);
    if let Some(dates) = table.dates() {
        cells.push(dates[i].clone());
    }
    cells.push(table.close[i].to_string());
    for (_, series) in analysis.columns() {
        cells.push(format_cell(series.get(i)));
    }
    cells.push(analysis.signals.buy.get(i).to_string());
    cells.push(analysis.signals.sell.get(i).to_string());
    writer.write_record(&cells)?;
    Ok(())
}

/// Write the full table: one row per input row.
///
/// # Errors
///
/// Returns `CliError::IoError` if the destination cannot be written.
pub fn write_table(table: &PriceTable, analysis: &Analysis<f64>, dest: &OutputDest) -> Result<()> {
    let mut writer = csv_writer(dest)?;
    write_header(&mut writer, analysis, table.dates.is_some())?;
    for i in 0..table.len() {
        write_row(&mut writer, table, analysis, i)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write only the rows where a buy or sell signal fired.
///
/// # Errors
///
/// Returns `CliError::IoError` if the destination cannot be written.
pub fn write_signal_rows(
    table: &PriceTable,
    analysis: &Analysis<f64>,
    dest: &OutputDest,
) -> Result<usize> {
    let mut writer = csv_writer(dest)?;
    write_header(&mut writer, analysis, table.dates.is_some())?;
    let mut written = 0;
    for i in (0..table.len()).filter(|&i| analysis.signals.any_at(i)) {
        write_row(&mut writer, table, analysis, i)?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Where one signal fired.
#[derive(Debug, Serialize)]
pub struct SignalSummary {
    /// Number of bars with the signal.
    pub count: usize,
    /// Row indices, ascending.
    pub indices: Vec<usize>,
    /// Date labels of those rows, when the input has a date column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<String>>,
}

impl SignalSummary {
    fn new(signal: &SignalSeries, dates: Option<&[String]>) -> Self {
        let indices = signal.fired_indices();
        let dates = dates.map(|d| indices.iter().map(|&i| d[i].clone()).collect());
        Self {
            count: indices.len(),
            indices,
            dates,
        }
    }
}

/// JSON summary of one analysis run.
#[derive(Debug, Serialize)]
pub struct Summary {
    /// Number of input rows.
    pub rows: usize,
    /// Parameters the run used.
    pub config: IndicatorConfig,
    /// Buy signal positions.
    pub buy: SignalSummary,
    /// Sell signal positions.
    pub sell: SignalSummary,
    /// Last defined value of each derived series (`null` if never defined).
    pub last: BTreeMap<&'static str, Option<f64>>,
}

impl Summary {
    /// Builds the summary from a table and its analysis.
    pub fn new(table: &PriceTable, analysis: &Analysis<f64>) -> Self {
        Self {
            rows: table.len(),
            config: analysis.config,
            buy: SignalSummary::new(&analysis.signals.buy, table.dates()),
            sell: SignalSummary::new(&analysis.signals.sell, table.dates()),
            last: analysis
                .columns()
                .into_iter()
                .map(|(name, series)| (name, series.last_defined()))
                .collect(),
        }
    }
}

/// Write the JSON summary.
///
/// # Errors
///
/// Returns `CliError::IoError` if serialization or writing fails.
pub fn write_summary(table: &PriceTable, analysis: &Analysis<f64>, dest: &OutputDest) -> Result<()> {
    let mut writer = dest.writer()?;
    serde_json::to_writer_pretty(&mut writer, &Summary::new(table, analysis))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
