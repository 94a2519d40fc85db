//! ta-signal CLI library
//!
//! Loads an OHLCV CSV file, runs the indicator and signal pipeline with the
//! default configuration, and writes the result. Exposed as a library for
//! testing and reuse; the binary is a thin wrapper around [`run`].

pub mod args;
pub mod csv_parser;
pub mod csv_writer;
pub mod error;

pub use error::{CliError, Result};

use ta_signal::{analyze, IndicatorConfig, PriceVolume};
use tracing::{info, warn};

use crate::args::{Args, OutputMode};
use crate::csv_parser::parse_price_table;
use crate::csv_writer::{write_signal_rows, write_summary, write_table};

/// Runs one analysis as described by `args`.
///
/// # Errors
///
/// Any [`CliError`]: unreadable or malformed input, rejected data, or an
/// unwritable destination.
pub fn run(args: &Args) -> Result<()> {
    args.validate()?;

    let table = parse_price_table(args.input_path())?;
    info!(path = args.input_path(), rows = table.len(), "loaded input");

    let config = IndicatorConfig::default();
    if table.len() <= config.max_lookback() {
        warn!(
            rows = table.len(),
            longest_lookback = config.max_lookback(),
            "input is too short for every indicator; some columns will be entirely empty"
        );
    }
    if !table.is_empty() && table.volume.iter().all(|&v| v == 0.0) {
        warn!("total volume is zero; VWAP is undefined and no signals can fire");
    }

    let input = PriceVolume::new(&table.close, &table.volume)?;
    let analysis = analyze(&input, &config)?;

    let dest = args.output_dest();
    match args.mode() {
        OutputMode::Table => write_table(&table, &analysis, &dest)?,
        OutputMode::SignalsOnly => {
            let rows = write_signal_rows(&table, &analysis, &dest)?;
            info!(rows, "wrote signal rows");
        }
        OutputMode::Summary => write_summary(&table, &analysis, &dest)?,
    }
    info!(
        output = dest.describe(),
        buy = analysis.signals.buy.count(),
        sell = analysis.signals.sell.count(),
        "wrote output"
    );

    Ok(())
}
