//! CLI argument parsing module.
//!
//! The CLI follows the pattern: `ta-signal <input.csv> [-o output] [--signals-only | --summary] [-v]`
//!
//! Indicator parameters are fixed (SMA/EMA 20, RSI 14, MACD 12/26/9,
//! Bollinger 20/2.0, thresholds 30/70); the options only choose what is
//! written and where.
//!
//! # Examples
//!
//! ```bash
//! # Full indicator table to stdout
//! ta-signal prices.csv
//!
//! # Only the rows where a signal fired, to a file
//! ta-signal prices.csv --signals-only -o signals.csv
//!
//! # JSON summary with debug logging on stderr
//! ta-signal prices.csv --summary -v
//! ```

use std::path::Path;

use clap::{ArgAction, Parser};

use crate::csv_writer::OutputDest;
use crate::error::{CliError, Result};

/// ta-signal: indicators and buy/sell signals for an OHLCV CSV file
#[derive(Parser, Debug, Clone)]
#[command(name = "ta-signal")]
#[command(author, version, about = "Technical indicators and RSI/VWAP trade signals")]
#[command(long_about = "ta-signal reads an OHLCV CSV file (columns matched \
    case-insensitively; close and volume are required), computes SMA, EMA, RSI, \
    MACD, Bollinger Bands and cumulative VWAP, and flags buy bars (RSI < 30 below \
    VWAP) and sell bars (RSI > 70 above VWAP). Output is one CSV row per input row, \
    the signal rows only, or a JSON summary.")]
pub struct Args {
    /// Input CSV file
    pub input: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write only rows where a buy or sell signal fired
    #[arg(long, conflicts_with = "summary")]
    pub signals_only: bool,

    /// Write a JSON summary instead of the CSV table
    #[arg(long)]
    pub summary: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What the run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Every input row.
    Table,
    /// Rows with a buy or sell signal.
    SignalsOnly,
    /// JSON summary.
    Summary,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Get the input file path.
    pub fn input_path(&self) -> &str {
        &self.input
    }

    /// Get the output file path, if specified.
    pub fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Where output goes.
    pub fn output_dest(&self) -> OutputDest {
        match &self.output {
            Some(path) => OutputDest::File(path.clone()),
            None => OutputDest::Stdout,
        }
    }

    /// Which view to write.
    pub fn mode(&self) -> OutputMode {
        if self.summary {
            OutputMode::Summary
        } else if self.signals_only {
            OutputMode::SignalsOnly
        } else {
            OutputMode::Table
        }
    }

    /// Default log filter directive for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Checks combinations clap cannot express.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidArgument` if the output path would overwrite
    /// the input file.
    pub fn validate(&self) -> Result<()> {
        if let Some(output) = &self.output {
            if same_file(Path::new(&self.input), Path::new(output)) {
                return Err(CliError::InvalidArgument {
                    argument: "output".to_string(),
                    reason: format!("'{output}' is the input file"),
                    suggestion: Some("Choose a different -o path".to_string()),
                });
            }
        }
        Ok(())
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        // The output usually does not exist yet
        _ => a == b,
    }
}
