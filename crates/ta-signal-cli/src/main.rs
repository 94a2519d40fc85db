//! ta-signal command-line interface
//!
//! Computes indicators and buy/sell signals for an OHLCV CSV file. Logs go to
//! stderr so they never mix with CSV or JSON on stdout.

use std::io::IsTerminal;
use std::process::ExitCode;

use ta_signal_cli::args::Args;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level())),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    match ta_signal_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
