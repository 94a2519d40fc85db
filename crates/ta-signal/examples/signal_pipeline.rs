//! Signal Pipeline Example
//!
//! Runs the full indicator and signal pipeline over a short synthetic series
//! and prints the bars where a buy or sell signal fired.
//!
//! Run with: `cargo run --example signal_pipeline`

use ta_signal::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // A sell-off followed by a rally
    let close: Vec<f64> = (0..80)
        .map(|i| {
            let x = f64::from(i);
            if i < 40 {
                120.0 - x * 0.9
            } else {
                84.0 + (x - 40.0) * 1.1
            }
        })
        .collect();
    let volume: Vec<f64> = (0..80).map(|i| 10_000.0 + f64::from(i % 7) * 500.0).collect();

    let input = PriceVolume::new(&close, &volume)?;
    let config = IndicatorConfig::default();
    let analysis = analyze(&input, &config)?;

    println!("Rows: {}", analysis.len());
    println!("Longest lookback: {}", config.max_lookback());
    println!();

    println!("{:>5} {:>10} {:>8} {:>10} {:>6}", "Index", "Close", "RSI", "VWAP", "Side");
    for i in 0..analysis.len() {
        let side = if analysis.signals.buy.get(i) {
            "BUY"
        } else if analysis.signals.sell.get(i) {
            "SELL"
        } else {
            continue;
        };
        let rsi = analysis.indicators.rsi.get(i).unwrap_or(f64::NAN);
        let vwap = analysis.indicators.vwap.get(i).unwrap_or(f64::NAN);
        println!("{i:>5} {:>10.2} {rsi:>8.2} {vwap:>10.2} {side:>6}", close[i]);
    }
    println!();

    println!(
        "Buy signals: {}, sell signals: {}",
        analysis.signals.buy.count(),
        analysis.signals.sell.count()
    );

    // Last defined value of every derived series
    for (name, series) in analysis.columns() {
        match series.last_defined() {
            Some(value) => println!("  {name:<12} {value:.4}"),
            None => println!("  {name:<12} (undefined)"),
        }
    }

    Ok(())
}
