//! Reference tests: every indicator against a direct, unoptimized rendition
//! of its textbook definition.
//!
//! The library uses rolling sums and single-pass recursions; the references
//! below recompute each window from scratch so that bookkeeping mistakes in
//! the rolling updates show up as mismatches.

#![allow(clippy::needless_range_loop)]
#![allow(clippy::cast_precision_loss)]

mod common;

use common::{approx_eq, generate_close, generate_volume, LOOSE_EPSILON};
use ta_signal::prelude::*;

// ==================== Reference Implementations ====================

fn ref_sma(data: &[f64], period: usize) -> Vec<Option<f64>> {
    (0..data.len())
        .map(|i| {
            (i + 1 >= period).then(|| data[i + 1 - period..=i].iter().sum::<f64>() / period as f64)
        })
        .collect()
}

fn ref_ema(data: &[f64], period: usize) -> Vec<Option<f64>> {
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = vec![None; data.len()];
    if data.len() < period {
        return out;
    }
    let mut prev = data[..period].iter().sum::<f64>() / period as f64;
    out[period - 1] = Some(prev);
    for i in period..data.len() {
        prev = alpha * data[i] + (1.0 - alpha) * prev;
        out[i] = Some(prev);
    }
    out
}

fn ref_rsi(data: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; data.len()];
    if data.len() <= period {
        return out;
    }
    let changes: Vec<f64> = data.windows(2).map(|w| w[1] - w[0]).collect();
    let mut avg_gain = changes[..period].iter().map(|c| c.max(0.0)).sum::<f64>() / period as f64;
    let mut avg_loss = changes[..period].iter().map(|c| (-c).max(0.0)).sum::<f64>() / period as f64;

    let value = |g: f64, l: f64| if l == 0.0 { 100.0 } else { 100.0 - 100.0 / (1.0 + g / l) };
    out[period] = Some(value(avg_gain, avg_loss));
    for i in (period + 1)..data.len() {
        let c = changes[i - 1];
        avg_gain = (avg_gain * (period - 1) as f64 + c.max(0.0)) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + (-c).max(0.0)) / period as f64;
        out[i] = Some(value(avg_gain, avg_loss));
    }
    out
}

fn ref_stddev(window: &[f64]) -> f64 {
    let n = window.len() as f64;
    let mean = window.iter().sum::<f64>() / n;
    (window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt()
}

fn ref_vwap(close: &[f64], volume: &[f64]) -> Vec<Option<f64>> {
    (0..close.len())
        .map(|i| {
            let vol: f64 = volume[..=i].iter().sum();
            let pv: f64 = close[..=i].iter().zip(&volume[..=i]).map(|(c, v)| c * v).sum();
            (vol > 0.0).then(|| pv / vol)
        })
        .collect()
}

fn assert_series_close(actual: &Series<f64>, expected: &[Option<f64>], label: &str) {
    assert_eq!(actual.len(), expected.len(), "{label} length");
    for (i, want) in expected.iter().enumerate() {
        match (actual.get(i), *want) {
            (Some(a), Some(b)) => assert!(approx_eq(a, b, LOOSE_EPSILON), "{label}[{i}]: {a} != {b}"),
            (None, None) => {}
            (a, b) => panic!("{label}[{i}]: definedness differs, got {a:?}, want {b:?}"),
        }
    }
}

// ==================== Indicator References ====================

#[test]
fn test_sma_matches_reference() {
    let close = generate_close(250);
    for period in [1, 2, 5, 20, 50] {
        assert_series_close(&sma(&close, period).unwrap(), &ref_sma(&close, period), "sma");
    }
}

#[test]
fn test_ema_matches_reference() {
    let close = generate_close(250);
    for period in [1, 3, 12, 20, 26] {
        assert_series_close(&ema(&close, period).unwrap(), &ref_ema(&close, period), "ema");
    }
}

#[test]
fn test_rsi_matches_reference() {
    let close = generate_close(250);
    for period in [1, 2, 14, 30] {
        assert_series_close(&rsi(&close, period).unwrap(), &ref_rsi(&close, period), "rsi");
    }
}

#[test]
fn test_bollinger_matches_reference() {
    let close = generate_close(250);
    let period = 20;
    let bands = bollinger(&close, period, 2.0).unwrap();

    for i in 0..close.len() {
        if i + 1 < period {
            assert_eq!(bands.upper.get(i), None);
            continue;
        }
        let window = &close[i + 1 - period..=i];
        let mean = window.iter().sum::<f64>() / period as f64;
        let sd = ref_stddev(window);
        assert!(approx_eq(bands.middle.get(i).unwrap(), mean, LOOSE_EPSILON));
        assert!(approx_eq(bands.upper.get(i).unwrap(), mean + 2.0 * sd, LOOSE_EPSILON));
        assert!(approx_eq(bands.lower.get(i).unwrap(), mean - 2.0 * sd, LOOSE_EPSILON));
    }
}

#[test]
fn test_vwap_matches_reference() {
    let close = generate_close(250);
    let mut volume = generate_volume(250);
    volume[..3].fill(0.0);
    assert_series_close(&vwap(&close, &volume).unwrap(), &ref_vwap(&close, &volume), "vwap");
}

#[test]
fn test_macd_matches_reference() {
    let close = generate_close(250);
    let result = macd(&close, &MacdParams::default()).unwrap();

    let fast = ref_ema(&close, 12);
    let slow = ref_ema(&close, 26);
    let line: Vec<Option<f64>> = fast
        .iter()
        .zip(&slow)
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect();
    assert_series_close(&result.macd_line, &line, "macd_line");

    // Signal: EMA(9) of the defined part of the line, placed back at offset 25
    let defined: Vec<f64> = line[25..].iter().map(|v| v.unwrap()).collect();
    let mut signal = vec![None; 25];
    signal.extend(ref_ema(&defined, 9));
    assert_series_close(&result.signal_line, &signal, "macd_signal");

    let hist: Vec<Option<f64>> = line
        .iter()
        .zip(&signal)
        .map(|(l, s)| Some((*l)? - (*s)?))
        .collect();
    assert_series_close(&result.histogram, &hist, "macd_hist");
}

// ==================== Hand-Computed Values ====================

#[test]
fn test_hand_computed_pipeline_values() {
    // Period-3 config keeps the arithmetic small enough to check by hand
    let config = IndicatorConfig::new()
        .sma_period(3)
        .ema_period(3)
        .rsi_period(3)
        .bollinger(BollingerParams::new().period(3).std_dev(1.0));
    let close = [10.0, 12.0, 11.0, 12.0, 11.0];
    let volume = [1.0, 1.0, 2.0, 2.0, 4.0];
    let input = PriceVolume::new(&close, &volume).unwrap();
    let set = compute_indicators(&input, &config).unwrap();

    // SMA[2] = 11, SMA[3] = 35/3
    assert!(approx_eq(set.sma.get(2).unwrap(), 11.0, 1e-12));
    assert!(approx_eq(set.sma.get(3).unwrap(), 35.0 / 3.0, 1e-12));
    // EMA seed 11, then 0.5*12 + 0.5*11
    assert!(approx_eq(set.ema.get(3).unwrap(), 11.5, 1e-12));
    // RSI[3] = 75 (avg gain 1, avg loss 1/3)
    assert!(approx_eq(set.rsi.get(3).unwrap(), 75.0, 1e-9));
    // VWAP[4] = (10 + 12 + 22 + 24 + 44) / 10
    assert!(approx_eq(set.vwap.get(4).unwrap(), 11.2, 1e-12));
    // Window [10,12,11]: population sd sqrt(2/3)
    let sd = (2.0_f64 / 3.0).sqrt();
    assert!(approx_eq(set.bollinger.upper.get(2).unwrap(), 11.0 + sd, 1e-12));
}
