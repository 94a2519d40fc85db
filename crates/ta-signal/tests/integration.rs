//! Integration tests for the public API.
//!
//! These tests exercise typical usage through the prelude: computing single
//! indicators, running the whole pipeline, and handling errors.

#![allow(clippy::needless_range_loop)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

mod common;

use common::{generate_close, generate_volume, has_undefined_prefix};
use ta_signal::prelude::*;

fn sample_prices() -> Vec<f64> {
    vec![
        44.0, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0, 45.5, 44.5, 43.5, 44.0, 45.0,
        46.0, 46.5, 45.5, 44.5, 45.0,
    ]
}

// ==================== Basic Usage Tests ====================

#[test]
fn test_prelude_import_basic() {
    let prices = sample_prices();
    let volume = vec![100.0; prices.len()];

    let _sma = sma(&prices, 5).unwrap();
    let _ema = ema(&prices, 5).unwrap();
    let _rsi = rsi(&prices, 5).unwrap();
    let _macd = macd(&prices, &MacdParams::new().fast(3).slow(6).signal(3)).unwrap();
    let _bands = bollinger(&prices, 5, 2.0).unwrap();
    let _vwap = vwap(&prices, &volume).unwrap();
}

#[test]
fn test_lookback_matches_undefined_prefix() {
    let prices = sample_prices();

    assert!(has_undefined_prefix(&sma(&prices, 5).unwrap(), sma_lookback(5)));
    assert!(has_undefined_prefix(&ema(&prices, 5).unwrap(), ema_lookback(5)));
    assert!(has_undefined_prefix(&rsi(&prices, 5).unwrap(), rsi_lookback(5)));

    let params = MacdParams::new().fast(3).slow(6).signal(4);
    let result = macd(&prices, &params).unwrap();
    assert!(has_undefined_prefix(&result.macd_line, macd_line_lookback(6)));
    assert!(has_undefined_prefix(&result.signal_line, macd_signal_lookback(6, 4)));
    assert!(has_undefined_prefix(&result.histogram, macd_signal_lookback(6, 4)));

    let bands = bollinger(&prices, 5, 2.0).unwrap();
    assert!(has_undefined_prefix(&bands.middle, bollinger_lookback(5)));

    let volume = vec![10.0; prices.len()];
    assert!(has_undefined_prefix(&vwap(&prices, &volume).unwrap(), vwap_lookback()));
}

#[test]
fn test_full_pipeline_on_generated_data() {
    let close = generate_close(500);
    let volume = generate_volume(500);

    let input = PriceVolume::new(&close, &volume).unwrap();
    let analysis = analyze(&input, &IndicatorConfig::default()).unwrap();

    assert_eq!(analysis.len(), 500);
    for (name, series) in analysis.columns() {
        assert_eq!(series.len(), 500, "{name}");
        // Long enough for every indicator to be defined at the end
        assert!(series.get(499).is_some(), "{name}");
    }
}

#[test]
fn test_signals_match_rule_applied_by_hand() {
    let close = generate_close(300);
    let volume = generate_volume(300);
    let input = PriceVolume::new(&close, &volume).unwrap();
    let analysis = analyze(&input, &IndicatorConfig::default()).unwrap();

    let rsi = &analysis.indicators.rsi;
    let vwap = &analysis.indicators.vwap;
    for i in 0..close.len() {
        let expected_buy = matches!((rsi.get(i), vwap.get(i)), (Some(r), Some(v)) if r < 30.0 && close[i] < v);
        let expected_sell = matches!((rsi.get(i), vwap.get(i)), (Some(r), Some(v)) if r > 70.0 && close[i] > v);
        assert_eq!(analysis.signals.buy.get(i), expected_buy, "buy at {i}");
        assert_eq!(analysis.signals.sell.get(i), expected_sell, "sell at {i}");
    }
}

#[test]
fn test_f32_pipeline() {
    let close: Vec<f32> = generate_close(100).into_iter().map(|x| x as f32).collect();
    let volume: Vec<f32> = generate_volume(100).into_iter().map(|x| x as f32).collect();

    let input = PriceVolume::new(&close, &volume).unwrap();
    let analysis = analyze(&input, &IndicatorConfig::default()).unwrap();
    assert_eq!(analysis.indicators.macd.signal_line.first_defined_index(), Some(33));
}

#[test]
fn test_analysis_serializes_to_json() {
    let close = sample_prices();
    let volume = vec![100.0; close.len()];
    let input = PriceVolume::new(&close, &volume).unwrap();
    let analysis = analyze(&input, &IndicatorConfig::default()).unwrap();

    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["config"]["rsi_period"], 14);
    assert!(json["indicators"]["sma"][0].is_null());
    assert!(json["indicators"]["sma"][19].is_number());
    assert_eq!(json["signals"]["buy"].as_array().unwrap().len(), 20);
}

#[test]
fn test_nan_export_for_presenters() {
    let prices = sample_prices();
    let flat = sma(&prices, 5).unwrap().to_nan_vec();
    assert_eq!(flat.len(), prices.len());
    assert!(flat[..4].iter().all(|x| x.is_nan()));
    assert!(flat[4..].iter().all(|x| x.is_finite()));
}

// ==================== Error Handling Tests ====================

#[test]
fn test_handle_errors_gracefully() {
    let prices = sample_prices();

    match sma(&prices, 0) {
        Err(Error::InvalidPeriod { period, .. }) => assert_eq!(period, 0),
        other => panic!("expected InvalidPeriod, got {other:?}"),
    }

    let mut corrupted = prices.clone();
    corrupted[7] = f64::NAN;
    match analyze(
        &PriceVolume::new(&prices, &vec![1.0; prices.len()]).unwrap(),
        &IndicatorConfig::new().macd(MacdParams::new().fast(26).slow(12)),
    ) {
        Err(Error::InvalidPeriod { .. }) => {}
        other => panic!("expected InvalidPeriod, got {other:?}"),
    }
    assert_eq!(
        PriceVolume::new(&corrupted, &vec![1.0; prices.len()]).unwrap_err(),
        Error::NonFiniteValue {
            series: "close",
            index: 7
        }
    );
}

#[test]
fn test_error_messages_are_actionable() {
    let err = PriceVolume::new(&[1.0_f64, 2.0, 3.0], &[1.0, 1.0]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "length mismatch: close has 3 elements, volume has 2"
    );

    let err = PriceVolume::new(&[1.0_f64], &[-5.0]).unwrap_err();
    assert_eq!(err.to_string(), "negative volume at index 0");
}
