//! Tests for the OHLC series container

use crate::test_utils::*;
use approx::assert_relative_eq;
use market_model::{Candle, ModelError, Ohlc};
use rstest::*;

#[fixture]
fn series() -> Ohlc {
    CandleFactory::series(12)
}

#[rstest]
fn test_indicator_lengths_match_series(series: Ohlc) {
    assert_eq!(series.hl2().len(), series.len());
    assert_eq!(series.hlc3().len(), series.len());
    assert_eq!(series.ohlc4().len(), series.len());
}

#[rstest]
fn test_indicator_values(series: Ohlc) {
    let hl2 = series.hl2();
    let hlc3 = series.hlc3();
    let ohlc4 = series.ohlc4();

    for (i, bar) in series.bars().iter().enumerate() {
        assert_relative_eq!(hl2[i], (bar.high + bar.low) / 2.0);
        assert_relative_eq!(hlc3[i], (bar.high + bar.low + bar.close) / 3.0);
        assert_relative_eq!(ohlc4[i], (bar.open + bar.high + bar.low + bar.close) / 4.0);
    }
}

#[rstest]
fn test_indicators_known_values() {
    let ohlc: Ohlc = vec![CandleFactory::candle("BTCUSDT", 0, 10.0, 25.0, 5.0, 20.0)]
        .into_iter()
        .collect();

    assert_relative_eq!(ohlc.hl2()[0], 15.0);
    assert_relative_eq!(ohlc.hlc3()[0], 50.0 / 3.0);
    assert_relative_eq!(ohlc.ohlc4()[0], 15.0);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
#[case(11)]
fn test_last_at_matches_candle(series: Ohlc, #[case] offset: usize) {
    let expected = series.candle(series.len() - 1 - offset).unwrap();
    assert_eq!(series.last_at(offset).unwrap(), expected);
}

#[rstest]
fn test_last_is_newest(series: Ohlc) {
    assert_eq!(series.last(), series.candle(series.len() - 1).unwrap());
    assert_eq!(series.last(), series.last_at(0).unwrap());
}

#[rstest]
fn test_last_on_empty_series() {
    let empty = Ohlc::new();
    assert!(empty.last().is_empty());
    assert!(empty.last_at(0).unwrap().is_empty());
    assert_eq!(empty.last(), Candle::default());
}

#[rstest]
fn test_candle_view_is_independent(series: Ohlc) {
    let mut view = series.candle(0).unwrap();
    view.close = -1.0;
    assert_relative_eq!(series.closes()[0], 101.5);
}

#[rstest]
fn test_candle_view_fields(series: Ohlc) {
    let candle = series.candle(2).unwrap();
    let bar = series.bars()[2];
    assert_eq!(candle.time, bar.time);
    assert_relative_eq!(candle.open, 102.0);
    assert_relative_eq!(candle.close, 101.5);
    assert_relative_eq!(candle.high, 102.75);
    assert_relative_eq!(candle.low, 101.25);
    assert_relative_eq!(candle.volume, 1_002.0);
    assert!(candle.pair.is_empty());
}

#[rstest]
fn test_from_columns_time_mismatch() {
    let err = Ohlc::from_columns(&[1.0], &[1.0], &[1.0], &[1.0], &[1.0], &[]).unwrap_err();
    assert_eq!(
        err,
        ModelError::LengthMismatch {
            column: "time",
            expected: 1,
            actual: 0
        }
    );
    assert_eq!(
        err.to_string(),
        "Column length mismatch: time has 0 entries, expected 1"
    );
}

#[rstest]
fn test_from_columns_matches_pushed_series(series: Ohlc) {
    let rebuilt = Ohlc::from_columns(
        series.closes().values(),
        series.opens().values(),
        series.highs().values(),
        series.lows().values(),
        series.volumes().values(),
        &series.times(),
    )
    .unwrap();
    assert_eq!(rebuilt, series);
}

#[rstest]
fn test_out_of_order_push_is_kept() {
    init_tracing();
    let mut ohlc = Ohlc::new();
    ohlc.push(&CandleFactory::candle("BTCUSDT", 5, 1.0, 2.0, 0.5, 1.5));
    ohlc.push(&CandleFactory::candle("BTCUSDT", 1, 3.0, 4.0, 2.5, 3.5));

    assert_eq!(ohlc.len(), 2);
    assert_relative_eq!(ohlc.last().close, 3.5);
}
