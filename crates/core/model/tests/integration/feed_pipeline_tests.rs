//! End-to-end flow from out-of-order feeds to sampled Heikin Ashi frames

use crate::test_utils::*;
use market_model::{CandleQueue, Dataframe, HeikinAshi, MetadataWindow, Settings};
use rstest::*;
use rustc_hash::FxHashMap;

#[fixture]
fn settings() -> Settings {
    Settings {
        pairs: vec!["BTCUSDT".to_string(), "ETHUSDT".to_string()],
        ..Default::default()
    }
}

#[rstest]
fn test_queue_to_dataframes_to_heikin_ashi(settings: Settings) {
    init_tracing();

    // Two feeds delivered in reverse and interleaved
    let mut queue = CandleQueue::new();
    for pair in &settings.pairs {
        queue.extend(CandleFactory::trending(pair, 20, 100.0).into_iter().rev());
    }

    let mut frames: FxHashMap<String, Dataframe> = settings
        .pairs
        .iter()
        .map(|pair| (pair.clone(), Dataframe::new(pair.as_str())))
        .collect();
    while let Some(candle) = queue.pop() {
        let frame = frames.get_mut(&candle.pair).expect("configured pair");
        frame.update(&candle).unwrap();
    }

    for pair in &settings.pairs {
        let frame = &frames[pair];
        assert_eq!(frame.len(), 20);
        let times = frame.ohlc.times();
        assert!(times.windows(2).all(|w| w[0] < w[1]));

        // Streaming recurrence must agree with the whole-series conversion
        let smoothed = frame.to_heikin_ashi().unwrap();
        let mut ha = HeikinAshi::new();
        for (i, raw) in CandleFactory::trending(pair, 20, 100.0).iter().enumerate() {
            let expected = raw.to_heikin_ashi(&mut ha);
            let actual = smoothed.candle(i).unwrap();
            TestAssertions::assert_approx_eq(actual.open, expected.open, 1e-9);
            TestAssertions::assert_approx_eq(actual.close, expected.close, 1e-9);
            assert_eq!(actual.pair, *pair);
        }

        let sample = smoothed.sample_with(5, MetadataWindow::Windowed);
        assert_eq!(sample.len(), 5);
        assert!(sample.ohlc.is_heikin_ashi());
        assert_eq!(sample.last(), smoothed.last());
    }
}

#[rstest]
fn test_indicator_columns_on_sample() {
    let mut df = CandleFactory::dataframe("BTCUSDT", 30);
    let hl2 = df.ohlc.hl2();
    df.set_metadata("hl2", hl2.clone());

    let sample = df.sample_with(10, MetadataWindow::Windowed);
    let sampled = sample.metadata("hl2").expect("hl2 column");

    TestAssertions::assert_series_eq(sampled.values(), sample.ohlc.hl2().values(), 1e-12);
    TestAssertions::assert_series_eq(sampled.values(), hl2.last_values(10), 1e-12);
}
