//! Single OHLCV observation

use crate::heikin_ashi::HeikinAshi;
use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// OHLCV candle for one interval of one pair
///
/// The `Default` value is the empty candle, used as a "no data" sentinel
/// (see [`Candle::is_empty`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Trading pair, e.g. `BTCUSDT`
    pub pair: String,
    /// Open time of the interval
    pub time: DateTime<Utc>,
    /// Time the candle was last refreshed by the feed
    pub updated_at: DateTime<Utc>,
    /// Open price
    pub open: f64,
    /// Close price
    pub close: f64,
    /// Low price
    pub low: f64,
    /// High price
    pub high: f64,
    /// Traded volume
    pub volume: f64,
    /// Whether the interval is closed
    pub complete: bool,
    /// Additional columns supplied by the feed (e.g. CSV extras)
    #[serde(default)]
    pub metadata: FxHashMap<String, f64>,
}

impl Candle {
    /// Check if this is the empty sentinel candle
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pair.is_empty() && self.close == 0.0 && self.open == 0.0 && self.volume == 0.0
    }

    /// Order by time, then update time, then pair
    #[must_use]
    pub fn order(&self, other: &Self) -> Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| self.updated_at.cmp(&other.updated_at))
            .then_with(|| self.pair.cmp(&other.pair))
    }

    /// Check if this candle sorts strictly before `other`
    #[must_use]
    pub fn less(&self, other: &Self) -> bool {
        self.order(other) == Ordering::Less
    }

    /// Render as `[unix_time, open, close, low, high, volume]`
    ///
    /// Prices and volume use `precision` fixed decimals.
    #[must_use]
    pub fn to_slice(&self, precision: usize) -> Vec<String> {
        vec![
            self.time.timestamp().to_string(),
            format!("{:.*}", precision, self.open),
            format!("{:.*}", precision, self.close),
            format!("{:.*}", precision, self.low),
            format!("{:.*}", precision, self.high),
            format!("{:.*}", precision, self.volume),
        ]
    }

    /// Smooth this candle with the given recurrence
    ///
    /// Pair, volume, completeness and timestamps are carried over from the
    /// raw candle; metadata is dropped.
    #[must_use]
    pub fn to_heikin_ashi(&self, ha: &mut HeikinAshi) -> Self {
        let smoothed = ha.calculate(self);
        self.with_prices_of(&smoothed)
    }

    pub(crate) fn with_prices_of(&self, smoothed: &Self) -> Self {
        Self {
            pair: self.pair.clone(),
            time: self.time,
            updated_at: self.updated_at,
            open: smoothed.open,
            close: smoothed.close,
            low: smoothed.low,
            high: smoothed.high,
            volume: self.volume,
            complete: self.complete,
            metadata: FxHashMap::default(),
        }
    }
}

/// Candle wrapper ordered by [`Candle::order`]
///
/// Lets candles live in `BTreeSet`/`BinaryHeap`. Equality follows the
/// ordering key only, prices are not compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderedCandle(pub Candle);

impl PartialEq for OrderedCandle {
    fn eq(&self, other: &Self) -> bool {
        self.0.order(&other.0) == Ordering::Equal
    }
}

impl Eq for OrderedCandle {}

impl PartialOrd for OrderedCandle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedCandle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.order(&other.0)
    }
}

impl From<Candle> for OrderedCandle {
    fn from(candle: Candle) -> Self {
        Self(candle)
    }
}
