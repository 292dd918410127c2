//! OHLC time series container
//!
//! Observations are stored one record per index, so the open, high, low,
//! close, volume and time columns can never drift out of alignment. Column
//! views are built on demand for bulk math.

use crate::candle::Candle;
use crate::error::{ModelError, Result};
use crate::heikin_ashi;
use crate::series::Series;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One observation of an OHLC series
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Open time of the interval
    pub time: DateTime<Utc>,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Traded volume
    pub volume: f64,
}

impl Bar {
    /// Relative body size, `(close - open) / open`
    #[must_use]
    pub fn change_percent(&self) -> f64 {
        (self.close - self.open) / self.open
    }

    /// Check if the bar closed above its open
    #[must_use]
    pub fn is_bull(&self) -> bool {
        self.close > self.open
    }

    /// Candle view of this bar (no pair)
    #[must_use]
    pub fn to_candle(&self) -> Candle {
        Candle {
            time: self.time,
            open: self.open,
            close: self.close,
            low: self.low,
            high: self.high,
            volume: self.volume,
            ..Candle::default()
        }
    }
}

impl From<&Candle> for Bar {
    fn from(candle: &Candle) -> Self {
        Self {
            time: candle.time,
            open: candle.open,
            high: candle.high,
            low: candle.low,
            close: candle.close,
            volume: candle.volume,
        }
    }
}

/// Whether a series holds raw or smoothed prices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKind {
    /// Prices as received from the feed
    #[default]
    Raw,
    /// Heikin Ashi smoothed prices
    HeikinAshi,
}

/// Time-ordered OHLCV series, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ohlc {
    bars: Vec<Bar>,
    kind: SeriesKind,
}

impl Ohlc {
    /// Create an empty raw series
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bars: Vec::new(),
            kind: SeriesKind::Raw,
        }
    }

    /// Build a raw series from parallel columns
    ///
    /// Every column must have the length of `close`.
    pub fn from_columns(
        close: &[f64],
        open: &[f64],
        high: &[f64],
        low: &[f64],
        volume: &[f64],
        time: &[DateTime<Utc>],
    ) -> Result<Self> {
        let expected = close.len();
        let lengths = [
            ("open", open.len()),
            ("high", high.len()),
            ("low", low.len()),
            ("volume", volume.len()),
            ("time", time.len()),
        ];
        if let Some(&(column, actual)) = lengths.iter().find(|(_, len)| *len != expected) {
            return Err(ModelError::LengthMismatch {
                column,
                expected,
                actual,
            });
        }

        let bars = (0..expected)
            .map(|i| Bar {
                time: time[i],
                open: open[i],
                high: high[i],
                low: low[i],
                close: close[i],
                volume: volume[i],
            })
            .collect();

        Ok(Self {
            bars,
            kind: SeriesKind::Raw,
        })
    }

    /// Number of observations
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series has no observations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Raw or smoothed
    #[must_use]
    pub const fn kind(&self) -> SeriesKind {
        self.kind
    }

    /// Check if the prices are Heikin Ashi smoothed
    #[must_use]
    pub fn is_heikin_ashi(&self) -> bool {
        self.kind == SeriesKind::HeikinAshi
    }

    /// Per-index records
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Append an observation
    ///
    /// Ordering is not enforced; an observation older than the newest one is
    /// stored anyway and logged.
    pub fn push(&mut self, candle: &Candle) {
        if let Some(newest) = self.bars.last() {
            if candle.time < newest.time {
                warn!(
                    "Out-of-order candle at {} appended after {}",
                    candle.time, newest.time
                );
            }
        }
        self.bars.push(Bar::from(candle));
    }

    /// Overwrite the observation at `index`
    pub fn set(&mut self, index: usize, candle: &Candle) -> Result<()> {
        let len = self.bars.len();
        let bar = self
            .bars
            .get_mut(index)
            .ok_or(ModelError::IndexOutOfRange { index, len })?;
        *bar = Bar::from(candle);
        Ok(())
    }

    /// Candle view of the observation at `index`
    pub fn candle(&self, index: usize) -> Result<Candle> {
        self.bars
            .get(index)
            .map(Bar::to_candle)
            .ok_or(ModelError::IndexOutOfRange {
                index,
                len: self.bars.len(),
            })
    }

    /// Newest candle, or the empty candle for an empty series
    #[must_use]
    pub fn last(&self) -> Candle {
        self.bars.last().map(Bar::to_candle).unwrap_or_default()
    }

    /// Candle `offset` steps back from the newest
    ///
    /// An empty series yields the empty candle for any offset.
    pub fn last_at(&self, offset: usize) -> Result<Candle> {
        let len = self.bars.len();
        if len == 0 {
            return Ok(Candle::default());
        }
        if offset >= len {
            return Err(ModelError::IndexOutOfRange { index: offset, len });
        }
        self.candle(len - 1 - offset)
    }

    /// `(high + low) / 2` per index
    #[must_use]
    pub fn hl2(&self) -> Series<f64> {
        self.bars.iter().map(|b| (b.high + b.low) / 2.0).collect()
    }

    /// `(high + low + close) / 3` per index
    #[must_use]
    pub fn hlc3(&self) -> Series<f64> {
        self.bars
            .iter()
            .map(|b| (b.high + b.low + b.close) / 3.0)
            .collect()
    }

    /// `(open + high + low + close) / 4` per index
    #[must_use]
    pub fn ohlc4(&self) -> Series<f64> {
        self.bars
            .iter()
            .map(|b| (b.open + b.high + b.low + b.close) / 4.0)
            .collect()
    }

    /// Close column
    #[must_use]
    pub fn closes(&self) -> Series<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Open column
    #[must_use]
    pub fn opens(&self) -> Series<f64> {
        self.bars.iter().map(|b| b.open).collect()
    }

    /// High column
    #[must_use]
    pub fn highs(&self) -> Series<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    /// Low column
    #[must_use]
    pub fn lows(&self) -> Series<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    /// Volume column
    #[must_use]
    pub fn volumes(&self) -> Series<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Time column
    #[must_use]
    pub fn times(&self) -> Vec<DateTime<Utc>> {
        self.bars.iter().map(|b| b.time).collect()
    }

    /// `(close - open) / open` per index
    #[must_use]
    pub fn change_percent(&self) -> Series<f64> {
        self.bars.iter().map(Bar::change_percent).collect()
    }

    /// `close > open` per index
    #[must_use]
    pub fn is_bull_market(&self) -> Vec<bool> {
        self.bars.iter().map(Bar::is_bull).collect()
    }

    /// Heikin Ashi smoothed copy of this series
    ///
    /// Volume and time are kept. Smoothing an already smoothed series is
    /// rejected.
    pub fn to_heikin_ashi(&self) -> Result<Self> {
        if self.is_heikin_ashi() {
            warn!("Refusing to smooth a series that is already Heikin Ashi");
            return Err(ModelError::AlreadySmoothed);
        }

        let raw: Vec<Candle> = self.bars.iter().map(Bar::to_candle).collect();
        let bars: Vec<Bar> = heikin_ashi::smooth(&raw).iter().map(Bar::from).collect();
        debug!("Converted {} candles to Heikin Ashi", bars.len());

        Ok(Self {
            bars,
            kind: SeriesKind::HeikinAshi,
        })
    }

    /// Copy of the newest `size` observations
    #[must_use]
    pub fn tail(&self, size: usize) -> Self {
        let start = self.bars.len().saturating_sub(size);
        Self {
            bars: self.bars[start..].to_vec(),
            kind: self.kind,
        }
    }

    pub(crate) fn replace_last(&mut self, candle: &Candle) -> bool {
        match self.bars.last_mut() {
            Some(bar) if bar.time == candle.time => {
                *bar = Bar::from(candle);
                true
            }
            _ => false,
        }
    }
}

impl FromIterator<Candle> for Ohlc {
    fn from_iter<I: IntoIterator<Item = Candle>>(iter: I) -> Self {
        let mut ohlc = Self::new();
        for candle in iter {
            ohlc.push(&candle);
        }
        ohlc
    }
}
