//! Per-pair OHLC series with custom indicator columns

use crate::candle::Candle;
use crate::error::{ModelError, Result};
use crate::ohlc::Ohlc;
use crate::series::Series;
use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::trace;

/// How [`Dataframe::sample_with`] treats the metadata columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataWindow {
    /// Share the metadata map with the source unchanged
    #[default]
    Shared,
    /// Truncate every metadata series to the sampled window
    Windowed,
}

/// OHLC series of one trading pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataframe {
    /// Trading pair
    pub pair: String,
    /// Price series
    pub ohlc: Ohlc,
    /// Update time of the newest candle applied
    pub last_update: DateTime<Utc>,
    metadata: Arc<FxHashMap<String, Series<f64>>>,
}

impl Dataframe {
    /// Create an empty dataframe for `pair`
    #[must_use]
    pub fn new(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            ..Self::default()
        }
    }

    /// Wrap an existing series
    #[must_use]
    pub fn from_ohlc(pair: impl Into<String>, ohlc: Ohlc) -> Self {
        Self {
            pair: pair.into(),
            ohlc,
            ..Self::default()
        }
    }

    /// Number of observations
    #[must_use]
    pub fn len(&self) -> usize {
        self.ohlc.len()
    }

    /// Check if there are no observations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ohlc.is_empty()
    }

    /// Apply a candle from the feed
    ///
    /// A candle with the same open time as the newest bar replaces it (the
    /// interval is still forming); any other candle is appended. Candles
    /// without a pair are accepted as belonging to this dataframe.
    pub fn update(&mut self, candle: &Candle) -> Result<()> {
        if !candle.pair.is_empty() && candle.pair != self.pair {
            return Err(ModelError::PairMismatch {
                expected: self.pair.clone(),
                actual: candle.pair.clone(),
            });
        }

        if self.ohlc.replace_last(candle) {
            trace!("{}: refreshed bar at {}", self.pair, candle.time);
        } else {
            self.ohlc.push(candle);
            trace!("{}: appended bar at {}", self.pair, candle.time);
        }
        self.last_update = candle.updated_at;
        Ok(())
    }

    /// Candle at `index`, tagged with this pair
    pub fn candle(&self, index: usize) -> Result<Candle> {
        let mut candle = self.ohlc.candle(index)?;
        candle.pair.clone_from(&self.pair);
        Ok(candle)
    }

    /// Newest candle tagged with this pair, or the empty candle
    #[must_use]
    pub fn last(&self) -> Candle {
        if self.is_empty() {
            return Candle::default();
        }
        let mut candle = self.ohlc.last();
        candle.pair.clone_from(&self.pair);
        candle
    }

    /// Custom series by name
    #[must_use]
    pub fn metadata(&self, name: &str) -> Option<&Series<f64>> {
        self.metadata.get(name)
    }

    /// All custom series
    #[must_use]
    pub fn metadata_map(&self) -> &FxHashMap<String, Series<f64>> {
        &self.metadata
    }

    /// Insert or replace a custom series
    ///
    /// Dataframes sampled earlier keep their own view of the map.
    pub fn set_metadata(&mut self, name: impl Into<String>, series: Series<f64>) {
        Arc::make_mut(&mut self.metadata).insert(name.into(), series);
    }

    /// Check if both dataframes point at the same metadata map
    #[must_use]
    pub fn shares_metadata_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.metadata, &other.metadata)
    }

    /// Newest `positions` observations, metadata shared
    #[must_use]
    pub fn sample(&self, positions: usize) -> Self {
        self.sample_with(positions, MetadataWindow::Shared)
    }

    /// Newest `positions` observations
    ///
    /// Core columns are copied unchanged when there are no more than
    /// `positions` observations. Windowed metadata is truncated to its last
    /// `positions` values whatever the number of bars.
    #[must_use]
    pub fn sample_with(&self, positions: usize, window: MetadataWindow) -> Self {
        if window == MetadataWindow::Shared && self.len() <= positions {
            return self.clone();
        }
        trace!(
            "{}: sampling {} of {} bars ({:?} metadata)",
            self.pair,
            positions,
            self.len(),
            window
        );

        let metadata = match window {
            MetadataWindow::Shared => Arc::clone(&self.metadata),
            MetadataWindow::Windowed => Arc::new(
                self.metadata
                    .iter()
                    .map(|(name, series)| {
                        (name.clone(), Series::from(series.last_values(positions).to_vec()))
                    })
                    .collect(),
            ),
        };

        Self {
            pair: self.pair.clone(),
            ohlc: self.ohlc.tail(positions),
            last_update: self.last_update,
            metadata,
        }
    }

    /// Heikin Ashi smoothed copy, metadata shared
    pub fn to_heikin_ashi(&self) -> Result<Self> {
        Ok(Self {
            pair: self.pair.clone(),
            ohlc: self.ohlc.to_heikin_ashi()?,
            last_update: self.last_update,
            metadata: Arc::clone(&self.metadata),
        })
    }
}
