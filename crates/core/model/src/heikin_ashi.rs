//! Heikin Ashi smoothing
//!
//! Each smoothed candle depends on the previous smoothed candle, so a stream
//! must be fed in ascending time order. Feeding it out of order produces
//! wrong values without any error.

use crate::candle::Candle;
use serde::{Deserialize, Serialize};

/// Compute one smoothed candle from the previous smoothed candle
///
/// With no previous candle the raw candle seeds its own open average.
/// Only the price fields of the result are set.
#[must_use]
pub fn next_candle(previous: Option<&Candle>, raw: &Candle) -> Candle {
    let (prev_open, prev_close) = previous.map_or((raw.open, raw.close), |p| (p.open, p.close));

    let open = (prev_open + prev_close) / 2.0;
    let close = (raw.open + raw.high + raw.low + raw.close) / 4.0;

    Candle {
        open,
        close,
        high: raw.high.max(open).max(close),
        low: raw.low.min(open).min(close),
        ..Candle::default()
    }
}

/// Smooth a time-ordered run of raw candles
///
/// Pair, volume, completeness and timestamps of every raw candle are kept.
pub fn smooth<'a, I>(candles: I) -> Vec<Candle>
where
    I: IntoIterator<Item = &'a Candle>,
{
    candles
        .into_iter()
        .scan(None::<Candle>, |previous, raw| {
            let smoothed = next_candle(previous.as_ref(), raw);
            let candle = raw.with_prices_of(&smoothed);
            *previous = Some(smoothed);
            Some(candle)
        })
        .collect()
}

/// Streaming Heikin Ashi recurrence
///
/// Keep one instance per pair; never share it between unrelated series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeikinAshi {
    previous: Option<Candle>,
}

impl HeikinAshi {
    /// Create a recurrence with no history
    #[must_use]
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// Smooth the next raw candle and remember the result
    pub fn calculate(&mut self, candle: &Candle) -> Candle {
        let smoothed = next_candle(self.previous.as_ref(), candle);
        self.previous = Some(smoothed.clone());
        smoothed
    }

    /// Last smoothed candle, if any
    #[must_use]
    pub const fn previous(&self) -> Option<&Candle> {
        self.previous.as_ref()
    }

    /// Forget the history so the next candle seeds itself again
    pub fn reset(&mut self) {
        self.previous = None;
    }
}
