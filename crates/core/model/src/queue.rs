//! Time-ordered candle queue
//!
//! Merges candles arriving out of order from several feeds; the earliest
//! candle (by [`Candle::order`]) is always popped first.

use crate::candle::{Candle, OrderedCandle};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-priority queue of candles
#[derive(Debug, Clone, Default)]
pub struct CandleQueue {
    heap: BinaryHeap<Reverse<OrderedCandle>>,
}

impl CandleQueue {
    /// Create an empty queue
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued candles
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if the queue is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Queue a candle
    pub fn push(&mut self, candle: Candle) {
        self.heap.push(Reverse(OrderedCandle(candle)));
    }

    /// Earliest candle without removing it
    #[must_use]
    pub fn peek(&self) -> Option<&Candle> {
        self.heap.peek().map(|Reverse(c)| &c.0)
    }

    /// Remove and return the earliest candle
    pub fn pop(&mut self) -> Option<Candle> {
        self.heap.pop().map(|Reverse(c)| c.0)
    }
}

impl Extend<Candle> for CandleQueue {
    fn extend<I: IntoIterator<Item = Candle>>(&mut self, iter: I) {
        for candle in iter {
            self.push(candle);
        }
    }
}

impl FromIterator<Candle> for CandleQueue {
    fn from_iter<I: IntoIterator<Item = Candle>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
