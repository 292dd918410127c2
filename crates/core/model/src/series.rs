//! Ordered value column with look-back helpers

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Time-ordered column of values, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series<T>(Vec<T>);

impl<T> Series<T> {
    /// Create an empty series
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Underlying values
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.0
    }

    /// Number of values
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the series has no values
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a value
    pub fn push(&mut self, value: T) {
        self.0.push(value);
    }

    /// Value `position` steps back from the newest (0 = newest)
    #[must_use]
    pub fn last(&self, position: usize) -> Option<&T> {
        let len = self.0.len();
        if position >= len {
            return None;
        }
        self.0.get(len - 1 - position)
    }

    /// Newest `size` values, fewer if the series is shorter
    #[must_use]
    pub fn last_values(&self, size: usize) -> &[T] {
        let start = self.0.len().saturating_sub(size);
        &self.0[start..]
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Take the underlying vector
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl Series<f64> {
    /// Check if this series just crossed above `other`
    #[must_use]
    pub fn crossover(&self, other: &Self) -> bool {
        match (self.last(0), self.last(1), other.last(0), other.last(1)) {
            (Some(now), Some(before), Some(ref_now), Some(ref_before)) => {
                now > ref_now && before <= ref_before
            }
            _ => false,
        }
    }

    /// Check if this series just crossed below `other`
    #[must_use]
    pub fn crossunder(&self, other: &Self) -> bool {
        match (self.last(0), self.last(1), other.last(0), other.last(1)) {
            (Some(now), Some(before), Some(ref_now), Some(ref_before)) => {
                now < ref_now && before >= ref_before
            }
            _ => false,
        }
    }
}

impl<T> From<Vec<T>> for Series<T> {
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a, T> IntoIterator for &'a Series<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
