//! Exchange trading rules for a pair

use serde::{Deserialize, Serialize};

/// Trading rules of a pair as published by the exchange
///
/// Filled in by the exchange adapter and passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    /// Base asset, e.g. `BTC`
    pub base_asset: String,
    /// Quote asset, e.g. `USDT`
    pub quote_asset: String,

    /// Lowest accepted price
    pub min_price: f64,
    /// Highest accepted price
    pub max_price: f64,
    /// Lowest accepted order quantity
    pub min_quantity: f64,
    /// Highest accepted order quantity
    pub max_quantity: f64,
    /// Quantity increment
    pub step_size: f64,
    /// Price increment
    pub tick_size: f64,

    /// Decimals of quote amounts
    pub quote_precision: u32,
    /// Decimals of base amounts
    pub base_asset_precision: u32,
}

impl AssetInfo {
    /// Pair symbol, base followed by quote
    #[must_use]
    pub fn pair(&self) -> String {
        format!("{}{}", self.base_asset, self.quote_asset)
    }
}
