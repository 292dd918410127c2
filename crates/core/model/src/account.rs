//! Account balance snapshot

use serde::{Deserialize, Serialize};

/// Holding of a single asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Asset symbol, e.g. `BTC`
    pub asset: String,
    /// Amount available for trading
    pub free: f64,
    /// Amount locked in open orders
    pub lock: f64,
    /// Leverage applied to the holding
    pub leverage: f64,
}

impl Balance {
    /// Free plus locked amount
    #[must_use]
    pub fn total(&self) -> f64 {
        self.free + self.lock
    }
}

/// Balances held on an exchange account
///
/// Entries are kept in the order the exchange reported them; an asset may
/// appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Reported balances
    pub balances: Vec<Balance>,
}

impl Account {
    /// Create an account from reported balances
    #[must_use]
    pub const fn new(balances: Vec<Balance>) -> Self {
        Self { balances }
    }

    /// Balances of the base and quote asset of a pair
    ///
    /// The first entry of each asset wins. A missing asset yields a zero
    /// balance.
    #[must_use]
    pub fn balance(&self, asset_tick: &str, quote_tick: &str) -> (Balance, Balance) {
        let find = |tick: &str| {
            self.balances
                .iter()
                .find(|b| b.asset == tick)
                .cloned()
                .unwrap_or_default()
        };
        (find(asset_tick), find(quote_tick))
    }

    /// Sum of free and locked amounts over all entries
    ///
    /// Amounts are added as-is, without any currency conversion.
    #[must_use]
    pub fn equity(&self) -> f64 {
        self.balances.iter().map(Balance::total).sum()
    }
}
