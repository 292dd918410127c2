//! Tests for account balances

use crate::test_utils::*;
use market_model::{Account, Balance};
use rstest::*;

#[fixture]
fn account() -> Account {
    AccountFactory::btc_eth()
}

#[rstest]
fn test_equity_sums_free_and_locked(account: Account) {
    TestAssertions::assert_approx_eq(account.equity(), 3.5, 1e-12);
}

#[rstest]
fn test_balance_missing_quote_is_zero(account: Account) {
    let (btc, usdt) = account.balance("BTC", "USDT");
    assert_eq!(btc, AccountFactory::balance("BTC", 1.0, 0.5));
    assert_eq!(usdt, Balance::default());
    assert_eq!(usdt.total(), 0.0);
}

#[rstest]
#[case("ETH", "BTC", 2.0, 1.5)]
#[case("BTC", "ETH", 1.5, 2.0)]
#[case("DOGE", "ETH", 0.0, 2.0)]
#[case("DOGE", "XRP", 0.0, 0.0)]
fn test_balance_lookup(
    account: Account,
    #[case] asset: &str,
    #[case] quote: &str,
    #[case] asset_total: f64,
    #[case] quote_total: f64,
) {
    let (a, q) = account.balance(asset, quote);
    TestAssertions::assert_approx_eq(a.total(), asset_total, 1e-12);
    TestAssertions::assert_approx_eq(q.total(), quote_total, 1e-12);
}

#[rstest]
fn test_equity_tolerates_duplicates() {
    let account = Account::new(vec![
        AccountFactory::balance("USDT", 10.0, 0.0),
        AccountFactory::balance("USDT", 5.0, 5.0),
    ]);
    TestAssertions::assert_approx_eq(account.equity(), 20.0, 1e-12);
    assert_eq!(account.balance("USDT", "BTC").0.free, 10.0);
}
