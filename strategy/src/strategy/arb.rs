use sep_40_oracle::{Asset, PriceFeedClient};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::Env;
use crate::constants::{MAX_PRICE_AGE, SCALAR_7};
use crate::dependencies::AdapterClient;
use crate::strategy::strategy::Strategy;

/// Whether it is currently safe for the vault to accept deposits.
///
/// Compares the adapter's spot exchange rate with the reference rate published
/// for the adapter by the configured price feed. Deposits are considered unsafe
/// when the reference is missing or stale, or when the spot rate deviates from it
/// by more than the tolerance. Without a price feed the check always passes.
/// Never fails.
pub fn deposit_arb_check(e: &Env) -> bool {
    let strategy = Strategy::load(e);
    let oracle = match strategy.settings.arb_oracle.clone() {
        Some(oracle) => oracle,
        None => return true,
    };

    let spot = match AdapterClient::new(e, &strategy.identity.adapter).try_exchange_rate() {
        Ok(Ok(rate)) => rate,
        _ => return false,
    };
    let asset = Asset::Stellar(strategy.identity.adapter.clone());
    let reference = match PriceFeedClient::new(e, &oracle).try_lastprice(&asset) {
        Ok(Ok(Some(price_data))) => price_data,
        _ => return false,
    };

    if spot <= 0 || reference.price <= 0 {
        return false;
    }
    if reference.timestamp + MAX_PRICE_AGE < e.ledger().timestamp() {
        return false;
    }

    let deviation = (spot - reference.price)
        .abs()
        .fixed_div_floor(e, &reference.price, &SCALAR_7);
    deviation <= strategy.settings.arb_tolerance
}
