use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};
use crate::constants::SCALAR_7;
use crate::dependencies::ForwarderClient;
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::strategy::strategy::Strategy;

/// Fee owed on `value`
/// Formula: Fee = Value × Fee Split, rounded down
pub fn fee_share(e: &Env, value: i128, fee_split: i128) -> i128 {
    if value <= 0 || fee_split <= 0 {
        return 0;
    }
    value.fixed_mul_floor(e, &fee_split, &SCALAR_7)
}

/// Forward the fee share of `value` (denominated in `token`) and return the remainder
pub fn split(e: &Env, strategy: &Strategy, token: &Address, value: i128) -> i128 {
    let fee = fee_share(e, value, strategy.settings.fee_split);
    forward(e, strategy, token, fee);
    value - fee
}

/// Transfer `fee` of `token` to the fee forwarder and notify it
///
/// ### Panics
/// If the forwarder rejects the notification
pub fn forward(e: &Env, strategy: &Strategy, token: &Address, fee: i128) {
    if fee <= 0 {
        return;
    }
    let forwarder = &strategy.identity.fee_forwarder;
    let strategy_address = e.current_contract_address();
    TokenClient::new(e, token).transfer(&strategy_address, forwarder, &fee);

    match ForwarderClient::new(e, forwarder).try_notify_profit(&strategy_address, &fee, token) {
        Ok(Ok(())) => {}
        _ => panic_with_error!(e, StrategyError::AdapterFailure),
    }
    StrategyEvents::profit_shared(e, token.clone(), forwarder.clone(), fee);
}
