use soroban_sdk::token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::storage;
use crate::strategy::access::{require_role, Role};
use crate::strategy::strategy::{lock, unlock, Strategy};

/// Recover tokens sent to the strategy by mistake. Bypasses strategy accounting.
///
/// ### Panics
/// If `token` is protected or `amount` is negative
pub fn execute_salvage(e: &Env, caller: &Address, recipient: &Address, token: &Address, amount: i128) {
    let strategy = Strategy::load(e);
    require_role(e, &strategy.identity, caller, &[Role::Governance]);
    if *token == strategy.identity.underlying || storage::is_unsalvageable(e, token) {
        panic_with_error!(e, StrategyError::UnsalvageableToken);
    }
    if amount < 0 {
        panic_with_error!(e, StrategyError::InvalidAmount);
    }
    lock(e);

    if amount > 0 {
        TokenClient::new(e, token).transfer(&e.current_contract_address(), recipient, &amount);
    }

    StrategyEvents::salvage(e, token.clone(), recipient.clone(), amount);
    unlock(e);
}

/// Add or remove a token from the protected set. The underlying can never be removed.
///
/// ### Panics
/// If asked to unprotect the underlying
pub fn execute_set_unsalvageable(e: &Env, caller: &Address, token: &Address, protected: bool) {
    let strategy = Strategy::load(e);
    require_role(e, &strategy.identity, caller, &[Role::Governance]);
    if !protected && *token == strategy.identity.underlying {
        panic_with_error!(e, StrategyError::InvalidConfig);
    }

    storage::set_unsalvageable(e, token, protected);
    StrategyEvents::set_unsalvageable(e, token.clone(), protected);
}
