use soroban_sdk::token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::strategy::access::{require_role, WITHDRAW_ROLES};
use crate::strategy::strategy::{lock, unlock, Strategy};

/// Move the whole invested balance back to the vault. A no-op at zero balance.
///
/// Returns the amount transferred to the vault
pub fn execute_withdraw_all_to_vault(e: &Env, caller: &Address) -> i128 {
    let strategy = Strategy::load(e);
    require_role(e, &strategy.identity, caller, &WITHDRAW_ROLES);
    lock(e);

    let deployed = strategy.require_deployed_balance(e);
    strategy.withdraw_from_adapter(e, deployed);
    strategy.record_deployed(e);

    let available = strategy.idle_balance(e);
    transfer_to_vault(e, &strategy, available);

    StrategyEvents::withdraw_to_vault(e, caller.clone(), available, available);
    unlock(e);
    available
}

/// Move `amount` of underlying back to the vault, capped at the invested balance.
///
/// Returns the amount transferred to the vault
///
/// ### Panics
/// If `amount` is not positive
pub fn execute_withdraw_to_vault(e: &Env, caller: &Address, amount: i128) -> i128 {
    let strategy = Strategy::load(e);
    require_role(e, &strategy.identity, caller, &WITHDRAW_ROLES);
    if amount <= 0 {
        panic_with_error!(e, StrategyError::InvalidAmount);
    }
    lock(e);

    let idle = strategy.idle_balance(e);
    if amount > idle {
        let deployed = strategy.require_deployed_balance(e);
        strategy.withdraw_from_adapter(e, (amount - idle).min(deployed));
        strategy.record_deployed(e);
    }

    let transferred = amount.min(strategy.idle_balance(e));
    transfer_to_vault(e, &strategy, transferred);

    StrategyEvents::withdraw_to_vault(e, caller.clone(), amount, transferred);
    unlock(e);
    transferred
}

fn transfer_to_vault(e: &Env, strategy: &Strategy, amount: i128) {
    if amount <= 0 {
        return;
    }
    TokenClient::new(e, &strategy.identity.underlying).transfer(
        &e.current_contract_address(),
        &strategy.identity.vault,
        &amount,
    );
}
