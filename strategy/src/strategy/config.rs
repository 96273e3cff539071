use soroban_sdk::{panic_with_error, Address, Env};
use crate::constants::{DEFAULT_ARB_TOLERANCE, DEFAULT_FEE_SPLIT, SCALAR_7};
use crate::dependencies::VaultClient;
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::storage;
use crate::strategy::access::{require_role, Role};
use crate::strategy::strategy::{lock, unlock, Strategy};
use crate::types::{StrategyIdentity, StrategySettings};

pub fn execute_initialize(e: &Env, identity: &StrategyIdentity) {
    if identity.underlying == identity.crop {
        panic_with_error!(e, StrategyError::InvalidConfig);
    }
    if VaultClient::new(e, &identity.vault).token() != identity.underlying {
        panic_with_error!(e, StrategyError::InvalidConfig);
    }

    storage::set_identity(e, identity);
    storage::set_settings(
        e,
        &StrategySettings {
            liquidation_enabled: true,
            fee_split: DEFAULT_FEE_SPLIT,
            sell_floor: 0,
            arb_oracle: None,
            arb_tolerance: DEFAULT_ARB_TOLERANCE,
            investing_paused: false,
        },
    );
    storage::set_deployed(e, &0);

    // the underlying and the crop token are never salvageable by default
    storage::set_unsalvageable(e, &identity.underlying, true);
    storage::set_unsalvageable(e, &identity.crop, true);
}

pub fn execute_set_liquidation(e: &Env, caller: &Address, enabled: bool) {
    let mut strategy = Strategy::load(e);
    require_role(e, &strategy.identity, caller, &[Role::Governance]);

    strategy.settings.liquidation_enabled = enabled;
    strategy.store_settings(e);
    StrategyEvents::set_liquidation(e, enabled);
}

pub fn execute_set_fee_split(e: &Env, caller: &Address, fee_split: i128) {
    let mut strategy = Strategy::load(e);
    require_role(e, &strategy.identity, caller, &[Role::Governance]);
    if fee_split < 0 || fee_split > SCALAR_7 {
        panic_with_error!(e, StrategyError::InvalidConfig);
    }

    strategy.settings.fee_split = fee_split;
    strategy.store_settings(e);
    StrategyEvents::set_fee_split(e, fee_split);
}

pub fn execute_set_sell_floor(e: &Env, caller: &Address, sell_floor: i128) {
    let mut strategy = Strategy::load(e);
    require_role(e, &strategy.identity, caller, &[Role::Governance]);
    if sell_floor < 0 {
        panic_with_error!(e, StrategyError::InvalidConfig);
    }

    strategy.settings.sell_floor = sell_floor;
    strategy.store_settings(e);
    StrategyEvents::set_sell_floor(e, sell_floor);
}

pub fn execute_set_arb_check(e: &Env, caller: &Address, oracle: &Option<Address>, tolerance: i128) {
    let mut strategy = Strategy::load(e);
    require_role(e, &strategy.identity, caller, &[Role::Governance]);
    if tolerance < 0 || tolerance > SCALAR_7 {
        panic_with_error!(e, StrategyError::InvalidConfig);
    }

    strategy.settings.arb_oracle = oracle.clone();
    strategy.settings.arb_tolerance = tolerance;
    strategy.store_settings(e);
    StrategyEvents::set_arb_check(e, oracle.clone(), tolerance);
}

/// Pull everything out of the adapter and stop investing until governance resumes.
/// Funds stay on the strategy and remain withdrawable by the vault.
pub fn execute_emergency_exit(e: &Env, caller: &Address) -> i128 {
    let mut strategy = Strategy::load(e);
    require_role(e, &strategy.identity, caller, &[Role::Governance]);
    lock(e);

    strategy.settings.investing_paused = true;
    strategy.store_settings(e);

    let deployed = strategy.require_deployed_balance(e);
    let withdrawn = strategy.withdraw_from_adapter(e, deployed);
    strategy.record_deployed(e);

    StrategyEvents::emergency_exit(e, withdrawn);
    unlock(e);
    withdrawn
}

pub fn execute_continue_investing(e: &Env, caller: &Address) {
    let mut strategy = Strategy::load(e);
    require_role(e, &strategy.identity, caller, &[Role::Governance]);

    strategy.settings.investing_paused = false;
    strategy.store_settings(e);
    StrategyEvents::continue_investing(e);
}
