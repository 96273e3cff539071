#![cfg(feature = "testutils")]

use crate::constants::{DEFAULT_ARB_TOLERANCE, DEFAULT_FEE_SPLIT};
use crate::{StrategyContract, StrategyIdentity, StrategySettings};
use soroban_sdk::{Address, Env};

/// Register a strategy contract for the given identity
pub fn register_strategy(e: &Env, identity: &StrategyIdentity) -> Address {
    e.register(
        StrategyContract {},
        (
            identity.underlying.clone(),
            identity.vault.clone(),
            identity.registry.clone(),
            identity.adapter.clone(),
            identity.crop.clone(),
            identity.router.clone(),
            identity.fee_forwarder.clone(),
            identity.fee_mode,
        ),
    )
}

/// Settings every strategy starts with
pub fn default_settings() -> StrategySettings {
    StrategySettings {
        liquidation_enabled: true,
        fee_split: DEFAULT_FEE_SPLIT, // 30%
        sell_floor: 0,
        arb_oracle: None,
        arb_tolerance: DEFAULT_ARB_TOLERANCE, // 1%
        investing_paused: false,
    }
}
