use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, Address, Env, IntoVal, Symbol, TryFromVal, Val,
};
use crate::types::{StrategyIdentity, StrategySettings};

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days

/********** Storage Types **********/

const IDENTITY_KEY: &str = "Identity";
const SETTINGS_KEY: &str = "Settings";
const DEPLOYED_KEY: &str = "Deployed";
const LOCKED_KEY: &str = "Locked";

#[derive(Clone)]
#[contracttype]
pub enum StrategyDataKey {
    // Tokens salvage refuses to release
    Unsalvageable(Address),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>, F: FnOnce() -> V>(
    e: &Env,
    key: &K,
    default: F,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default()
    }
}

/********** Identity **********/

/// Fetch the strategy identity
///
/// ### Panics
/// If the strategy was not constructed
pub fn get_identity(e: &Env) -> StrategyIdentity {
    e.storage()
        .instance()
        .get(&Symbol::new(e, IDENTITY_KEY))
        .unwrap_optimized()
}

/// Set the strategy identity. Only called by the constructor.
///
/// ### Arguments
/// * `identity` - The immutable identity record
pub fn set_identity(e: &Env, identity: &StrategyIdentity) {
    e.storage()
        .instance()
        .set::<Symbol, StrategyIdentity>(&Symbol::new(e, IDENTITY_KEY), identity);
}

/********** Settings **********/

/// Fetch the governance-mutable settings
///
/// ### Panics
/// If the strategy was not constructed
pub fn get_settings(e: &Env) -> StrategySettings {
    e.storage()
        .instance()
        .get(&Symbol::new(e, SETTINGS_KEY))
        .unwrap_optimized()
}

/// Set the governance-mutable settings
///
/// ### Arguments
/// * `settings` - The new settings
pub fn set_settings(e: &Env, settings: &StrategySettings) {
    e.storage()
        .instance()
        .set::<Symbol, StrategySettings>(&Symbol::new(e, SETTINGS_KEY), settings);
}

/********** Deployed Balance Cache **********/

/// Fetch the last deployed balance reported by the adapter, 0 if never recorded
pub fn get_deployed(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, DEPLOYED_KEY))
        .unwrap_or(0)
}

/// Record the deployed balance reported by the adapter
///
/// ### Arguments
/// * `deployed` - The adapter balance after the last mutating call
pub fn set_deployed(e: &Env, deployed: &i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, DEPLOYED_KEY), deployed);
}

/********** Lock **********/

pub fn is_locked(e: &Env) -> bool {
    e.storage().instance().has(&Symbol::new(e, LOCKED_KEY))
}

pub fn set_locked(e: &Env) {
    e.storage()
        .instance()
        .set::<Symbol, bool>(&Symbol::new(e, LOCKED_KEY), &true);
}

pub fn del_locked(e: &Env) {
    e.storage().instance().remove(&Symbol::new(e, LOCKED_KEY));
}

/********** Unsalvageable Tokens **********/

/// Check whether a token is protected from salvage
///
/// ### Arguments
/// * `token` - The token address
pub fn is_unsalvageable(e: &Env, token: &Address) -> bool {
    let key = StrategyDataKey::Unsalvageable(token.clone());
    get_persistent_default(
        e,
        &key,
        || false,
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    )
}

/// Add or remove a token from the protected set
///
/// ### Arguments
/// * `token` - The token address
/// * `protected` - Whether salvage must refuse the token
pub fn set_unsalvageable(e: &Env, token: &Address, protected: bool) {
    let key = StrategyDataKey::Unsalvageable(token.clone());
    if protected {
        e.storage()
            .persistent()
            .set::<StrategyDataKey, bool>(&key, &true);
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    } else {
        e.storage().persistent().remove(&key);
    }
}
