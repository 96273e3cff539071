use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol};

// Persistent storage keys
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DataKey {
    Shares(Address), // Stores the share balance of a depositor as i128
}

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

// Instance storage key strings
const TOKEN: &str = "Token";
const ADMIN: &str = "Admin";
const STRATEGY: &str = "Strategy";
const TOTAL_SHARES: &str = "TotalShares";

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

pub fn get_token(e: &Env) -> Address {
    e.storage().instance().get(&Symbol::new(e, TOKEN)).unwrap_optimized()
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&Symbol::new(e, TOKEN), token);
}

pub fn get_admin(e: &Env) -> Address {
    e.storage().instance().get(&Symbol::new(e, ADMIN)).unwrap_optimized()
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&Symbol::new(e, ADMIN), admin);
}

pub fn get_strategy(e: &Env) -> Option<Address> {
    e.storage().instance().get(&Symbol::new(e, STRATEGY))
}

pub fn set_strategy(e: &Env, strategy: &Address) {
    e.storage().instance().set(&Symbol::new(e, STRATEGY), strategy);
}

pub fn get_total_shares(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, TOTAL_SHARES))
        .unwrap_optimized()
}

pub fn set_total_shares(e: &Env, total_shares: &i128) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, TOTAL_SHARES), total_shares);
}

pub fn get_shares(e: &Env, user: &Address) -> i128 {
    let key = DataKey::Shares(user.clone());
    match e.storage().persistent().get::<DataKey, i128>(&key) {
        Some(shares) => {
            e.storage()
                .persistent()
                .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
            shares
        }
        None => 0,
    }
}

pub fn set_shares(e: &Env, user: &Address, shares: &i128) {
    let key = DataKey::Shares(user.clone());
    if *shares == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, shares);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}
