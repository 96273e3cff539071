use soroban_sdk::token::TokenClient;
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MockYieldSourceError {
    Failing = 901,
    FailingReads = 902,
}

#[derive(Clone)]
#[contracttype]
enum Key {
    Underlying,
    Crop,
    ExchangeRate,
    Failing,
    FailReads,
    Deposited(Address),
    PendingCrops(Address),
}

/// Yield source that holds deposits 1:1 and pays out crops queued by the test
#[contract]
pub struct MockYieldSource;

fn get_i128(e: &Env, key: &Key) -> i128 {
    e.storage().instance().get(key).unwrap_or(0)
}

fn flag(e: &Env, key: &Key) -> bool {
    e.storage().instance().get(key).unwrap_or(false)
}

fn require_working(e: &Env) {
    if flag(e, &Key::Failing) {
        panic_with_error!(e, MockYieldSourceError::Failing);
    }
}

fn require_readable(e: &Env) {
    if flag(e, &Key::FailReads) {
        panic_with_error!(e, MockYieldSourceError::FailingReads);
    }
}

#[contractimpl]
impl MockYieldSource {
    pub fn __constructor(e: Env, underlying: Address, crop: Address) {
        e.storage().instance().set(&Key::Underlying, &underlying);
        e.storage().instance().set(&Key::Crop, &crop);
        e.storage().instance().set(&Key::ExchangeRate, &10_000_000i128);
    }

    /********** Adapter interface **********/

    pub fn deposit(e: Env, from: Address, amount: i128) {
        require_working(&e);
        let underlying: Address = e.storage().instance().get(&Key::Underlying).unwrap();
        TokenClient::new(&e, &underlying).transfer(&from, &e.current_contract_address(), &amount);
        let key = Key::Deposited(from);
        let deposited = get_i128(&e, &key);
        e.storage().instance().set(&key, &(deposited + amount));
    }

    pub fn withdraw(e: Env, to: Address, amount: i128) -> i128 {
        require_working(&e);
        let key = Key::Deposited(to.clone());
        let deposited = get_i128(&e, &key);
        let withdrawn = amount.min(deposited);
        if withdrawn > 0 {
            let underlying: Address = e.storage().instance().get(&Key::Underlying).unwrap();
            TokenClient::new(&e, &underlying).transfer(&e.current_contract_address(), &to, &withdrawn);
        }
        e.storage().instance().set(&key, &(deposited - withdrawn));
        withdrawn
    }

    pub fn claim(e: Env, to: Address) -> i128 {
        require_working(&e);
        let key = Key::PendingCrops(to.clone());
        let pending = get_i128(&e, &key);
        if pending > 0 {
            let crop: Address = e.storage().instance().get(&Key::Crop).unwrap();
            TokenClient::new(&e, &crop).transfer(&e.current_contract_address(), &to, &pending);
        }
        e.storage().instance().remove(&key);
        pending
    }

    pub fn report_balance(e: Env, owner: Address) -> i128 {
        require_readable(&e);
        get_i128(&e, &Key::Deposited(owner))
    }

    pub fn exchange_rate(e: Env) -> i128 {
        require_readable(&e);
        get_i128(&e, &Key::ExchangeRate)
    }

    /********** Test hooks **********/

    /// Queue crops for `owner`. The crop tokens must already be held by this contract.
    pub fn add_crops(e: Env, owner: Address, amount: i128) {
        let key = Key::PendingCrops(owner);
        let pending = get_i128(&e, &key);
        e.storage().instance().set(&key, &(pending + amount));
    }

    /// Credit `owner` with yield. The underlying must already be held by this contract.
    pub fn add_yield(e: Env, owner: Address, amount: i128) {
        let key = Key::Deposited(owner);
        let deposited = get_i128(&e, &key);
        e.storage().instance().set(&key, &(deposited + amount));
    }

    pub fn set_exchange_rate(e: Env, rate: i128) {
        e.storage().instance().set(&Key::ExchangeRate, &rate);
    }

    pub fn set_failing(e: Env, failing: bool) {
        e.storage().instance().set(&Key::Failing, &failing);
    }

    pub fn set_fail_reads(e: Env, failing: bool) {
        e.storage().instance().set(&Key::FailReads, &failing);
    }
}
