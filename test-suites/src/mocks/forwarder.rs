use soroban_sdk::{contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MockForwarderError {
    Failing = 921,
}

#[derive(Clone)]
#[contracttype]
enum Key {
    Failing,
    Profit(Address),
    Notifications,
}

/// Fee forwarder recording every profit notification per token
#[contract]
pub struct MockForwarder;

#[contractimpl]
impl MockForwarder {
    pub fn notify_profit(e: Env, _strategy: Address, amount: i128, token: Address) {
        if e.storage().instance().get(&Key::Failing).unwrap_or(false) {
            panic_with_error!(&e, MockForwarderError::Failing);
        }
        let key = Key::Profit(token);
        let profit: i128 = e.storage().instance().get(&key).unwrap_or(0);
        e.storage().instance().set(&key, &(profit + amount));
        let notifications: u32 = e.storage().instance().get(&Key::Notifications).unwrap_or(0);
        e.storage().instance().set(&Key::Notifications, &(notifications + 1));
    }

    /// Total profit notified for `token`
    pub fn profit(e: Env, token: Address) -> i128 {
        e.storage().instance().get(&Key::Profit(token)).unwrap_or(0)
    }

    pub fn notifications(e: Env) -> u32 {
        e.storage().instance().get(&Key::Notifications).unwrap_or(0)
    }

    pub fn set_failing(e: Env, failing: bool) {
        e.storage().instance().set(&Key::Failing, &failing);
    }
}
