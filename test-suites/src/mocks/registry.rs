use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
enum Key {
    Governance,
    Controller,
}

/// Registry resolving the current governance and controller
#[contract]
pub struct MockRegistry;

#[contractimpl]
impl MockRegistry {
    pub fn __constructor(e: Env, governance: Address, controller: Address) {
        e.storage().instance().set(&Key::Governance, &governance);
        e.storage().instance().set(&Key::Controller, &controller);
    }

    pub fn governance(e: Env) -> Address {
        e.storage().instance().get(&Key::Governance).unwrap()
    }

    pub fn controller(e: Env) -> Address {
        e.storage().instance().get(&Key::Controller).unwrap()
    }

    pub fn set_governance(e: Env, governance: Address) {
        e.storage().instance().set(&Key::Governance, &governance);
    }
}
