use soroban_sdk::{contractclient, Address, Env};

/// Registry interface - source of truth for the governance and controller roles
#[contractclient(name = "Client")]
pub trait Registry {
    fn governance(e: Env) -> Address;

    fn controller(e: Env) -> Address;
}
