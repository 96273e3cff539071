use soroban_sdk::{contractclient, Address, Env};

/// Fee forwarder interface - receives the protocol share of every harvest
#[contractclient(name = "Client")]
pub trait FeeForwarder {
    /// Notifies the forwarder that `amount` of `token` was transferred to it by `strategy`
    fn notify_profit(e: Env, strategy: Address, amount: i128, token: Address);
}
