use soroban_sdk::{contractclient, Address, Env};

/// Strategy client interface - manually defined to avoid duplicate type conflicts
/// with the strategy crate
#[contractclient(name = "Client")]
pub trait StrategyInterface {
    /// Returns the underlying token managed by the strategy
    fn underlying(e: Env) -> Address;

    /// Returns the vault the strategy reports to
    fn vault(e: Env) -> Address;

    /// Returns idle plus deployed underlying held for this vault
    fn invested_underlying_balance(e: Env) -> i128;

    /// Returns false when deposits should be refused
    fn deposit_arb_check(e: Env) -> bool;

    /// Runs a harvest cycle, `caller` must be this vault
    fn do_hard_work(e: Env, caller: Address);

    /// Moves up to `amount` of underlying back to this vault
    fn withdraw_to_vault(e: Env, caller: Address, amount: i128) -> i128;

    /// Moves the whole invested balance back to this vault
    fn withdraw_all_to_vault(e: Env, caller: Address) -> i128;
}
