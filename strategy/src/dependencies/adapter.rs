use soroban_sdk::{contractclient, Address, Env};

/// Investment adapter interface - wraps the external yield source the underlying is deployed into
#[contractclient(name = "Client")]
pub trait InvestmentAdapter {
    /// Pulls `amount` of underlying from `from` into the yield source
    fn deposit(e: Env, from: Address, amount: i128);

    /// Returns up to `amount` of underlying to `to`, returns the amount actually withdrawn
    fn withdraw(e: Env, to: Address, amount: i128) -> i128;

    /// Sends all accrued reward tokens to `to`, returns the amount claimed
    fn claim(e: Env, to: Address) -> i128;

    /// Returns the underlying value deployed by `owner`
    fn report_balance(e: Env, owner: Address) -> i128;

    /// Returns the spot rate of the yield source in underlying per receipt unit (with 7 decimals)
    fn exchange_rate(e: Env) -> i128;
}
