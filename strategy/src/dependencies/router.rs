use soroban_sdk::{contractclient, Address, Env};

/// Exchange route interface used to liquidate crops
#[contractclient(name = "Client")]
pub trait ExchangeRoute {
    /// Returns the expected output of swapping `amount_in` of `token_in` for `token_out`
    fn quote(e: Env, token_in: Address, token_out: Address, amount_in: i128) -> i128;

    /// Swaps `amount_in` of `token_in` held by `sender` for at least `min_out` of `token_out`,
    /// returns the amount sent back to `sender`
    fn swap(
        e: Env,
        sender: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        min_out: i128,
    ) -> i128;
}
