use soroban_sdk::{Address, Env, Symbol};

pub struct VaultEvents {}

impl VaultEvents {
    /// Emitted when tokens are deposited into the vault
    ///
    /// - topics - `["deposit"]`
    /// - data - `[receiver: Address, tokens: i128, shares: i128]`
    ///
    /// ### Arguments
    /// * receiver - The address receiving the minted shares
    /// * tokens - The amount of tokens deposited
    /// * shares - The amount of shares minted
    pub fn deposit(e: &Env, receiver: Address, tokens: i128, shares: i128) {
        let topics = (Symbol::new(e, "deposit"),);
        e.events().publish(topics, (receiver, tokens, shares));
    }

    /// Emitted when shares are redeemed for tokens
    ///
    /// - topics - `["withdraw"]`
    /// - data - `[owner: Address, shares: i128, tokens: i128]`
    ///
    /// ### Arguments
    /// * owner - The address whose shares are burned
    /// * shares - The amount of shares burned
    /// * tokens - The amount of tokens withdrawn
    pub fn withdraw(e: &Env, owner: Address, shares: i128, tokens: i128) {
        let topics = (Symbol::new(e, "withdraw"),);
        e.events().publish(topics, (owner, shares, tokens));
    }

    /// Emitted when the vault's strategy is set
    ///
    /// - topics - `["set_strategy"]`
    /// - data - `strategy: Address`
    pub fn set_strategy(e: &Env, strategy: Address) {
        let topics = (Symbol::new(e, "set_strategy"),);
        e.events().publish(topics, strategy);
    }

    /// Emitted when idle tokens are pushed to the strategy before a harvest
    ///
    /// - topics - `["invest"]`
    /// - data - `[strategy: Address, amount: i128]`
    ///
    /// ### Arguments
    /// * strategy - The strategy contract address
    /// * amount - The amount of tokens transferred to the strategy
    pub fn invest(e: &Env, strategy: Address, amount: i128) {
        let topics = (Symbol::new(e, "invest"),);
        e.events().publish(topics, (strategy, amount));
    }
}
