use soroban_sdk::{Address, Env, Symbol};

pub struct StrategyEvents {}

impl StrategyEvents {
    /// Emitted when a harvest cycle completes
    ///
    /// - topics - `["hard_work"]`
    /// - data - `[claimed: i128, liquidated: i128, fee: i128, reinvested: i128]`
    ///
    /// ### Arguments
    /// * claimed - Crops claimed from the adapter this cycle
    /// * liquidated - Underlying received from selling crops (0 if skipped)
    /// * fee - Fee forwarded, denominated in the fee token of the deployment
    /// * reinvested - Underlying deployed into the adapter
    pub fn hard_work(e: &Env, claimed: i128, liquidated: i128, fee: i128, reinvested: i128) {
        let topics = (Symbol::new(e, "hard_work"),);
        e.events()
            .publish(topics, (claimed, liquidated, fee, reinvested));
    }

    /// Emitted when crops are sold for underlying
    ///
    /// - topics - `["liquidated"]`
    /// - data - `[crop_in: i128, underlying_out: i128]`
    pub fn liquidated(e: &Env, crop_in: i128, underlying_out: i128) {
        let topics = (Symbol::new(e, "liquidated"),);
        e.events().publish(topics, (crop_in, underlying_out));
    }

    /// Emitted when liquidation is skipped and crops are carried forward
    ///
    /// - topics - `["liquidation_skipped", reason: Symbol]`
    /// - data - `carried: i128`
    ///
    /// ### Arguments
    /// * reason - `disabled`, `no_crops`, `below_floor`, `dust` or `swap_failed`
    /// * carried - The crop amount left on the strategy
    pub fn liquidation_skipped(e: &Env, reason: Symbol, carried: i128) {
        let topics = (Symbol::new(e, "liquidation_skipped"), reason);
        e.events().publish(topics, carried);
    }

    /// Emitted when the fee share is delivered to the fee forwarder
    ///
    /// - topics - `["profit_shared", token: Address]`
    /// - data - `[forwarder: Address, fee: i128]`
    pub fn profit_shared(e: &Env, token: Address, forwarder: Address, fee: i128) {
        let topics = (Symbol::new(e, "profit_shared"), token);
        e.events().publish(topics, (forwarder, fee));
    }

    /// Emitted when underlying is sent back to the vault
    ///
    /// - topics - `["withdraw_to_vault", caller: Address]`
    /// - data - `[requested: i128, transferred: i128]`
    ///
    /// ### Arguments
    /// * caller - The vault, governance or the strategy itself
    /// * requested - Amount asked for, the full balance for a full withdrawal
    /// * transferred - Amount actually transferred after capping
    pub fn withdraw_to_vault(e: &Env, caller: Address, requested: i128, transferred: i128) {
        let topics = (Symbol::new(e, "withdraw_to_vault"), caller);
        e.events().publish(topics, (requested, transferred));
    }

    /// Emitted when governance recovers a token
    ///
    /// - topics - `["salvage", token: Address]`
    /// - data - `[recipient: Address, amount: i128]`
    pub fn salvage(e: &Env, token: Address, recipient: Address, amount: i128) {
        let topics = (Symbol::new(e, "salvage"), token);
        e.events().publish(topics, (recipient, amount));
    }

    /// Emitted when a token is added to or removed from the protected set
    ///
    /// - topics - `["set_unsalvageable", token: Address]`
    /// - data - `protected: bool`
    pub fn set_unsalvageable(e: &Env, token: Address, protected: bool) {
        let topics = (Symbol::new(e, "set_unsalvageable"), token);
        e.events().publish(topics, protected);
    }

    /// Emitted when the liquidation switch is flipped
    ///
    /// - topics - `["set_liquidation"]`
    /// - data - `enabled: bool`
    pub fn set_liquidation(e: &Env, enabled: bool) {
        let topics = (Symbol::new(e, "set_liquidation"),);
        e.events().publish(topics, enabled);
    }

    /// Emitted when the fee split is updated
    ///
    /// - topics - `["set_fee_split"]`
    /// - data - `fee_split: i128`
    pub fn set_fee_split(e: &Env, fee_split: i128) {
        let topics = (Symbol::new(e, "set_fee_split"),);
        e.events().publish(topics, fee_split);
    }

    /// Emitted when the sell floor is updated
    ///
    /// - topics - `["set_sell_floor"]`
    /// - data - `sell_floor: i128`
    pub fn set_sell_floor(e: &Env, sell_floor: i128) {
        let topics = (Symbol::new(e, "set_sell_floor"),);
        e.events().publish(topics, sell_floor);
    }

    /// Emitted when the deposit arb check is reconfigured
    ///
    /// - topics - `["set_arb_check"]`
    /// - data - `[oracle: Option<Address>, tolerance: i128]`
    pub fn set_arb_check(e: &Env, oracle: Option<Address>, tolerance: i128) {
        let topics = (Symbol::new(e, "set_arb_check"),);
        e.events().publish(topics, (oracle, tolerance));
    }

    /// Emitted when governance pulls all funds out of the adapter and pauses investing
    ///
    /// - topics - `["emergency_exit"]`
    /// - data - `withdrawn: i128`
    pub fn emergency_exit(e: &Env, withdrawn: i128) {
        let topics = (Symbol::new(e, "emergency_exit"),);
        e.events().publish(topics, withdrawn);
    }

    /// Emitted when investing is resumed after an emergency exit
    ///
    /// - topics - `["continue_investing"]`
    /// - data - `()`
    pub fn continue_investing(e: &Env) {
        let topics = (Symbol::new(e, "continue_investing"),);
        e.events().publish(topics, ());
    }
}
