use soroban_sdk::{contracttype, Address};

/// Where the protocol fee is taken in a harvest cycle
///
/// Fixed at deployment. `Crop` forwards a share of the reward tokens before they are
/// sold, `Underlying` forwards a share of the underlying received from the sale.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeeMode {
    Crop,       // Fee paid in reward tokens, split before liquidation
    Underlying, // Fee paid in underlying, split after liquidation
}

/// Immutable identity of a strategy, written once by the constructor
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyIdentity {
    pub underlying: Address,    // Asset managed by the strategy
    pub vault: Address,         // Vault the strategy reports to
    pub registry: Address,      // Registry resolving governance and controller
    pub adapter: Address,       // Yield source adapter the underlying is deployed into
    pub crop: Address,          // Reward token earned from the yield source
    pub router: Address,        // Exchange route used to sell crops for underlying
    pub fee_forwarder: Address, // Receiver of the protocol fee share
    pub fee_mode: FeeMode,      // Whether fees are taken pre or post liquidation
}

/// Governance-mutable strategy configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategySettings {
    pub liquidation_enabled: bool,   // Circuit breaker for crop liquidation
    pub fee_split: i128,             // Share of harvested value forwarded as fee (with 7 decimals)
    pub sell_floor: i128,            // Minimum crop amount worth liquidating
    pub arb_oracle: Option<Address>, // Reference price feed for the deposit arb check
    pub arb_tolerance: i128,         // Max spot deviation from reference (with 7 decimals)
    pub investing_paused: bool,      // Set by emergency exit, blocks hard work
}
