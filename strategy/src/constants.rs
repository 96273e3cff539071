// Token precision
pub const SCALAR_7: i128 = 10_000_000; // 7 decimal places

// Profit sharing
pub const DEFAULT_FEE_SPLIT: i128 = 0_3000000; // 30% of harvested value goes to the fee forwarder

// Liquidation
pub const MIN_SWAP_OUTPUT: i128 = 1; // A swap must return at least one unit of underlying

// Deposit arb check
pub const DEFAULT_ARB_TOLERANCE: i128 = 0_0100000; // 1% deviation between spot and reference rate
pub const MAX_PRICE_AGE: u64 = 300; // Max price age in seconds (5 minutes)
