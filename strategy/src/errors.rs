use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StrategyError {
    // Access
    PermissionDenied = 501,

    // Salvage
    UnsalvageableToken = 502,

    // Amount / configuration validation
    InvalidAmount = 503,
    InvalidConfig = 504,

    // Collaborators
    AdapterFailure = 505,

    // Execution
    Reentrancy = 506,
    InvestingPaused = 507,
}
