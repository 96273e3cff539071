use soroban_sdk::{contractclient, Address, Env};

/// Vault client interface - manually defined to avoid duplicate type conflicts
/// with the vault crate
#[contractclient(name = "Client")]
pub trait VaultInterface {
    /// Returns the address of the underlying token managed by the vault
    fn token(e: Env) -> Address;
}
