#![no_std]

mod errors;
mod storage;
mod contract;
pub use contract::{VaultContract, VaultContractClient, VaultClient};
pub use errors::VaultError;
mod dependencies;
mod events;
