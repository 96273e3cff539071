#![no_std]

mod constants;
mod errors;
pub mod storage;
mod contract;
mod strategy;

mod types;
mod dependencies;
pub mod testutils;
mod events;

pub use constants::{DEFAULT_ARB_TOLERANCE, DEFAULT_FEE_SPLIT, SCALAR_7};
pub use contract::*;
pub use errors::StrategyError;
pub use types::*;
