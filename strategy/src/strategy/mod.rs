mod access;
pub use access::{resolve_role, Role};
mod strategy;
pub use strategy::Strategy;
mod liquidation;
mod distribution;
mod hard_work;
pub use hard_work::execute_do_hard_work;
mod withdraw;
pub use withdraw::{execute_withdraw_all_to_vault, execute_withdraw_to_vault};
mod salvage;
pub use salvage::{execute_salvage, execute_set_unsalvageable};
mod arb;
pub use arb::deposit_arb_check;
mod config;
pub use config::{
    execute_continue_investing, execute_emergency_exit, execute_initialize, execute_set_arb_check,
    execute_set_fee_split, execute_set_liquidation, execute_set_sell_floor,
};
