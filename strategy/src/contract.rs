use soroban_sdk::{contract, contractclient, contractimpl, Address, Env};
use crate::strategy::{self, Role, Strategy as LoadedStrategy};
use crate::types::{FeeMode, StrategyIdentity, StrategySettings};
use crate::storage;

#[contract]
pub struct StrategyContract;

#[contractclient(name = "StrategyClient")]
pub trait Strategy {
    /// (Vault only) Run one harvest cycle
    ///
    /// Claims crops from the adapter, sells them for underlying when the liquidation
    /// switch is on and the amount is worth selling, forwards the fee share and
    /// deploys all idle underlying into the adapter. A skipped or failed sale leaves
    /// the crops on the strategy for the next cycle and does not fail the call.
    ///
    /// ### Arguments
    /// * `caller` - The vault
    ///
    /// ### Panics
    /// - `PermissionDenied` if the caller is not the vault
    /// - `InvestingPaused` after an emergency exit
    /// - `AdapterFailure` if claiming or reinvesting fails
    fn do_hard_work(e: Env, caller: Address);

    /// (Vault, governance or strategy) Withdraw the entire invested balance to the vault
    ///
    /// Succeeds as a no-op when nothing is invested.
    ///
    /// ### Arguments
    /// * `caller` - The vault, governance, or the strategy itself
    ///
    /// ### Returns
    /// Amount of underlying transferred to the vault
    ///
    /// ### Panics
    /// - `PermissionDenied` if the caller holds none of the roles
    /// - `AdapterFailure` if the adapter withdrawal fails
    fn withdraw_all_to_vault(e: Env, caller: Address) -> i128;

    /// (Vault, governance or strategy) Withdraw `amount` of underlying to the vault
    ///
    /// Requests above the invested balance are capped at the invested balance.
    ///
    /// ### Arguments
    /// * `caller` - The vault, governance, or the strategy itself
    /// * `amount` - Amount of underlying requested (must be > 0)
    ///
    /// ### Returns
    /// Amount of underlying transferred to the vault
    ///
    /// ### Panics
    /// - `PermissionDenied` if the caller holds none of the roles
    /// - `InvalidAmount` if amount <= 0
    /// - `AdapterFailure` if the adapter withdrawal fails
    fn withdraw_to_vault(e: Env, caller: Address, amount: i128) -> i128;

    /// Returns the underlying managed by the strategy: held idle plus deployed in the adapter
    ///
    /// Never fails. If the adapter cannot report, the last recorded deployed balance is used.
    fn invested_underlying_balance(e: Env) -> i128;

    /// Returns false when the yield source looks manipulated and new deposits should be refused
    ///
    /// Only gates deposits at the vault; withdrawals are unaffected.
    fn deposit_arb_check(e: Env) -> bool;

    /// (Governance only) Recover a token sent to the strategy by mistake
    ///
    /// ### Arguments
    /// * `caller` - Governance
    /// * `recipient` - Address receiving the tokens
    /// * `token` - Token to recover
    /// * `amount` - Amount to recover
    ///
    /// ### Panics
    /// - `PermissionDenied` if the caller is not governance
    /// - `UnsalvageableToken` if the token is protected
    fn salvage(e: Env, caller: Address, recipient: Address, token: Address, amount: i128);

    /// Returns whether `token` is protected from salvage
    fn unsalvageable_tokens(e: Env, token: Address) -> bool;

    /// (Governance only) Protect or unprotect a token from salvage
    ///
    /// ### Panics
    /// - `PermissionDenied` if the caller is not governance
    /// - `InvalidConfig` if asked to unprotect the underlying
    fn set_unsalvageable(e: Env, caller: Address, token: Address, protected: bool);

    /// (Governance only) Turn crop liquidation on or off
    ///
    /// While off, claimed crops accumulate on the strategy.
    fn set_liquidation(e: Env, caller: Address, enabled: bool);

    /// (Governance only) Set the share of harvested value forwarded as fee
    ///
    /// ### Arguments
    /// * `fee_split` - Fee share with 7 decimals, 0 to 100%
    ///
    /// ### Panics
    /// - `InvalidConfig` if the split is out of range
    fn set_fee_split(e: Env, caller: Address, fee_split: i128);

    /// (Governance only) Set the minimum crop amount worth liquidating
    fn set_sell_floor(e: Env, caller: Address, sell_floor: i128);

    /// (Governance only) Configure the deposit arb check
    ///
    /// ### Arguments
    /// * `oracle` - Price feed publishing the reference rate of the adapter, None to disable
    /// * `tolerance` - Max relative deviation of the spot rate, with 7 decimals
    fn set_arb_check(e: Env, caller: Address, oracle: Option<Address>, tolerance: i128);

    /// (Governance only) Withdraw everything from the adapter and pause investing
    ///
    /// ### Returns
    /// Amount of underlying pulled out of the adapter
    fn emergency_exit(e: Env, caller: Address) -> i128;

    /// (Governance only) Resume investing after an emergency exit
    fn continue_investing(e: Env, caller: Address);

    /// Returns the current governance address, resolved from the registry
    fn governance(e: Env) -> Address;

    /// Returns the current controller address, resolved from the registry
    fn controller(e: Env) -> Address;

    /// Returns the vault this strategy reports to
    fn vault(e: Env) -> Address;

    /// Returns the underlying token managed by the strategy
    fn underlying(e: Env) -> Address;

    /// Returns the reward token earned from the yield source
    fn crop(e: Env) -> Address;

    /// Returns the crops held and not yet liquidated
    fn crop_balance(e: Env) -> i128;

    /// Returns the immutable identity record
    fn identity(e: Env) -> StrategyIdentity;

    /// Returns the governance-mutable settings
    fn settings(e: Env) -> StrategySettings;
}

#[contractimpl]
impl StrategyContract {
    /// Constructor for initializing the contract when deployed
    ///
    /// ### Panics
    /// - `InvalidConfig` if the underlying equals the crop token or the vault
    ///   manages a different token
    pub fn __constructor(
        e: Env,
        underlying: Address,
        vault: Address,
        registry: Address,
        adapter: Address,
        crop: Address,
        router: Address,
        fee_forwarder: Address,
        fee_mode: FeeMode,
    ) {
        let identity = StrategyIdentity {
            underlying,
            vault,
            registry,
            adapter,
            crop,
            router,
            fee_forwarder,
            fee_mode,
        };
        strategy::execute_initialize(&e, &identity);
        storage::extend_instance(&e);
    }
}

#[contractimpl]
impl Strategy for StrategyContract {
    fn do_hard_work(e: Env, caller: Address) {
        storage::extend_instance(&e);
        strategy::execute_do_hard_work(&e, &caller);
    }

    fn withdraw_all_to_vault(e: Env, caller: Address) -> i128 {
        storage::extend_instance(&e);
        strategy::execute_withdraw_all_to_vault(&e, &caller)
    }

    fn withdraw_to_vault(e: Env, caller: Address, amount: i128) -> i128 {
        storage::extend_instance(&e);
        strategy::execute_withdraw_to_vault(&e, &caller, amount)
    }

    fn invested_underlying_balance(e: Env) -> i128 {
        storage::extend_instance(&e);
        LoadedStrategy::load(&e).invested_balance(&e)
    }

    fn deposit_arb_check(e: Env) -> bool {
        storage::extend_instance(&e);
        strategy::deposit_arb_check(&e)
    }

    fn salvage(e: Env, caller: Address, recipient: Address, token: Address, amount: i128) {
        storage::extend_instance(&e);
        strategy::execute_salvage(&e, &caller, &recipient, &token, amount);
    }

    fn unsalvageable_tokens(e: Env, token: Address) -> bool {
        storage::extend_instance(&e);
        storage::is_unsalvageable(&e, &token)
    }

    fn set_unsalvageable(e: Env, caller: Address, token: Address, protected: bool) {
        storage::extend_instance(&e);
        strategy::execute_set_unsalvageable(&e, &caller, &token, protected);
    }

    fn set_liquidation(e: Env, caller: Address, enabled: bool) {
        storage::extend_instance(&e);
        strategy::execute_set_liquidation(&e, &caller, enabled);
    }

    fn set_fee_split(e: Env, caller: Address, fee_split: i128) {
        storage::extend_instance(&e);
        strategy::execute_set_fee_split(&e, &caller, fee_split);
    }

    fn set_sell_floor(e: Env, caller: Address, sell_floor: i128) {
        storage::extend_instance(&e);
        strategy::execute_set_sell_floor(&e, &caller, sell_floor);
    }

    fn set_arb_check(e: Env, caller: Address, oracle: Option<Address>, tolerance: i128) {
        storage::extend_instance(&e);
        strategy::execute_set_arb_check(&e, &caller, &oracle, tolerance);
    }

    fn emergency_exit(e: Env, caller: Address) -> i128 {
        storage::extend_instance(&e);
        strategy::execute_emergency_exit(&e, &caller)
    }

    fn continue_investing(e: Env, caller: Address) {
        storage::extend_instance(&e);
        strategy::execute_continue_investing(&e, &caller);
    }

    fn governance(e: Env) -> Address {
        storage::extend_instance(&e);
        strategy::resolve_role(&e, &storage::get_identity(&e), Role::Governance)
    }

    fn controller(e: Env) -> Address {
        storage::extend_instance(&e);
        strategy::resolve_role(&e, &storage::get_identity(&e), Role::Controller)
    }

    fn vault(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_identity(&e).vault
    }

    fn underlying(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_identity(&e).underlying
    }

    fn crop(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_identity(&e).crop
    }

    fn crop_balance(e: Env) -> i128 {
        storage::extend_instance(&e);
        LoadedStrategy::load(&e).crop_balance(&e)
    }

    fn identity(e: Env) -> StrategyIdentity {
        storage::extend_instance(&e);
        storage::get_identity(&e)
    }

    fn settings(e: Env) -> StrategySettings {
        storage::extend_instance(&e);
        storage::get_settings(&e)
    }
}
