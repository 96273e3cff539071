use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::token::TokenClient;
use soroban_sdk::{panic_with_error, vec, Address, Env, IntoVal, Symbol, Val, Vec};
use crate::dependencies::AdapterClient;
use crate::errors::StrategyError;
use crate::storage;
use crate::types::{StrategyIdentity, StrategySettings};

pub struct Strategy {
    pub identity: StrategyIdentity,
    pub settings: StrategySettings,
}

impl Strategy {
    pub fn load(e: &Env) -> Self {
        Strategy {
            identity: storage::get_identity(e),
            settings: storage::get_settings(e),
        }
    }

    pub fn store_settings(&self, e: &Env) {
        storage::set_settings(e, &self.settings);
    }

    /// Underlying held directly by the strategy
    pub fn idle_balance(&self, e: &Env) -> i128 {
        TokenClient::new(e, &self.identity.underlying).balance(&e.current_contract_address())
    }

    /// Crops held by the strategy and not yet liquidated
    pub fn crop_balance(&self, e: &Env) -> i128 {
        TokenClient::new(e, &self.identity.crop).balance(&e.current_contract_address())
    }

    /// Underlying deployed in the adapter. Falls back to the last recorded
    /// balance when the adapter cannot report, so reads never fail.
    pub fn deployed_balance(&self, e: &Env) -> i128 {
        let adapter = AdapterClient::new(e, &self.identity.adapter);
        match adapter.try_report_balance(&e.current_contract_address()) {
            Ok(Ok(balance)) if balance >= 0 => balance,
            _ => storage::get_deployed(e),
        }
    }

    /// Underlying deployed in the adapter, for paths that move funds
    ///
    /// ### Panics
    /// If the adapter cannot report a balance
    pub fn require_deployed_balance(&self, e: &Env) -> i128 {
        let adapter = AdapterClient::new(e, &self.identity.adapter);
        match adapter.try_report_balance(&e.current_contract_address()) {
            Ok(Ok(balance)) if balance >= 0 => balance,
            _ => panic_with_error!(e, StrategyError::AdapterFailure),
        }
    }

    /// Idle plus deployed underlying
    pub fn invested_balance(&self, e: &Env) -> i128 {
        let idle = self.idle_balance(e);
        match idle.checked_add(self.deployed_balance(e)) {
            Some(total) => total,
            None => idle.saturating_add(storage::get_deployed(e)),
        }
    }

    /// Pull `amount` of underlying out of the adapter into the strategy
    ///
    /// ### Panics
    /// If the adapter withdrawal fails
    pub fn withdraw_from_adapter(&self, e: &Env, amount: i128) -> i128 {
        if amount <= 0 {
            return 0;
        }
        let adapter = AdapterClient::new(e, &self.identity.adapter);
        match adapter.try_withdraw(&e.current_contract_address(), &amount) {
            Ok(Ok(withdrawn)) => withdrawn,
            _ => panic_with_error!(e, StrategyError::AdapterFailure),
        }
    }

    /// Refresh the cached deployed balance from the adapter
    pub fn record_deployed(&self, e: &Env) {
        let deployed = self.require_deployed_balance(e);
        storage::set_deployed(e, &deployed);
    }
}

/// Take the strategy lock for the rest of the invocation
///
/// ### Panics
/// If the lock is already held
pub fn lock(e: &Env) {
    if storage::is_locked(e) {
        panic_with_error!(e, StrategyError::Reentrancy);
    }
    storage::set_locked(e);
}

pub fn unlock(e: &Env) {
    storage::del_locked(e);
}

/// Authorize a `transfer` of `amount` of `token` from this contract to `to`,
/// performed by the contract this one is about to invoke
pub fn authorize_transfer(e: &Env, token: &Address, to: &Address, amount: i128) {
    let args: Vec<Val> = vec![
        e,
        e.current_contract_address().into_val(e),
        to.into_val(e),
        amount.into_val(e),
    ];
    e.authorize_as_current_contract(vec![
        e,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: token.clone(),
                fn_name: Symbol::new(e, "transfer"),
                args,
            },
            sub_invocations: vec![e],
        }),
    ]);
}
