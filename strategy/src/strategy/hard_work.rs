use soroban_sdk::{panic_with_error, Address, Env};
use crate::dependencies::AdapterClient;
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::strategy::access::{require_role, Role};
use crate::strategy::distribution::{fee_share, forward, split};
use crate::strategy::liquidation::liquidate;
use crate::strategy::strategy::{authorize_transfer, lock, unlock, Strategy};
use crate::types::FeeMode;

/// Run one harvest cycle: Claiming -> Liquidating -> Distributing -> Reinvesting.
///
/// Liquidation and distribution are skipped when there is nothing worth selling;
/// the cycle still redeploys idle underlying. Nothing is retried.
pub fn execute_do_hard_work(e: &Env, caller: &Address) {
    let strategy = Strategy::load(e);
    require_role(e, &strategy.identity, caller, &[Role::Vault]);
    if strategy.settings.investing_paused {
        panic_with_error!(e, StrategyError::InvestingPaused);
    }
    lock(e);

    let claimed = claim(e, &strategy);
    let (liquidated, fee) = liquidate_and_distribute(e, &strategy);
    let reinvested = reinvest(e, &strategy);
    strategy.record_deployed(e);

    StrategyEvents::hard_work(e, claimed, liquidated, fee, reinvested);
    unlock(e);
}

fn claim(e: &Env, strategy: &Strategy) -> i128 {
    let adapter = AdapterClient::new(e, &strategy.identity.adapter);
    match adapter.try_claim(&e.current_contract_address()) {
        Ok(Ok(claimed)) => claimed,
        _ => panic_with_error!(e, StrategyError::AdapterFailure),
    }
}

/// Sell the crop balance and deliver the fee share. Returns (underlying received, fee).
///
/// With `FeeMode::Crop` the fee is set aside in crops and only forwarded once the
/// rest has been sold, so skipped cycles never charge the same crops twice.
fn liquidate_and_distribute(e: &Env, strategy: &Strategy) -> (i128, i128) {
    let identity = &strategy.identity;
    let crops = strategy.crop_balance(e);
    match identity.fee_mode {
        FeeMode::Underlying => match liquidate(e, strategy, crops) {
            Some(received) => {
                let remainder = split(e, strategy, &identity.underlying, received);
                (received, received - remainder)
            }
            None => (0, 0),
        },
        FeeMode::Crop => {
            let fee = fee_share(e, crops, strategy.settings.fee_split);
            let remainder = crops - fee;
            // whole balance is fee, nothing left to sell
            if fee > 0 && remainder <= 0 {
                forward(e, strategy, &identity.crop, fee);
                return (0, fee);
            }
            match liquidate(e, strategy, remainder) {
                Some(received) => {
                    forward(e, strategy, &identity.crop, fee);
                    (received, fee)
                }
                None => (0, 0),
            }
        }
    }
}

fn reinvest(e: &Env, strategy: &Strategy) -> i128 {
    let idle = strategy.idle_balance(e);
    if idle <= 0 {
        return 0;
    }
    let adapter = AdapterClient::new(e, &strategy.identity.adapter);
    authorize_transfer(e, &strategy.identity.underlying, &adapter.address, idle);
    match adapter.try_deposit(&e.current_contract_address(), &idle) {
        Ok(Ok(())) => idle,
        _ => panic_with_error!(e, StrategyError::AdapterFailure),
    }
}
