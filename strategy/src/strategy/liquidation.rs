use soroban_sdk::{log, Env, Symbol};
use crate::constants::MIN_SWAP_OUTPUT;
use crate::dependencies::RouterClient;
use crate::events::StrategyEvents;
use crate::strategy::strategy::{authorize_transfer, Strategy};

/// Sell `amount` of crops for underlying through the configured route
///
/// Never fails. Returns the underlying received, or `None` when the sale is
/// skipped and the crops stay on the strategy for a later cycle:
/// - `disabled` - the liquidation switch is off
/// - `no_crops` - nothing to sell
/// - `below_floor` - less than the governance sell floor
/// - `dust` - the route quotes less than one unit of underlying
/// - `swap_failed` - the route reverted; its effects are rolled back
pub fn liquidate(e: &Env, strategy: &Strategy, amount: i128) -> Option<i128> {
    if !strategy.settings.liquidation_enabled {
        return skip(e, strategy, "disabled");
    }
    if amount <= 0 {
        return skip(e, strategy, "no_crops");
    }
    if amount < strategy.settings.sell_floor {
        return skip(e, strategy, "below_floor");
    }

    let identity = &strategy.identity;
    let router = RouterClient::new(e, &identity.router);
    let quoted = match router.try_quote(&identity.crop, &identity.underlying, &amount) {
        Ok(Ok(quoted)) => quoted,
        _ => 0,
    };
    if quoted < MIN_SWAP_OUTPUT {
        return skip(e, strategy, "dust");
    }

    // measure what actually arrived rather than trusting the route's return value
    let before = strategy.idle_balance(e);
    authorize_transfer(e, &identity.crop, &router.address, amount);
    let swapped = router.try_swap(
        &e.current_contract_address(),
        &identity.crop,
        &identity.underlying,
        &amount,
        &MIN_SWAP_OUTPUT,
    );
    if !matches!(swapped, Ok(Ok(_))) {
        return skip(e, strategy, "swap_failed");
    }
    let received = (strategy.idle_balance(e) - before).max(0);

    StrategyEvents::liquidated(e, amount, received);
    Some(received)
}

fn skip(e: &Env, strategy: &Strategy, reason: &str) -> Option<i128> {
    let reason = Symbol::new(e, reason);
    let carried = strategy.crop_balance(e);
    log!(e, "liquidation skipped", reason.clone(), carried);
    StrategyEvents::liquidation_skipped(e, reason, carried);
    None
}
