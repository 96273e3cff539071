use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MockRouterError {
    Failing = 911,
    SlippageExceeded = 912,
}

#[derive(Clone)]
#[contracttype]
enum Key {
    Price,
    Failing,
}

/// Exchange route selling any token at a fixed price (with 7 decimals).
/// Must be funded with the output token by the test.
#[contract]
pub struct MockRouter;

#[contractimpl]
impl MockRouter {
    pub fn __constructor(e: Env, price: i128) {
        e.storage().instance().set(&Key::Price, &price);
    }

    pub fn quote(e: Env, _token_in: Address, _token_out: Address, amount_in: i128) -> i128 {
        let price: i128 = e.storage().instance().get(&Key::Price).unwrap();
        amount_in.fixed_mul_floor(&e, &price, &10_000_000)
    }

    pub fn swap(
        e: Env,
        sender: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        min_out: i128,
    ) -> i128 {
        let router = e.current_contract_address();
        TokenClient::new(&e, &token_in).transfer(&sender, &router, &amount_in);

        // fails after pulling the input so callers see a partially executed swap rolled back
        if e.storage().instance().get(&Key::Failing).unwrap_or(false) {
            panic_with_error!(&e, MockRouterError::Failing);
        }

        let out = Self::quote(e.clone(), token_in, token_out.clone(), amount_in);
        if out < min_out {
            panic_with_error!(&e, MockRouterError::SlippageExceeded);
        }
        TokenClient::new(&e, &token_out).transfer(&router, &sender, &out);
        out
    }

    /********** Test hooks **********/

    pub fn set_price(e: Env, price: i128) {
        e.storage().instance().set(&Key::Price, &price);
    }

    pub fn set_failing(e: Env, failing: bool) {
        e.storage().instance().set(&Key::Failing, &failing);
    }
}
