//! Basic vault operations integration tests
//!
//! Tests core functionality: deposits, withdrawals, share calculations,
//! strategy binding, and error conditions.

use soroban_sdk::{
    contract, contractimpl,
    testutils::{Address as _, Ledger},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use vault::{VaultContract, VaultContractClient};

const SCALAR_7: i128 = 10_000_000;

// ================================
// Test Setup Utilities
// ================================

/// Minimal strategy that holds whatever it is sent and reports it back
#[contract]
pub struct HoldingStrategy;

#[contractimpl]
impl HoldingStrategy {
    pub fn __constructor(e: Env, underlying: Address, vault: Address) {
        e.storage().instance().set(&0u32, &underlying);
        e.storage().instance().set(&1u32, &vault);
    }

    pub fn underlying(e: Env) -> Address {
        e.storage().instance().get(&0u32).unwrap()
    }

    pub fn vault(e: Env) -> Address {
        e.storage().instance().get(&1u32).unwrap()
    }

    pub fn invested_underlying_balance(e: Env) -> i128 {
        TokenClient::new(&e, &Self::underlying(e.clone())).balance(&e.current_contract_address())
    }

    pub fn deposit_arb_check(e: Env) -> bool {
        e.storage().instance().get(&2u32).unwrap_or(true)
    }

    pub fn set_arb_ok(e: Env, ok: bool) {
        e.storage().instance().set(&2u32, &ok);
    }

    pub fn do_hard_work(_e: Env, caller: Address) {
        caller.require_auth();
    }

    pub fn withdraw_to_vault(e: Env, caller: Address, amount: i128) -> i128 {
        caller.require_auth();
        let held = Self::invested_underlying_balance(e.clone());
        let transferred = amount.min(held);
        if transferred > 0 {
            TokenClient::new(&e, &Self::underlying(e.clone())).transfer(
                &e.current_contract_address(),
                &Self::vault(e.clone()),
                &transferred,
            );
        }
        transferred
    }

    pub fn withdraw_all_to_vault(e: Env, caller: Address) -> i128 {
        let held = Self::invested_underlying_balance(e.clone());
        Self::withdraw_to_vault(e, caller, held)
    }
}

fn create_token_contract(env: &Env, admin: &Address) -> Address {
    let token = env.register_stellar_asset_contract_v2(admin.clone());
    token.address()
}

fn setup_vault<'a>() -> (Env, Address, Address, Address, Address, VaultContractClient<'a>) {
    let env = Env::default();
    env.cost_estimate().budget().reset_unlimited();
    env.mock_all_auths();

    env.ledger().set_min_temp_entry_ttl(17280);
    env.ledger().set_min_persistent_entry_ttl(2073600);

    let admin = Address::generate(&env);
    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);

    let token = create_token_contract(&env, &admin);

    let vault_address = env.register(VaultContract, (token.clone(), admin.clone()));
    let vault = VaultContractClient::new(&env, &vault_address);

    // Fund users
    let token_client = StellarAssetClient::new(&env, &token);
    token_client.mint(&user1, &(50_000 * SCALAR_7));
    token_client.mint(&user2, &(30_000 * SCALAR_7));

    (env, admin, user1, user2, token, vault)
}

fn attach_strategy(env: &Env, token: &Address, vault: &VaultContractClient) -> Address {
    let strategy = env.register(HoldingStrategy, (token.clone(), vault.address.clone()));
    vault.set_strategy(&strategy);
    strategy
}

// ================================
// Basic Functionality Tests
// ================================

#[test]
fn test_vault_initialization_and_getters() {
    let (_, _, _, _, token, vault) = setup_vault();

    assert_eq!(vault.token(), token);
    assert_eq!(vault.strategy(), None);
    assert_eq!(vault.total_shares(), 0);
    assert_eq!(vault.balance_with_investment(), 0);
    assert_eq!(vault.price_per_share(), SCALAR_7);
}

#[test]
fn test_first_deposit_one_to_one_ratio() {
    let (env, _, user1, _, token, vault) = setup_vault();

    let token_client = TokenClient::new(&env, &token);
    let initial_balance = token_client.balance(&user1);

    // First deposit should get 1:1 ratio
    let deposit_amount = 1000 * SCALAR_7;
    let shares_received = vault.deposit(&deposit_amount, &user1);

    assert_eq!(shares_received, deposit_amount);
    assert_eq!(vault.total_shares(), deposit_amount);
    assert_eq!(vault.shares(&user1), deposit_amount);

    assert_eq!(token_client.balance(&user1), initial_balance - deposit_amount);
    assert_eq!(token_client.balance(&vault.address), deposit_amount);
}

#[test]
fn test_multiple_deposits_different_users() {
    let (_, _, user1, user2, _, vault) = setup_vault();

    let shares1 = vault.deposit(&(1000 * SCALAR_7), &user1);
    let shares2 = vault.deposit(&(500 * SCALAR_7), &user2);

    // No appreciation in between, so the ratio stays 1:1
    assert_eq!(shares1, 1000 * SCALAR_7);
    assert_eq!(shares2, 500 * SCALAR_7);
    assert_eq!(vault.total_shares(), 1500 * SCALAR_7);
    assert_eq!(vault.underlying_balance_in_vault(), 1500 * SCALAR_7);
}

#[test]
fn test_deposit_after_vault_appreciation() {
    let (env, _, user1, user2, token, vault) = setup_vault();

    vault.deposit(&(1000 * SCALAR_7), &user1);

    // Vault gains 1000 tokens, each share is now worth 2 tokens
    StellarAssetClient::new(&env, &token).mint(&vault.address, &(1000 * SCALAR_7));
    assert_eq!(vault.price_per_share(), 2 * SCALAR_7);

    let shares2 = vault.deposit(&(1000 * SCALAR_7), &user2);
    assert_eq!(shares2, 500 * SCALAR_7);
    assert_eq!(vault.total_shares(), 1500 * SCALAR_7);
}

#[test]
fn test_full_withdrawal_cycle() {
    let (env, _, user1, _, token, vault) = setup_vault();
    let token_client = TokenClient::new(&env, &token);
    let initial_balance = token_client.balance(&user1);

    let shares = vault.deposit(&(1000 * SCALAR_7), &user1);
    let withdrawn = vault.withdraw(&shares, &user1);

    assert_eq!(withdrawn, 1000 * SCALAR_7);
    assert_eq!(vault.shares(&user1), 0);
    assert_eq!(vault.total_shares(), 0);
    assert_eq!(token_client.balance(&user1), initial_balance);
}

#[test]
fn test_partial_withdrawal_after_appreciation() {
    let (env, _, user1, user2, token, vault) = setup_vault();
    let token_client = TokenClient::new(&env, &token);

    vault.deposit(&(1000 * SCALAR_7), &user1);
    vault.deposit(&(1000 * SCALAR_7), &user2);
    StellarAssetClient::new(&env, &token).mint(&vault.address, &(200 * SCALAR_7));

    let before = token_client.balance(&user1);
    let withdrawn = vault.withdraw(&(500 * SCALAR_7), &user1);

    // 500 of 2000 shares against 2200 tokens
    assert_eq!(withdrawn, 550 * SCALAR_7);
    assert_eq!(token_client.balance(&user1), before + 550 * SCALAR_7);
    assert_eq!(vault.shares(&user1), 500 * SCALAR_7);
}

// ================================
// Strategy Tests
// ================================

#[test]
fn test_do_hard_work_pushes_idle_to_strategy() {
    let (env, _, user1, _, token, vault) = setup_vault();
    let token_client = TokenClient::new(&env, &token);
    let strategy = attach_strategy(&env, &token, &vault);

    vault.deposit(&(1000 * SCALAR_7), &user1);
    vault.do_hard_work();

    assert_eq!(token_client.balance(&vault.address), 0);
    assert_eq!(token_client.balance(&strategy), 1000 * SCALAR_7);
    assert_eq!(vault.balance_with_investment(), 1000 * SCALAR_7);
    assert_eq!(vault.price_per_share(), SCALAR_7);
}

#[test]
fn test_withdraw_pulls_shortfall_from_strategy() {
    let (env, _, user1, _, token, vault) = setup_vault();
    let token_client = TokenClient::new(&env, &token);
    let strategy = attach_strategy(&env, &token, &vault);

    vault.deposit(&(1000 * SCALAR_7), &user1);
    vault.do_hard_work();

    let before = token_client.balance(&user1);
    let withdrawn = vault.withdraw(&(400 * SCALAR_7), &user1);

    assert_eq!(withdrawn, 400 * SCALAR_7);
    assert_eq!(token_client.balance(&user1), before + 400 * SCALAR_7);
    assert_eq!(token_client.balance(&strategy), 600 * SCALAR_7);
}

#[test]
fn test_withdraw_all_from_strategy() {
    let (env, _, user1, _, token, vault) = setup_vault();
    let token_client = TokenClient::new(&env, &token);
    let strategy = attach_strategy(&env, &token, &vault);

    vault.deposit(&(1000 * SCALAR_7), &user1);
    vault.do_hard_work();

    let returned = vault.withdraw_all();
    assert_eq!(returned, 1000 * SCALAR_7);
    assert_eq!(token_client.balance(&strategy), 0);
    assert_eq!(vault.underlying_balance_in_vault(), 1000 * SCALAR_7);
}

#[test]
fn test_replacing_strategy_withdraws_from_previous() {
    let (env, _, user1, _, token, vault) = setup_vault();
    let token_client = TokenClient::new(&env, &token);
    let first = attach_strategy(&env, &token, &vault);

    vault.deposit(&(1000 * SCALAR_7), &user1);
    vault.do_hard_work();
    assert_eq!(token_client.balance(&first), 1000 * SCALAR_7);

    let second = attach_strategy(&env, &token, &vault);
    assert_eq!(vault.strategy(), Some(second));
    assert_eq!(token_client.balance(&first), 0);
    assert_eq!(vault.underlying_balance_in_vault(), 1000 * SCALAR_7);
}

// ================================
// Error Condition Tests
// ================================

#[test]
#[should_panic(expected = "Error(Contract, #4041)")]
fn test_zero_deposit_fails() {
    let (_, _, user1, _, _, vault) = setup_vault();
    vault.deposit(&0, &user1);
}

#[test]
#[should_panic(expected = "Error(Contract, #4041)")]
fn test_zero_withdrawal_fails() {
    let (_, _, user1, _, _, vault) = setup_vault();
    vault.deposit(&(100 * SCALAR_7), &user1);
    vault.withdraw(&0, &user1);
}

#[test]
#[should_panic(expected = "Error(Contract, #4042)")]
fn test_withdraw_more_shares_than_owned_fails() {
    let (_, _, user1, user2, _, vault) = setup_vault();
    vault.deposit(&(100 * SCALAR_7), &user1);
    vault.deposit(&(100 * SCALAR_7), &user2);
    vault.withdraw(&(101 * SCALAR_7), &user1);
}

#[test]
#[should_panic(expected = "Error(Contract, #4048)")]
fn test_strategy_for_other_token_fails() {
    let (env, admin, _, _, _, vault) = setup_vault();
    let other_token = create_token_contract(&env, &admin);
    let strategy = env.register(HoldingStrategy, (other_token, vault.address.clone()));
    vault.set_strategy(&strategy);
}

#[test]
#[should_panic(expected = "Error(Contract, #4048)")]
fn test_strategy_for_other_vault_fails() {
    let (env, _, _, _, token, vault) = setup_vault();
    let strategy = env.register(HoldingStrategy, (token, Address::generate(&env)));
    vault.set_strategy(&strategy);
}

#[test]
#[should_panic(expected = "Error(Contract, #4049)")]
fn test_do_hard_work_without_strategy_fails() {
    let (_, _, user1, _, _, vault) = setup_vault();
    vault.deposit(&(100 * SCALAR_7), &user1);
    vault.do_hard_work();
}

#[test]
#[should_panic(expected = "Error(Contract, #4050)")]
fn test_deposit_refused_when_arb_check_fails() {
    let (env, _, user1, _, token, vault) = setup_vault();
    let strategy = attach_strategy(&env, &token, &vault);
    HoldingStrategyClient::new(&env, &strategy).set_arb_ok(&false);
    vault.deposit(&(100 * SCALAR_7), &user1);
}

#[test]
fn test_withdraw_allowed_when_arb_check_fails() {
    let (env, _, user1, _, token, vault) = setup_vault();
    let strategy = attach_strategy(&env, &token, &vault);
    vault.deposit(&(100 * SCALAR_7), &user1);
    HoldingStrategyClient::new(&env, &strategy).set_arb_ok(&false);

    assert_eq!(vault.withdraw(&(100 * SCALAR_7), &user1), 100 * SCALAR_7);
}

// ================================
// Edge Case Tests
// ================================

#[test]
fn test_minimal_amounts() {
    let (_, _, user1, _, _, vault) = setup_vault();

    let shares = vault.deposit(&1, &user1);
    assert_eq!(shares, 1);
    assert_eq!(vault.withdraw(&1, &user1), 1);
}

#[test]
fn test_share_price_precision() {
    let (env, _, user1, user2, token, vault) = setup_vault();

    vault.deposit(&(3 * SCALAR_7), &user1);
    StellarAssetClient::new(&env, &token).mint(&vault.address, &SCALAR_7);

    // 3 shares backed by 4 tokens, new shares are rounded down
    let shares = vault.deposit(&SCALAR_7, &user2);
    assert_eq!(shares, 7_500_000);
    assert_eq!(vault.total_shares(), 3 * SCALAR_7 + 7_500_000);
}
