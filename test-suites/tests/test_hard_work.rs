use strategy::FeeMode;
use test_suites::setup::{create_fixture_with_data, INITIAL_DEPOSIT};
use test_suites::test_fixture::{TestFixture, CROP_PRICE};
use test_suites::SCALAR_7;

const ONE_DAY: u64 = 86400;

// ========== LIFECYCLE ==========

#[test]
fn test_deposit_harvest_withdraw_lifecycle() {
    let fixture = TestFixture::create(FeeMode::Underlying);
    let user = &fixture.users[0];

    // Deposit 1000 and deploy it
    fixture.vault.deposit(&INITIAL_DEPOSIT, user);
    fixture.vault.do_hard_work();
    assert_eq!(fixture.deployed(), INITIAL_DEPOSIT);
    assert_eq!(fixture.strategy.invested_underlying_balance(), INITIAL_DEPOSIT);

    // Time passes, the yield source pays yield and crops
    fixture.jump(ONE_DAY);
    fixture.accrue_yield(5 * SCALAR_7);
    fixture.accrue_crops(100 * SCALAR_7);

    fixture.vault.do_hard_work();

    // 100 crops sell for 200 underlying, 30% (60) is forwarded, 140 is reinvested
    let invested = fixture.strategy.invested_underlying_balance();
    assert!(invested > INITIAL_DEPOSIT);
    assert_eq!(invested, INITIAL_DEPOSIT + 5 * SCALAR_7 + 140 * SCALAR_7);
    assert_eq!(fixture.crop.balance(&fixture.strategy.address), 0);

    // Full withdrawal moves the entire current balance to the vault
    let withdrawn = fixture.strategy.withdraw_all_to_vault(&fixture.governance);
    assert_eq!(withdrawn, invested);
    assert_eq!(fixture.strategy.invested_underlying_balance(), 0);
    assert_eq!(fixture.deployed(), 0);
    assert_eq!(fixture.vault.underlying_balance_in_vault(), invested);
}

#[test]
fn test_hard_work_reinvests_idle_underlying() {
    let fixture = create_fixture_with_data(FeeMode::Underlying);

    // Underlying arriving at the strategy outside of a cycle is deployed by the next one
    fixture.underlying_admin.mint(&fixture.strategy.address, &(50 * SCALAR_7));
    assert_eq!(fixture.strategy.invested_underlying_balance(), INITIAL_DEPOSIT + 50 * SCALAR_7);

    fixture.strategy.do_hard_work(&fixture.vault.address);

    assert_eq!(fixture.underlying.balance(&fixture.strategy.address), 0);
    assert_eq!(fixture.deployed(), INITIAL_DEPOSIT + 50 * SCALAR_7);
}

#[test]
fn test_hard_work_without_crops() {
    let fixture = create_fixture_with_data(FeeMode::Underlying);

    fixture.vault.do_hard_work();

    assert_eq!(fixture.deployed(), INITIAL_DEPOSIT);
    assert_eq!(fixture.forwarder.notifications(), 0);
}

#[test]
fn test_hard_work_on_empty_strategy() {
    let fixture = TestFixture::create(FeeMode::Crop);

    fixture.vault.do_hard_work();

    assert_eq!(fixture.strategy.invested_underlying_balance(), 0);
    assert_eq!(fixture.deployed(), 0);
}

// ========== LIQUIDATION SKIPS ==========

#[test]
fn test_dust_crops_carried_forward() {
    let fixture = create_fixture_with_data(FeeMode::Underlying);

    // One crop quotes below one unit of underlying
    fixture.router.set_price(&0_5000000);
    fixture.accrue_crops(1);

    fixture.vault.do_hard_work();

    assert_eq!(fixture.strategy.crop_balance(), 1);
    assert_eq!(fixture.deployed(), INITIAL_DEPOSIT);
    assert_eq!(fixture.forwarder.notifications(), 0);

    // More crops later lift the balance above dust and everything is sold
    fixture.accrue_crops(9);
    fixture.vault.do_hard_work();

    assert_eq!(fixture.strategy.crop_balance(), 0);
    // 10 crops at 0.5 is 5 underlying, fee 1, 4 reinvested
    assert_eq!(fixture.deployed(), INITIAL_DEPOSIT + 4);
}

#[test]
fn test_switch_off_accumulates_crops() {
    let fixture = create_fixture_with_data(FeeMode::Underlying);

    fixture.strategy.set_liquidation(&fixture.governance, &false);

    fixture.accrue_crops(10 * SCALAR_7);
    fixture.vault.do_hard_work();
    fixture.accrue_crops(20 * SCALAR_7);
    fixture.vault.do_hard_work();

    assert_eq!(fixture.strategy.crop_balance(), 30 * SCALAR_7);
    assert_eq!(fixture.deployed(), INITIAL_DEPOSIT);
    assert_eq!(fixture.forwarder.notifications(), 0);

    // Re-enabling converts the whole accumulated amount
    fixture.strategy.set_liquidation(&fixture.governance, &true);
    fixture.vault.do_hard_work();

    assert_eq!(fixture.strategy.crop_balance(), 0);
    let value = 30 * CROP_PRICE;
    let fee = value * 3 / 10;
    assert_eq!(fixture.forwarder.profit(&fixture.underlying.address), fee);
    assert_eq!(fixture.deployed(), INITIAL_DEPOSIT + value - fee);
}

#[test]
fn test_failing_route_does_not_block_cycle() {
    let fixture = create_fixture_with_data(FeeMode::Underlying);

    fixture.router.set_failing(&true);
    fixture.accrue_crops(100 * SCALAR_7);
    fixture.underlying_admin.mint(&fixture.vault.address, &(10 * SCALAR_7));

    fixture.vault.do_hard_work();

    // crops stay, the route's partial execution is rolled back, reinvesting still happens
    assert_eq!(fixture.strategy.crop_balance(), 100 * SCALAR_7);
    assert_eq!(fixture.crop.balance(&fixture.router.address), 0);
    assert_eq!(fixture.deployed(), INITIAL_DEPOSIT + 10 * SCALAR_7);
    assert_eq!(fixture.forwarder.notifications(), 0);

    // The next cycle with a working route sells them
    fixture.router.set_failing(&false);
    fixture.vault.do_hard_work();

    assert_eq!(fixture.strategy.crop_balance(), 0);
    assert_eq!(fixture.crop.balance(&fixture.router.address), 100 * SCALAR_7);
    assert_eq!(fixture.forwarder.profit(&fixture.underlying.address), 60 * SCALAR_7);
}

#[test]
fn test_failing_route_in_crop_mode_keeps_fee_crops() {
    let fixture = create_fixture_with_data(FeeMode::Crop);

    fixture.router.set_failing(&true);
    fixture.accrue_crops(100 * SCALAR_7);

    fixture.vault.do_hard_work();

    // no fee is charged on crops that could not be sold
    assert_eq!(fixture.strategy.crop_balance(), 100 * SCALAR_7);
    assert_eq!(fixture.forwarder.profit(&fixture.crop.address), 0);
    assert_eq!(fixture.crop.balance(&fixture.forwarder.address), 0);

    fixture.router.set_failing(&false);
    fixture.vault.do_hard_work();

    assert_eq!(fixture.strategy.crop_balance(), 0);
    assert_eq!(fixture.forwarder.profit(&fixture.crop.address), 30 * SCALAR_7);
}

#[test]
fn test_sell_floor_carries_small_amounts() {
    let fixture = create_fixture_with_data(FeeMode::Underlying);

    fixture.strategy.set_sell_floor(&fixture.governance, &(50 * SCALAR_7));

    fixture.accrue_crops(10 * SCALAR_7);
    fixture.vault.do_hard_work();
    assert_eq!(fixture.strategy.crop_balance(), 10 * SCALAR_7);

    fixture.accrue_crops(45 * SCALAR_7);
    fixture.vault.do_hard_work();
    assert_eq!(fixture.strategy.crop_balance(), 0);
    assert_eq!(fixture.strategy.settings().sell_floor, 50 * SCALAR_7);
}

#[test]
#[should_panic(expected = "Error(Contract, #504)")]
fn test_negative_sell_floor_rejected() {
    let fixture = TestFixture::create(FeeMode::Underlying);
    fixture.strategy.set_sell_floor(&fixture.governance, &-1);
}

// ========== ADAPTER FAILURES ==========

#[test]
#[should_panic(expected = "Error(Contract, #505)")]
fn test_failing_adapter_fails_cycle() {
    let fixture = create_fixture_with_data(FeeMode::Underlying);

    fixture.adapter.set_failing(&true);
    fixture.strategy.do_hard_work(&fixture.vault.address);
}

#[test]
#[should_panic(expected = "Error(Contract, #505)")]
fn test_failing_forwarder_fails_cycle() {
    let fixture = create_fixture_with_data(FeeMode::Underlying);

    fixture.forwarder.set_failing(&true);
    fixture.accrue_crops(100 * SCALAR_7);
    fixture.strategy.do_hard_work(&fixture.vault.address);
}

// ========== EMERGENCY EXIT ==========

#[test]
fn test_emergency_exit_and_resume() {
    let fixture = create_fixture_with_data(FeeMode::Underlying);

    let withdrawn = fixture.strategy.emergency_exit(&fixture.governance);
    assert_eq!(withdrawn, INITIAL_DEPOSIT);
    assert_eq!(fixture.deployed(), 0);
    assert!(fixture.strategy.settings().investing_paused);

    // Funds stay on the strategy and keep counting as invested
    assert_eq!(fixture.strategy.invested_underlying_balance(), INITIAL_DEPOSIT);

    // Users can still leave while paused
    let user = &fixture.users[0];
    let received = fixture.vault.withdraw(&(100 * SCALAR_7), user);
    assert_eq!(received, 100 * SCALAR_7);

    fixture.strategy.continue_investing(&fixture.governance);
    fixture.vault.do_hard_work();

    assert!(!fixture.strategy.settings().investing_paused);
    assert_eq!(fixture.deployed(), INITIAL_DEPOSIT - 100 * SCALAR_7);
}

#[test]
#[should_panic(expected = "Error(Contract, #507)")]
fn test_hard_work_while_paused_fails() {
    let fixture = create_fixture_with_data(FeeMode::Underlying);

    fixture.strategy.emergency_exit(&fixture.governance);
    fixture.strategy.do_hard_work(&fixture.vault.address);
}
