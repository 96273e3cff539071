use strategy::FeeMode;
use crate::test_fixture::TestFixture;
use crate::SCALAR_7;

/// Underlying deposited by the first user in `create_fixture_with_data`
pub const INITIAL_DEPOSIT: i128 = 1000 * SCALAR_7;

/// Fixture where the first user has deposited and the vault has run one harvest,
/// so the whole deposit is deployed in the yield source
pub fn create_fixture_with_data<'a>(fee_mode: FeeMode) -> TestFixture<'a> {
    let fixture = TestFixture::create(fee_mode);

    fixture.vault.deposit(&INITIAL_DEPOSIT, &fixture.users[0]);
    fixture.vault.do_hard_work();

    fixture
}
