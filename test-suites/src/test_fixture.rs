use sep_40_oracle::testutils::{Asset, MockPriceOracleClient, MockPriceOracleWASM};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{vec as svec, Address, Env, Symbol};
use strategy::testutils::register_strategy;
use strategy::{FeeMode, StrategyClient, StrategyIdentity, DEFAULT_ARB_TOLERANCE};
use vault::VaultClient;
use crate::mocks::{
    MockForwarder, MockForwarderClient, MockRegistry, MockRegistryClient, MockRouter,
    MockRouterClient, MockYieldSource, MockYieldSourceClient,
};
use crate::SCALAR_7;

/// Underlying paid by the route for one crop
pub const CROP_PRICE: i128 = 2_0000000;

pub struct TestFixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub governance: Address,
    pub controller: Address,
    pub users: Vec<Address>,
    pub underlying: TokenClient<'a>,
    pub underlying_admin: StellarAssetClient<'a>,
    pub crop: TokenClient<'a>,
    pub crop_admin: StellarAssetClient<'a>,
    pub vault: VaultClient<'a>,
    pub strategy: StrategyClient<'a>,
    pub adapter: MockYieldSourceClient<'a>,
    pub router: MockRouterClient<'a>,
    pub forwarder: MockForwarderClient<'a>,
    pub registry: MockRegistryClient<'a>,
    pub oracle: MockPriceOracleClient<'a>,
}

fn create_stellar_token<'a>(e: &Env, admin: &Address) -> (TokenClient<'a>, StellarAssetClient<'a>) {
    let token = e.register_stellar_asset_contract_v2(admin.clone());
    (
        TokenClient::new(e, &token.address()),
        StellarAssetClient::new(e, &token.address()),
    )
}

impl TestFixture<'_> {
    pub fn create<'a>(fee_mode: FeeMode) -> TestFixture<'a> {
        let e = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();
        // aligned to the oracle resolution
        e.ledger().set_timestamp(1_700_000_100);

        let admin = Address::generate(&e);
        let governance = Address::generate(&e);
        let controller = Address::generate(&e);

        let (underlying, underlying_admin) = create_stellar_token(&e, &admin);
        let (crop, crop_admin) = create_stellar_token(&e, &admin);

        let registry_id = e.register(MockRegistry, (governance.clone(), controller.clone()));
        let vault_id = e.register(vault::VaultContract {}, (underlying.address.clone(), admin.clone()));
        let adapter_id = e.register(
            MockYieldSource,
            (underlying.address.clone(), crop.address.clone()),
        );
        let router_id = e.register(MockRouter, (CROP_PRICE,));
        let forwarder_id = e.register(MockForwarder, ());

        // route liquidity
        underlying_admin.mint(&router_id, &(10_000_000 * SCALAR_7));

        let oracle_id = e.register(MockPriceOracleWASM, ());
        let oracle = MockPriceOracleClient::new(&e, &oracle_id);
        oracle.set_data(
            &admin,
            &Asset::Other(Symbol::new(&e, "USD")),
            &svec![&e, Asset::Stellar(adapter_id.clone())],
            &7,
            &300,
        );
        oracle.set_price_stable(&svec![&e, SCALAR_7]);

        let identity = StrategyIdentity {
            underlying: underlying.address.clone(),
            vault: vault_id.clone(),
            registry: registry_id.clone(),
            adapter: adapter_id.clone(),
            crop: crop.address.clone(),
            router: router_id.clone(),
            fee_forwarder: forwarder_id.clone(),
            fee_mode,
        };
        let strategy_id = register_strategy(&e, &identity);

        let vault = VaultClient::new(&e, &vault_id);
        vault.set_strategy(&strategy_id);

        let users = vec![Address::generate(&e), Address::generate(&e)];
        for user in users.iter() {
            underlying_admin.mint(user, &(100_000 * SCALAR_7));
        }

        TestFixture {
            strategy: StrategyClient::new(&e, &strategy_id),
            adapter: MockYieldSourceClient::new(&e, &adapter_id),
            router: MockRouterClient::new(&e, &router_id),
            forwarder: MockForwarderClient::new(&e, &forwarder_id),
            registry: MockRegistryClient::new(&e, &registry_id),
            env: e,
            admin,
            governance,
            controller,
            users,
            underlying,
            underlying_admin,
            crop,
            crop_admin,
            vault,
            oracle,
        }
    }

    /********** Yield Source Helpers ***********/

    /// Make `amount` crops claimable by the strategy
    pub fn accrue_crops(&self, amount: i128) {
        self.crop_admin.mint(&self.adapter.address, &amount);
        self.adapter.add_crops(&self.strategy.address, &amount);
    }

    /// Grow the strategy's deployed balance by `amount` of underlying
    pub fn accrue_yield(&self, amount: i128) {
        self.underlying_admin.mint(&self.adapter.address, &amount);
        self.adapter.add_yield(&self.strategy.address, &amount);
    }

    pub fn deployed(&self) -> i128 {
        self.adapter.report_balance(&self.strategy.address)
    }

    /********** Arb Check Helpers ***********/

    /// Point the deposit arb check at the mock oracle with the default tolerance
    pub fn enable_arb_check(&self) {
        self.strategy.set_arb_check(
            &self.governance,
            &Some(self.oracle.address.clone()),
            &DEFAULT_ARB_TOLERANCE,
        );
    }

    pub fn set_reference_rate(&self, rate: i128) {
        self.oracle.set_price_stable(&svec![&self.env, rate]);
    }

    /********** Chain Helpers ***********/

    pub fn jump(&self, time: u64) {
        self.env.ledger().with_mut(|li| {
            li.timestamp = li.timestamp.saturating_add(time);
        });
    }
}
