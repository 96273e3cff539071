use soroban_sdk::{contract, contractimpl, contractclient, token, panic_with_error, Address, Env};
use soroban_fixed_point_math::SorobanFixedPoint;

use crate::{
    storage,
    errors::VaultError,
    dependencies::StrategyClient,
    events::VaultEvents,
};

const SCALAR_7: i128 = 10_000_000;

#[contract]
pub struct VaultContract;

#[contractclient(name = "VaultClient")]
pub trait Vault {
    /// Returns the address of the underlying token managed by this vault
    ///
    /// This is the token that users deposit and that the strategy invests.
    /// The vault's share value is denominated in terms of this token.
    fn token(e: Env) -> Address;

    /// Returns the strategy the vault invests through, if one is set
    fn strategy(e: Env) -> Option<Address>;

    /// Returns the total number of shares in circulation
    fn total_shares(e: Env) -> i128;

    /// Returns the share balance of `user`
    fn shares(e: Env, user: Address) -> i128;

    /// Returns the underlying held by the vault itself
    fn underlying_balance_in_vault(e: Env) -> i128;

    /// Returns the underlying held by the vault plus the strategy's invested balance
    ///
    /// This is the value backing all shares.
    fn balance_with_investment(e: Env) -> i128;

    /// Returns the value of one share in underlying (with 7 decimals)
    fn price_per_share(e: Env) -> i128;

    /// Deposits underlying tokens and mints shares to receiver
    ///
    /// # Arguments
    /// * `tokens` - Amount of underlying tokens to deposit (must be > 0)
    /// * `receiver` - Address paying the tokens and receiving the shares
    ///
    /// # Returns
    /// Amount of shares minted to receiver
    ///
    /// # Panics
    /// - `ZeroAmount` if tokens <= 0
    /// - `DepositsUnsafe` if the strategy's deposit arb check fails
    fn deposit(e: Env, tokens: i128, receiver: Address) -> i128;

    /// Burns shares and transfers the equivalent underlying to owner
    ///
    /// If the vault does not hold enough underlying the missing amount is pulled
    /// from the strategy. The payout never exceeds what the vault holds afterwards.
    ///
    /// # Arguments
    /// * `shares` - Amount of shares to burn (must be > 0)
    /// * `owner` - Address that owns the shares (must authorize transaction)
    ///
    /// # Returns
    /// Amount of underlying tokens transferred to owner
    ///
    /// # Panics
    /// - `ZeroAmount` if shares <= 0
    /// - `InsufficientShares` if owner doesn't have enough shares
    fn withdraw(e: Env, shares: i128, owner: Address) -> i128;

    /// (Admin only) Sets the strategy, withdrawing everything from the previous one
    ///
    /// # Panics
    /// - `StrategyMismatch` if the strategy manages another token or reports to another vault
    fn set_strategy(e: Env, strategy: Address);

    /// (Admin only) Pushes idle underlying to the strategy and runs its harvest cycle
    ///
    /// # Panics
    /// - `StrategyNotSet` if no strategy is set
    fn do_hard_work(e: Env);

    /// (Admin only) Pulls the whole invested balance back from the strategy
    ///
    /// # Returns
    /// Amount of underlying returned by the strategy
    ///
    /// # Panics
    /// - `StrategyNotSet` if no strategy is set
    fn withdraw_all(e: Env) -> i128;
}

#[contractimpl]
impl VaultContract {
    /// Initializes the vault
    ///
    /// # Arguments
    /// * `token` - Address of the underlying token contract
    /// * `admin` - Address allowed to set the strategy and trigger harvests
    pub fn __constructor(e: Env, token: Address, admin: Address) {
        storage::set_token(&e, &token);
        storage::set_admin(&e, &admin);
        storage::set_total_shares(&e, &0);
        storage::extend_instance(&e);
    }
}

fn idle_balance(e: &Env) -> i128 {
    token::Client::new(e, &storage::get_token(e)).balance(&e.current_contract_address())
}

fn total_balance(e: &Env) -> i128 {
    let invested = match storage::get_strategy(e) {
        Some(strategy) => StrategyClient::new(e, &strategy).invested_underlying_balance(),
        None => 0,
    };
    idle_balance(e) + invested
}

fn require_strategy(e: &Env) -> Address {
    match storage::get_strategy(e) {
        Some(strategy) => strategy,
        None => panic_with_error!(e, VaultError::StrategyNotSet),
    }
}

#[contractimpl]
impl Vault for VaultContract {
    fn token(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_token(&e)
    }

    fn strategy(e: Env) -> Option<Address> {
        storage::extend_instance(&e);
        storage::get_strategy(&e)
    }

    fn total_shares(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_total_shares(&e)
    }

    fn shares(e: Env, user: Address) -> i128 {
        storage::extend_instance(&e);
        storage::get_shares(&e, &user)
    }

    fn underlying_balance_in_vault(e: Env) -> i128 {
        storage::extend_instance(&e);
        idle_balance(&e)
    }

    fn balance_with_investment(e: Env) -> i128 {
        storage::extend_instance(&e);
        total_balance(&e)
    }

    fn price_per_share(e: Env) -> i128 {
        storage::extend_instance(&e);
        let total_shares = storage::get_total_shares(&e);
        if total_shares == 0 {
            return SCALAR_7;
        }
        total_balance(&e).fixed_div_floor(&e, &total_shares, &SCALAR_7)
    }

    fn deposit(e: Env, tokens: i128, receiver: Address) -> i128 {
        receiver.require_auth();
        if tokens <= 0 {
            panic_with_error!(e, VaultError::ZeroAmount);
        }

        // New deposits are refused while the strategy reports abnormal market conditions
        if let Some(strategy) = storage::get_strategy(&e) {
            if !StrategyClient::new(&e, &strategy).deposit_arb_check() {
                panic_with_error!(e, VaultError::DepositsUnsafe);
            }
        }

        let total_shares = storage::get_total_shares(&e);

        // Calculate shares to mint: shares = tokens * (total shares / total tokens)
        let shares = {
            let total_tokens = total_balance(&e);

            if total_shares == 0 || total_tokens == 0 {
                // First deposit gets 1:1 ratio
                tokens
            } else {
                tokens.fixed_mul_floor(&e, &total_shares, &total_tokens)
            }
        };
        if shares <= 0 {
            panic_with_error!(e, VaultError::InvalidAmount);
        }

        let token_client = token::Client::new(&e, &storage::get_token(&e));
        token_client.transfer(&receiver, &e.current_contract_address(), &tokens);

        storage::set_shares(&e, &receiver, &(storage::get_shares(&e, &receiver) + shares));
        storage::set_total_shares(&e, &(total_shares + shares));

        VaultEvents::deposit(&e, receiver.clone(), tokens, shares);

        storage::extend_instance(&e);
        shares
    }

    fn withdraw(e: Env, shares: i128, owner: Address) -> i128 {
        owner.require_auth();
        if shares <= 0 {
            panic_with_error!(e, VaultError::ZeroAmount);
        }

        let owner_shares = storage::get_shares(&e, &owner);
        if owner_shares < shares {
            panic_with_error!(e, VaultError::InsufficientShares);
        }

        let total_shares = storage::get_total_shares(&e);

        // tokens = shares * (total tokens / total shares)
        let total_tokens = total_balance(&e);
        let mut tokens = shares.fixed_mul_floor(&e, &total_tokens, &total_shares);

        let mut in_vault = idle_balance(&e);
        if in_vault < tokens {
            if let Some(strategy) = storage::get_strategy(&e) {
                StrategyClient::new(&e, &strategy)
                    .withdraw_to_vault(&e.current_contract_address(), &(tokens - in_vault));
                in_vault = idle_balance(&e);
            }
        }
        // the strategy caps withdrawals at what it holds
        tokens = tokens.min(in_vault);

        storage::set_shares(&e, &owner, &(owner_shares - shares));
        storage::set_total_shares(&e, &(total_shares - shares));

        if tokens > 0 {
            token::Client::new(&e, &storage::get_token(&e))
                .transfer(&e.current_contract_address(), &owner, &tokens);
        }

        VaultEvents::withdraw(&e, owner.clone(), shares, tokens);

        storage::extend_instance(&e);
        tokens
    }

    fn set_strategy(e: Env, strategy: Address) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        let vault = e.current_contract_address();
        let strategy_client = StrategyClient::new(&e, &strategy);
        if strategy_client.underlying() != storage::get_token(&e) || strategy_client.vault() != vault {
            panic_with_error!(e, VaultError::StrategyMismatch);
        }

        if let Some(previous) = storage::get_strategy(&e) {
            StrategyClient::new(&e, &previous).withdraw_all_to_vault(&vault);
        }
        storage::set_strategy(&e, &strategy);

        VaultEvents::set_strategy(&e, strategy);
    }

    fn do_hard_work(e: Env) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        let strategy = require_strategy(&e);
        let vault = e.current_contract_address();

        let idle = idle_balance(&e);
        if idle > 0 {
            token::Client::new(&e, &storage::get_token(&e)).transfer(&vault, &strategy, &idle);
            VaultEvents::invest(&e, strategy.clone(), idle);
        }

        StrategyClient::new(&e, &strategy).do_hard_work(&vault);
    }

    fn withdraw_all(e: Env) -> i128 {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        let strategy = require_strategy(&e);
        StrategyClient::new(&e, &strategy).withdraw_all_to_vault(&e.current_contract_address())
    }
}
