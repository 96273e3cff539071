use soroban_sdk::{panic_with_error, Address, Env};
use crate::dependencies::RegistryClient;
use crate::errors::StrategyError;
use crate::types::StrategyIdentity;

/// Roles that can be granted access to a privileged entry point
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Governance, // Resolved from the registry at call time
    Controller, // Resolved from the registry at call time
    Vault,      // The vault bound at construction
    Strategy,   // The strategy contract itself
}

/// Callers allowed to move funds back to the vault
pub const WITHDRAW_ROLES: [Role; 3] = [Role::Vault, Role::Strategy, Role::Governance];

/// Resolve the address currently holding `role`
pub fn resolve_role(e: &Env, identity: &StrategyIdentity, role: Role) -> Address {
    match role {
        Role::Governance => RegistryClient::new(e, &identity.registry).governance(),
        Role::Controller => RegistryClient::new(e, &identity.registry).controller(),
        Role::Vault => identity.vault.clone(),
        Role::Strategy => e.current_contract_address(),
    }
}

/// Require `caller` to hold one of `allowed` and to have authorized the invocation.
/// Must run before any state is written.
///
/// ### Panics
/// If `caller` holds none of the allowed roles
pub fn require_role(e: &Env, identity: &StrategyIdentity, caller: &Address, allowed: &[Role]) {
    let granted = allowed
        .iter()
        .any(|role| resolve_role(e, identity, *role) == *caller);
    if !granted {
        panic_with_error!(e, StrategyError::PermissionDenied);
    }
    caller.require_auth();
}
