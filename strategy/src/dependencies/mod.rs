mod adapter;
pub use adapter::Client as AdapterClient;
mod forwarder;
pub use forwarder::Client as ForwarderClient;
mod registry;
pub use registry::Client as RegistryClient;
mod router;
pub use router::Client as RouterClient;
mod vault;
pub use vault::Client as VaultClient;
