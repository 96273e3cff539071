mod forwarder;
mod registry;
mod router;
mod yield_source;

pub use forwarder::{MockForwarder, MockForwarderClient};
pub use registry::{MockRegistry, MockRegistryClient};
pub use router::{MockRouter, MockRouterClient};
pub use yield_source::{MockYieldSource, MockYieldSourceClient};
