mod engine;
mod entrypoint;
mod mock_route;
mod origin;
mod server;

pub use engine::*;
pub use entrypoint::*;
pub use mock_route::*;
pub use origin::*;
pub use server::*;

use serde::Serialize;

/// Fully loaded configuration: the entrypoint plus every included mock route,
/// in registration order.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeConfig {
    pub server: ServerConfig,
    pub engine: EngineConfig,
    pub routes: Vec<MockRouteConfig>,
}
