mod pid;
mod proxy;
mod reload;
pub mod setup;
mod target;
#[cfg(test)]
mod tests;

pub use proxy::{GatewayCtx, MockwayGateway};
pub use reload::{ReloadEvent, ReloadHandle, ReloadTrigger};
pub use setup::{build_pingora_server, run};
pub use target::ForwardTarget;
