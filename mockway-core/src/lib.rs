pub mod cli;
pub mod conf;
pub mod ctx;
pub mod engine;
pub mod logging;
pub mod mock;
pub mod route;
pub mod rule;
pub mod runtime;
pub mod server;
