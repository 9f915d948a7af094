use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Structured JSON logs, filtered by `RUST_LOG` (default "info").
///
/// Event fields are flattened so `request_id`, `url` and friends sit at the
/// top level of each line.
pub fn init_normal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .init();
}

pub fn init_logging() {
    // tokio-console installs its own subscriber; only one may be global.
    if std::env::var("TOKIO_CONSOLE").is_ok() {
        console_subscriber::init();
    } else {
        init_normal_logging();
    }
}

/// How CLI reports are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Plain,
    Pretty,
}

pub fn default_output_mode() -> OutputMode {
    if io::stdout().is_terminal() {
        OutputMode::Pretty
    } else {
        OutputMode::Plain
    }
}
