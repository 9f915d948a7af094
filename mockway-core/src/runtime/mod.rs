mod state;
#[cfg(test)]
mod tests;

pub use state::{RuntimeState, build_runtime_state, reload_runtime_state};
