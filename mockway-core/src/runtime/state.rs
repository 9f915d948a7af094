use crate::conf::{RuntimeConfig, build_route_table, load_config, split_authority};
use crate::engine::RuleEngine;
use crate::rule::builtin::MockRoutesRule;
use anyhow::{Result, anyhow};
use arc_swap::ArcSwap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Everything a request needs, swapped as one unit on reload.
///
/// In-flight requests keep the `Arc` they loaded, so a reload never changes
/// the rules under a request that has already started.
pub struct RuntimeState {
    pub engine: RuleEngine,
    /// Fixed forward target; `None` forwards to the request's own authority.
    pub upstream: Option<(String, u16)>,
    pub route_count: usize,
}

pub async fn reload_runtime_state(config_path: &Path, state: &ArcSwap<RuntimeState>) -> Result<()> {
    // Parse and validate config.
    let cfg = load_config(config_path)?;

    // Build the new state before touching the live one.
    let new_state = build_runtime_state(&cfg)?;

    let old = state.load();
    tracing::info!(
        old_routes = old.route_count,
        new_routes = new_state.route_count,
        "runtime state reloaded"
    );

    // Atomic swap (point of no return).
    state.store(Arc::new(new_state));

    Ok(())
}

pub fn build_runtime_state(cfg: &RuntimeConfig) -> Result<RuntimeState> {
    let table = build_route_table(&cfg.routes)?;
    let route_count = table.len();
    tracing::debug!(route_count, "mock route table built");

    let rule = MockRoutesRule::new(cfg.engine.rule_name.clone(), table)
        .with_request_logging(cfg.engine.log_requests);

    let engine = RuleEngine::new(Arc::new(rule))
        .with_hook_timeout(Duration::from_millis(cfg.engine.hook_timeout_ms));

    let upstream = cfg
        .server
        .upstream
        .as_deref()
        .map(|raw| split_authority(raw).ok_or_else(|| anyhow!("invalid upstream: {raw}")))
        .transpose()?;

    Ok(RuntimeState {
        engine,
        upstream,
        route_count,
    })
}
