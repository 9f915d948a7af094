use crate::conf::RuntimeConfig;
use crate::runtime::{RuntimeState, build_runtime_state, reload_runtime_state};
use crate::server::pid;
use crate::server::proxy::MockwayGateway;
use crate::server::reload::ReloadHandle;
use anyhow::{Context, Result, anyhow};
use arc_swap::ArcSwap;
use pingora::prelude::*;
use pingora::server::Server;
use pingora::server::configuration::ServerConf;
use std::path::PathBuf;
use std::sync::Arc;

/// Run the mock proxy until the process is stopped.
pub fn run(config_path: PathBuf, config: RuntimeConfig) -> Result<()> {
    use tokio::runtime::Builder;

    // Attempt to write pid file (best-effort)
    if let Some(pid_file) = &config.server.pid_file {
        if let Err(e) = pid::write_pid(pid_file) {
            tracing::warn!(error = %e, pid_file = %pid_file.display(), "failed to write pid file; continuing");
        } else {
            tracing::info!(pid_file = %pid_file.display(), "pid file written");
        }
    }

    // Build initial runtime state (reloadable)
    let initial_state = build_runtime_state(&config)?;
    tracing::info!(
        routes = initial_state.route_count,
        listen = %config.server.listen,
        "mock routes loaded"
    );
    let state = Arc::new(ArcSwap::from_pointee(initial_state));

    // Control-plane runtime (signals + reload only)
    let control_rt = Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("failed to build control-plane Tokio runtime")?;

    let reload = ReloadHandle::new();

    control_rt.spawn({
        let reload = reload.clone();
        async move {
            if let Err(e) = reload.listen_for_hangup().await {
                tracing::error!(error = %e, "failed to install SIGHUP handler");
            }
        }
    });

    control_rt.spawn({
        let mut reload_rx = reload.subscribe();
        let state = state.clone();
        let config_path = config_path.clone();

        async move {
            tracing::info!("reload loop started");

            while reload_rx.changed().await.is_ok() {
                let event = *reload_rx.borrow_and_update();

                // A failed reload keeps serving the previous rules.
                match reload_runtime_state(&config_path, &state).await {
                    Ok(_) => tracing::info!(
                        epoch = event.epoch,
                        trigger = %event.trigger,
                        config = %config_path.display(),
                        "mock routes reloaded"
                    ),
                    Err(e) => tracing::error!(
                        epoch = event.epoch,
                        trigger = %event.trigger,
                        error = %e,
                        "mock route reload failed; keeping current routes"
                    ),
                }
            }
        }
    });

    // Pingora owns its own runtimes.
    let server = build_pingora_server(&config, state)?;

    if let Some(pid_file) = config.server.pid_file.clone() {
        ctrlc::set_handler(move || {
            tracing::info!("shutdown requested, removing pid file");
            pid::remove_pid(&pid_file);
            std::process::exit(0);
        })?;
    }

    // control_rt must stay in scope so its worker thread lives.
    server.run_forever();
}

/// Build the Pingora server around a shared, reloadable state.
pub fn build_pingora_server(
    config: &RuntimeConfig,
    state: Arc<ArcSwap<RuntimeState>>,
) -> Result<Server> {
    let mut server = if let Some(threads) = config.server.threads {
        tracing::debug!(
            threads,
            "Creating Pingora server with overridden worker threads"
        );
        let mut conf =
            ServerConf::new().ok_or_else(|| anyhow!("could not construct pingora server configuration"))?;
        conf.threads = threads;
        Server::new_with_opt_and_conf(None, conf)
    } else {
        // "None" is required here to truly tell Pingora to use its default settings.
        Server::new(None)?
    };

    server.bootstrap();

    let gateway = MockwayGateway { state };

    let mut svc = http_proxy_service(&server.configuration, gateway);
    svc.add_tcp(&config.server.listen);

    server.add_service(svc);

    Ok(server)
}
