use mockway_core::conf::RuntimeConfig;

/// Point the fixture at freshly allocated ports.
///
/// A fixture that pins an upstream gets it replaced with the test upstream;
/// forward-proxy fixtures (no upstream) are left alone.
pub fn patch_ports(mut cfg: RuntimeConfig, listen_port: u16, upstream_port: u16) -> RuntimeConfig {
    cfg.server.listen = format!("127.0.0.1:{listen_port}");
    if cfg.server.upstream.is_some() {
        cfg.server.upstream = Some(format!("127.0.0.1:{upstream_port}"));
    }
    cfg.server.pid_file = None;
    cfg
}
