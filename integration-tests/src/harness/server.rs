use crate::harness::config::patch_ports;
use crate::harness::upstream::start_upstream;
use crate::harness::{CapturedEvent, init_test_tracing};
use arc_swap::ArcSwap;
use mockway_core::conf::load_config;
use mockway_core::runtime::{RuntimeState, build_runtime_state};
use mockway_core::server::build_pingora_server;
use reqwest::blocking::{Client, RequestBuilder};
use std::net::TcpStream;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

/// Handle to a running mockway test server plus its echo upstream.
pub struct TestServer {
    base_url: String,
    upstream_port: u16,
    client: Client,
    proxy_client: Client,
    state: Arc<ArcSwap<RuntimeState>>,
}

impl TestServer {
    /// Start mockway from a fixture config directory.
    ///
    /// Ports are allocated dynamically and patched into the loaded config.
    pub fn start(fixture: &str) -> Self {
        // Initialize tracing (this must happen first).
        init_test_tracing(events());

        let listen_port = free_port();
        let upstream_port = free_port();
        start_upstream(upstream_port);

        let fixture_dir = fixture_dir(fixture);
        assert!(
            fixture_dir.exists(),
            "fixture config directory does not exist: {:?}",
            fixture_dir
        );

        let cfg = load_config(&fixture_dir).expect("failed to load fixture config");
        let cfg = patch_ports(cfg, listen_port, upstream_port);

        let runtime_state = build_runtime_state(&cfg).expect("failed to build runtime state");
        let state = Arc::new(ArcSwap::from_pointee(runtime_state));

        let server =
            build_pingora_server(&cfg, state.clone()).expect("failed to build mockway server");

        thread::spawn(move || {
            server.run_forever();
        });

        let base_url = format!("http://127.0.0.1:{listen_port}");
        wait_for_server(&base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .expect("failed to build client");

        let proxy_client = Client::builder()
            .timeout(Duration::from_secs(2))
            .proxy(reqwest::Proxy::http(&base_url).expect("invalid proxy url"))
            .build()
            .expect("failed to build proxy client");

        Self {
            base_url,
            upstream_port,
            client,
            proxy_client,
            state,
        }
    }

    /// GET against the proxy as if it were the origin server.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(format!("{}{}", self.base_url, path))
    }

    /// GET an absolute URL through the proxy (forward-proxy mode).
    pub fn get_via_proxy(&self, url: &str) -> RequestBuilder {
        self.proxy_client.get(url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn upstream_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.upstream_port)
    }

    pub fn state(&self) -> &ArcSwap<RuntimeState> {
        &self.state
    }
}

pub fn fixture_dir(fixture: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("config")
        .join(fixture)
}

/// Snapshot of every tracing event captured so far, across all tests in the binary.
pub fn captured_events() -> Vec<CapturedEvent> {
    events().lock().unwrap().clone()
}

/// Poll until the server accepts connections (or panic).
fn wait_for_server(listen_addr: &str) {
    let addr = listen_addr.strip_prefix("http://").unwrap_or(listen_addr);

    let deadline = Instant::now() + Duration::from_secs(2);

    loop {
        match TcpStream::connect(addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("server failed to start at {}", listen_addr);
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

static EVENTS: OnceLock<Arc<Mutex<Vec<CapturedEvent>>>> = OnceLock::new();

fn events() -> Arc<Mutex<Vec<CapturedEvent>>> {
    EVENTS
        .get_or_init(|| Arc::new(Mutex::new(Vec::new())))
        .clone()
}

/// Allocate a free port on localhost.
/// This is required to avoid port collisions when running tests in parallel.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
