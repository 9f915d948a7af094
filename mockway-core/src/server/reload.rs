use std::fmt;
use tokio::signal::unix::{SignalKind, signal};
use tokio::sync::watch;

/// What asked for the mock routes to be reloaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReloadTrigger {
    /// Nothing yet; the value a fresh handle starts with.
    Startup,
    /// SIGHUP, usually from `mockway reload`.
    Hangup,
    /// Requested in-process.
    Manual,
}

impl fmt::Display for ReloadTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Startup => "startup",
            Self::Hangup => "sighup",
            Self::Manual => "manual",
        })
    }
}

/// Latest reload request. `epoch` counts requests made through one handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReloadEvent {
    pub epoch: u64,
    pub trigger: ReloadTrigger,
}

/// Connects reload triggers to the reload loop.
///
/// Clones share one channel and therefore one epoch sequence; separate
/// handles count independently.
#[derive(Clone)]
pub struct ReloadHandle {
    tx: watch::Sender<ReloadEvent>,
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ReloadHandle {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ReloadEvent {
            epoch: 0,
            trigger: ReloadTrigger::Startup,
        });
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<ReloadEvent> {
        self.tx.subscribe()
    }

    /// Current epoch, 0 until the first request.
    pub fn epoch(&self) -> u64 {
        self.tx.borrow().epoch
    }

    pub fn request_reload(&self, trigger: ReloadTrigger) -> ReloadEvent {
        self.tx.send_modify(|event| {
            event.epoch += 1;
            event.trigger = trigger;
        });
        let event = *self.tx.borrow();
        tracing::info!(epoch = event.epoch, trigger = %event.trigger, "mock route reload requested");
        event
    }

    /// Turn every SIGHUP into a reload request. Runs until the signal stream ends.
    pub async fn listen_for_hangup(&self) -> anyhow::Result<()> {
        let mut hup = signal(SignalKind::hangup())?;

        while hup.recv().await.is_some() {
            self.request_reload(ReloadTrigger::Hangup);
        }
        Ok(())
    }
}
