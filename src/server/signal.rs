// Signal handling
//
// Converts an interrupt (Ctrl+C / SIGTERM) into a shutdown notification.
// Interrupt is the normal way to stop this server, not an error path.

use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Spawn the signal listener. The returned `Notify` fires once when the
/// process should shut down.
#[cfg(unix)]
pub fn spawn_signal_listener() -> Arc<Notify> {
    use tokio::signal::unix::{signal, SignalKind};

    let shutdown = Arc::new(Notify::new());
    let notifier = Arc::clone(&shutdown);

    tokio::spawn(async move {
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");

        tokio::select! {
            _ = sigint.recv() => logger::log_signal("SIGINT (Ctrl+C)"),
            _ = sigterm.recv() => logger::log_signal("SIGTERM"),
        }
        notifier.notify_one();
    });

    shutdown
}

/// Windows fallback: only Ctrl+C is available.
#[cfg(not(unix))]
pub fn spawn_signal_listener() -> Arc<Notify> {
    let shutdown = Arc::new(Notify::new());
    let notifier = Arc::clone(&shutdown);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            logger::log_signal("Ctrl+C");
            notifier.notify_one();
        }
    });

    shutdown
}
