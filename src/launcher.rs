//! Deferred browser launch
//!
//! Schedules a single browser-open at the serving URL after a short delay.
//! Fire-and-forget: the server never waits on it, and a failure to open the
//! browser is logged but does not affect serving.

use crate::logger;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Spawn the one-shot deferred open. Returns the task handle; the server
/// never joins it.
pub fn schedule_browser_open(url: String, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        match open::that(&url) {
            Ok(()) => logger::log_browser_opened(&url),
            Err(e) => logger::log_warning(&format!("Could not open browser at {url}: {e}")),
        }
    })
}
