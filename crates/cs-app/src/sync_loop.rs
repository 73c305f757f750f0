//! Polling loop driving [`HistorySyncRenderer::sync`].
//!
//! ## Lifecycle
//!
//! [`start_sync_loop`] spawns the loop and returns a [`SyncLoopHandle`].
//! When `sync_on_activate` is set the first sync runs immediately, then one
//! runs every `poll_interval`. Cancelling the handle stops the timer and
//! aborts syncs still in flight.
//!
//! ## Scheduling
//!
//! Every tick runs its sync on a separate task, so a backend call that
//! never resolves stalls only that sync; the next tick still fires.
//! Overlapping syncs are not serialized. A failed sync is logged and the
//! next tick retries.

use std::sync::Arc;

use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use crate::history_renderer::HistorySyncRenderer;
use crate::settings::SyncSettings;
use crate::usecases::SyncOutcome;

pub struct SyncLoopHandle {
    cancel: CancellationToken,
    join: JoinHandle<()>,
}

impl SyncLoopHandle {
    /// Requests the loop to stop without waiting for it.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Stops the loop and waits until it, and every sync it started, is gone.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        self.cancel.cancel();
        self.join
            .await
            .map_err(|e| anyhow::anyhow!("Sync loop task failed: {}", e))
    }
}

pub fn start_sync_loop(
    renderer: Arc<HistorySyncRenderer>,
    settings: &SyncSettings,
) -> SyncLoopHandle {
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    let period = settings.poll_interval;
    let first_tick = if settings.sync_on_activate {
        Instant::now()
    } else {
        Instant::now() + period
    };

    info!(
        poll_interval_ms = period.as_millis() as u64,
        sync_on_activate = settings.sync_on_activate,
        "Starting history sync loop"
    );

    let join = tokio::spawn(async move {
        let mut ticker = time::interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut in_flight = JoinSet::new();

        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!(in_flight = in_flight.len(), "Sync loop cancelled");
                    in_flight.abort_all();
                    break;
                }
                _ = ticker.tick() => {
                    let renderer = Arc::clone(&renderer);
                    in_flight.spawn(async move { run_tick(&renderer).await });
                }
                Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
            }
        }

        while in_flight.join_next().await.is_some() {}
        info!("History sync loop stopped");
    });

    SyncLoopHandle { cancel, join }
}

async fn run_tick(renderer: &HistorySyncRenderer) {
    match renderer.sync().await {
        Ok(SyncOutcome::Unchanged) => trace!("Tick: history unchanged"),
        Ok(SyncOutcome::Rendered { cards }) => debug!(cards, "Tick: history re-rendered"),
        Err(e) => warn!(error = %e, "History sync failed, retrying on next tick"),
    }
}
