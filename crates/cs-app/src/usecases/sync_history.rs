use std::sync::Arc;

use anyhow::Result;
use cs_core::ports::HistoryBridgePort;
use cs_core::{ChangeDetection, RenderState};
use tokio::sync::Mutex;
use tracing::{debug, trace};

use super::RenderHistory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Render only if change detection reports a difference.
    Detect,
    /// Render and record the list regardless of change detection.
    Forced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Unchanged,
    Rendered { cards: usize },
}

/// One fetch-and-conditionally-render cycle.
///
/// Clones share the same `RenderState`. Overlapping executions are not
/// serialized: each compares against whatever state is current when its
/// response arrives, so the last response applied wins.
#[derive(Clone)]
pub struct SyncHistory {
    bridge: Arc<dyn HistoryBridgePort>,
    render: RenderHistory,
    state: Arc<Mutex<RenderState>>,
    detection: ChangeDetection,
}

impl SyncHistory {
    pub fn from_ports(
        bridge: Arc<dyn HistoryBridgePort>,
        render: RenderHistory,
        detection: ChangeDetection,
    ) -> Self {
        Self {
            bridge,
            render,
            state: Arc::new(Mutex::new(RenderState::new())),
            detection,
        }
    }

    pub async fn render_state(&self) -> RenderState {
        *self.state.lock().await
    }

    /// Fetches the history and re-renders if `mode` calls for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the history fetch fails; the document and the
    /// render state are left untouched in that case.
    #[tracing::instrument(name = "usecase.sync_history.execute", skip(self))]
    pub async fn execute(&self, mode: SyncMode) -> Result<SyncOutcome> {
        let list = self
            .bridge
            .get_history()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch history: {}", e))?;

        // State update and document commit happen under one guard so the
        // recorded state always describes what is on screen.
        let mut state = self.state.lock().await;
        let due = match mode {
            SyncMode::Forced => {
                state.record(&list);
                true
            }
            SyncMode::Detect => state.observe(&list, self.detection),
        };

        if !due {
            trace!(entries = list.len(), "History unchanged, skipping render");
            return Ok(SyncOutcome::Unchanged);
        }

        let cards = self.render.execute(&list);
        drop(state);

        debug!(cards, ?mode, "History re-rendered");
        Ok(SyncOutcome::Rendered { cards })
    }
}
