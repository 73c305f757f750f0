use std::sync::Arc;

use anyhow::Result;
use cs_core::ports::HistoryBridgePort;
use tracing::info;

use super::{SyncHistory, SyncMode, SyncOutcome};

/// Empties the backend history, then refreshes the view with a forced sync.
pub struct ClearHistory {
    bridge: Arc<dyn HistoryBridgePort>,
    sync: SyncHistory,
}

impl ClearHistory {
    pub fn from_ports(bridge: Arc<dyn HistoryBridgePort>, sync: SyncHistory) -> Self {
        Self { bridge, sync }
    }

    #[tracing::instrument(name = "usecase.clear_history.execute", skip(self))]
    pub async fn execute(&self) -> Result<SyncOutcome> {
        self.bridge
            .clear_history()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to clear history: {}", e))?;

        info!("Cleared history");
        self.sync.execute(SyncMode::Forced).await
    }
}
