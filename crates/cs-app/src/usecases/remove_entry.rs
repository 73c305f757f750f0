use std::sync::Arc;

use anyhow::Result;
use cs_core::ports::HistoryBridgePort;
use cs_core::HistoryEntry;
use tracing::info;

use super::{SyncHistory, SyncMode, SyncOutcome};

/// Deletes every entry matching `text`, then refreshes the view.
///
/// The refresh is a forced sync so the view never waits for the next tick
/// and never depends on the length heuristic.
pub struct RemoveEntry {
    bridge: Arc<dyn HistoryBridgePort>,
    sync: SyncHistory,
}

impl RemoveEntry {
    pub fn from_ports(bridge: Arc<dyn HistoryBridgePort>, sync: SyncHistory) -> Self {
        Self { bridge, sync }
    }

    /// # Errors
    ///
    /// Returns an error if the delete call fails (no refresh is attempted),
    /// or if the follow-up sync fails.
    #[tracing::instrument(
        name = "usecase.remove_entry.execute",
        skip_all,
        fields(text_len = text.len())
    )]
    pub async fn execute(&self, text: &str) -> Result<SyncOutcome> {
        self.bridge
            .delete_entry(text)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to delete entry: {}", e))?;

        info!(preview = %HistoryEntry::from(text).preview(), "Deleted history entry");
        self.sync.execute(SyncMode::Forced).await
    }
}
