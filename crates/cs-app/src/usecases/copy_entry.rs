use std::sync::Arc;

use anyhow::Result;
use cs_core::ports::HistoryBridgePort;
use cs_core::HistoryEntry;
use tracing::info;

/// Writes a history entry back into the system clipboard through the backend.
pub struct CopyEntry {
    bridge: Arc<dyn HistoryBridgePort>,
}

impl CopyEntry {
    pub fn from_port(bridge: Arc<dyn HistoryBridgePort>) -> Self {
        Self { bridge }
    }

    #[tracing::instrument(
        name = "usecase.copy_entry.execute",
        skip_all,
        fields(text_len = text.len())
    )]
    pub async fn execute(&self, text: &str) -> Result<()> {
        self.bridge
            .copy_to_clipboard(text)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to copy entry to clipboard: {}", e))?;

        info!(preview = %HistoryEntry::from(text).preview(), "Copied history entry to clipboard");
        Ok(())
    }
}
