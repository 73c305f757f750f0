use async_trait::async_trait;

use crate::history::HistoryList;
use crate::ports::errors::BridgeError;

/// Remote contract of the clipboard-history backend.
///
/// Every call suspends until the backend answers. No timeout is applied at
/// this layer; a hung call blocks only its own caller.
#[async_trait]
pub trait HistoryBridgePort: Send + Sync {
    /// Current history, in the backend's order. Read-only.
    async fn get_history(&self) -> Result<HistoryList, BridgeError>;

    /// Writes `text` to the system clipboard.
    async fn copy_to_clipboard(&self, text: &str) -> Result<(), BridgeError>;

    /// Removes every entry whose text equals `text`.
    async fn delete_entry(&self, text: &str) -> Result<(), BridgeError>;

    /// Empties the backend store.
    async fn clear_history(&self) -> Result<(), BridgeError>;
}
