use std::time::Duration;

use async_trait::async_trait;
use cs_core::ports::{BridgeError, HistoryBridgePort};
use cs_core::{HistoryEntry, HistoryList};
use tokio::sync::Mutex;
use tracing::debug;

/// A call received by [`InMemoryHistoryBridge`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCall {
    GetHistory,
    CopyToClipboard(String),
    DeleteEntry(String),
    ClearHistory,
}

#[derive(Default)]
struct BridgeState {
    entries: Vec<HistoryEntry>,
    clipboard: Option<String>,
    calls: Vec<BridgeCall>,
    unavailable: bool,
    fetch_delay: Option<Duration>,
}

/// Backend double holding the history in memory.
///
/// Mirrors the backend's observable contract: delete removes every entry
/// with equal text, clear empties the list, copy sets the simulated system
/// clipboard. Every call is recorded, including failed ones.
///
/// # Examples
///
/// ```
/// use cs_core::ports::HistoryBridgePort;
/// use cs_infra::{BridgeCall, InMemoryHistoryBridge};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let bridge = InMemoryHistoryBridge::with_entries(["newest", "older"]);
/// bridge.delete_entry("older").await.unwrap();
///
/// assert_eq!(bridge.entries().await.len(), 1);
/// assert_eq!(bridge.calls().await, vec![BridgeCall::DeleteEntry("older".into())]);
/// # }
/// ```
#[derive(Default)]
pub struct InMemoryHistoryBridge {
    state: Mutex<BridgeState>,
}

impl InMemoryHistoryBridge {
    /// A backend with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose history starts as `texts`, newest first.
    pub fn with_entries<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = texts.into_iter().map(HistoryEntry::new).collect();
        Self {
            state: Mutex::new(BridgeState {
                entries,
                ..BridgeState::default()
            }),
        }
    }

    /// Replaces the whole history, as if another client had edited it.
    pub async fn set_history(&self, list: HistoryList) {
        self.state.lock().await.entries = list.into_entries();
    }

    /// Records a new copy the way the backend does: any equal entry is
    /// dropped and the text goes to the front.
    pub async fn push_entry(&self, text: impl Into<String>) {
        let text = text.into();
        let mut state = self.state.lock().await;
        state.entries.retain(|e| e.text != text);
        state.entries.insert(0, HistoryEntry::new(text));
    }

    /// While unavailable, every call fails with a transport error.
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().await.unavailable = unavailable;
    }

    /// Delays every `get_history` reply issued from now on.
    ///
    /// The reply carries the history as it was when the call arrived, so a
    /// slow reply can land after a newer one. The lock is not held while
    /// waiting.
    pub async fn set_fetch_delay(&self, delay: Option<Duration>) {
        self.state.lock().await.fetch_delay = delay;
    }

    /// The history as the backend currently holds it.
    pub async fn entries(&self) -> HistoryList {
        HistoryList::new(self.state.lock().await.entries.clone())
    }

    /// Last text written to the simulated system clipboard.
    pub async fn clipboard(&self) -> Option<String> {
        self.state.lock().await.clipboard.clone()
    }

    /// Every call received so far, in arrival order.
    pub async fn calls(&self) -> Vec<BridgeCall> {
        self.state.lock().await.calls.clone()
    }

    /// Number of `get_history` calls received, failed ones included.
    pub async fn fetch_count(&self) -> usize {
        self.state
            .lock()
            .await
            .calls
            .iter()
            .filter(|c| **c == BridgeCall::GetHistory)
            .count()
    }

    fn ensure_available(state: &BridgeState, call: &'static str) -> Result<(), BridgeError> {
        if state.unavailable {
            return Err(BridgeError::Transport(format!("{call}: backend unavailable")));
        }
        Ok(())
    }
}

#[async_trait]
impl HistoryBridgePort for InMemoryHistoryBridge {
    async fn get_history(&self) -> Result<HistoryList, BridgeError> {
        // The reply is captured at request time; a delayed reply is stale.
        let (reply, delay) = {
            let mut state = self.state.lock().await;
            state.calls.push(BridgeCall::GetHistory);
            Self::ensure_available(&state, "get_history")?;
            (HistoryList::new(state.entries.clone()), state.fetch_delay)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        Ok(reply)
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), BridgeError> {
        let mut state = self.state.lock().await;
        state.calls.push(BridgeCall::CopyToClipboard(text.to_string()));
        Self::ensure_available(&state, "copy_to_clipboard")?;
        state.clipboard = Some(text.to_string());
        debug!(text_len = text.len(), "In-memory clipboard written");
        Ok(())
    }

    async fn delete_entry(&self, text: &str) -> Result<(), BridgeError> {
        let mut state = self.state.lock().await;
        state.calls.push(BridgeCall::DeleteEntry(text.to_string()));
        Self::ensure_available(&state, "delete_entry")?;
        state.entries.retain(|e| e.text != text);
        Ok(())
    }

    async fn clear_history(&self) -> Result<(), BridgeError> {
        let mut state = self.state.lock().await;
        state.calls.push(BridgeCall::ClearHistory);
        Self::ensure_available(&state, "clear_history")?;
        state.entries.clear();
        Ok(())
    }
}
