//! History Sync Renderer
//!
//! Keeps the on-screen history eventually consistent with the backend and
//! forwards user actions as bridge calls. The polling loop in
//! [`crate::sync_loop`] drives [`HistorySyncRenderer::sync`]; the hosting
//! document feeds [`UserAction`]s into [`HistorySyncRenderer::dispatch`].

use std::sync::Arc;

use anyhow::Result;
use cs_core::ports::{HistoryBridgePort, HistoryViewPort};
use cs_core::{ChangeDetection, HistoryList, RenderState, UserAction, Visibility};
use tokio::task::JoinHandle;
use tracing::{error, info_span, Instrument};

use crate::usecases::{
    ApplyVisibility, ClearHistory, CopyEntry, RemoveEntry, RenderHistory, SyncHistory, SyncMode,
    SyncOutcome,
};

pub struct HistorySyncRenderer {
    sync: SyncHistory,
    render: RenderHistory,
    copy: CopyEntry,
    remove: RemoveEntry,
    clear: ClearHistory,
    visibility: ApplyVisibility,
}

impl HistorySyncRenderer {
    pub fn from_ports(
        bridge: Arc<dyn HistoryBridgePort>,
        view: Arc<dyn HistoryViewPort>,
        detection: ChangeDetection,
    ) -> Self {
        let render = RenderHistory::from_port(view.clone());
        let sync = SyncHistory::from_ports(bridge.clone(), render.clone(), detection);

        Self {
            copy: CopyEntry::from_port(bridge.clone()),
            remove: RemoveEntry::from_ports(bridge.clone(), sync.clone()),
            clear: ClearHistory::from_ports(bridge, sync.clone()),
            visibility: ApplyVisibility::from_port(view),
            sync,
            render,
        }
    }

    /// Fetches the history and re-renders when change detection says so.
    pub async fn sync(&self) -> Result<SyncOutcome> {
        self.sync.execute(SyncMode::Detect).await
    }

    /// Rebuilds the document from `list` without consulting or updating the
    /// render state.
    pub fn render(&self, list: &HistoryList) -> usize {
        self.render.execute(list)
    }

    pub async fn copy(&self, text: &str) -> Result<()> {
        self.copy.execute(text).await
    }

    pub async fn remove(&self, text: &str) -> Result<SyncOutcome> {
        self.remove.execute(text).await
    }

    pub async fn clear_all(&self) -> Result<SyncOutcome> {
        self.clear.execute().await
    }

    /// Inbound call from the backend: opaque and interactive.
    pub fn show(&self) {
        self.visibility.execute(Visibility::Shown);
    }

    /// Inbound call from the backend: transparent and inert.
    pub fn hide(&self) {
        self.visibility.execute(Visibility::Hidden);
    }

    pub async fn render_state(&self) -> RenderState {
        self.sync.render_state().await
    }

    /// Performs `action` and waits for it, including any follow-up sync.
    pub async fn handle(&self, action: UserAction) -> Result<()> {
        match action {
            UserAction::Copy(text) => self.copy(&text).await,
            UserAction::Delete(text) => self.remove(&text).await.map(|_| ()),
            UserAction::ClearAll => self.clear_all().await.map(|_| ()),
        }
    }

    /// Fire-and-forget variant of [`Self::handle`] for click handlers.
    ///
    /// The action runs on its own task; failures are logged and also
    /// returned through the handle for callers that do want to wait.
    pub fn dispatch(self: &Arc<Self>, action: UserAction) -> JoinHandle<Result<()>> {
        let renderer = Arc::clone(self);
        let span = info_span!("history_renderer.dispatch", action = action.name());

        tokio::spawn(
            async move {
                let name = action.name();
                let result = renderer.handle(action).await;
                if let Err(e) = &result {
                    error!(action = name, error = %e, "User action failed");
                }
                result
            }
            .instrument(span),
        )
    }
}
