//! # Viewer Runtime
//!
//! Wires the adapters into the renderer. The bridge here is the in-memory
//! backend; a real bridge transport implements the same port.

use std::sync::Arc;

use cs_app::{start_sync_loop, HistorySyncRenderer, SyncLoopHandle, SyncSettings};
use cs_core::ports::{HistoryBridgePort, HistoryViewPort};
use cs_infra::{DocumentView, InMemoryHistoryBridge};
use tracing::info;

/// Assembled viewer: backend, document, and the renderer joining them.
pub struct ViewerRuntime {
    pub bridge: Arc<InMemoryHistoryBridge>,
    pub document: Arc<DocumentView>,
    pub renderer: Arc<HistorySyncRenderer>,
    pub settings: SyncSettings,
}

impl ViewerRuntime {
    /// Starts the polling loop for this runtime.
    ///
    /// Must be called from within a tokio runtime. The returned handle stops
    /// the loop; dropping it leaves the loop running.
    pub fn start(&self) -> SyncLoopHandle {
        start_sync_loop(Arc::clone(&self.renderer), &self.settings)
    }
}

/// Builds the runtime with a backend seeded with `seed`, newest first.
///
/// # Examples
///
/// ```
/// use cs_app::SyncSettings;
/// use cs_host::bootstrap::create_runtime;
///
/// let runtime = create_runtime(SyncSettings::default(), vec!["hello".into()]);
/// assert!(runtime.document.is_empty_state_shown());
/// ```
pub fn create_runtime(settings: SyncSettings, seed: Vec<String>) -> ViewerRuntime {
    let bridge = Arc::new(InMemoryHistoryBridge::with_entries(seed));
    let document = Arc::new(DocumentView::new());

    let bridge_port: Arc<dyn HistoryBridgePort> = bridge.clone();
    let view_port: Arc<dyn HistoryViewPort> = document.clone();
    let renderer = Arc::new(HistorySyncRenderer::from_ports(
        bridge_port,
        view_port,
        settings.change_detection,
    ));

    info!(
        change_detection = ?settings.change_detection,
        poll_interval_ms = settings.poll_interval.as_millis() as u64,
        "Viewer runtime created"
    );

    ViewerRuntime {
        bridge,
        document,
        renderer,
        settings,
    }
}
