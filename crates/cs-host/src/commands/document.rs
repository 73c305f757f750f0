//! Click handlers of the hosting document.
//!
//! Each click is turned into user actions by the document and dispatched to
//! the renderer without waiting for the backend.

use cs_core::CardTarget;
use tokio::task::JoinHandle;

use crate::bootstrap::ViewerRuntime;

/// Clicks `target` in the card at `index` and dispatches what it raised.
///
/// Returns one handle per dispatched action; empty when the document is
/// hidden or `index` is out of range. Must be called within a tokio runtime.
#[tracing::instrument(name = "command.card_click", skip(runtime))]
pub fn on_card_click(
    runtime: &ViewerRuntime,
    index: usize,
    target: CardTarget,
) -> Vec<JoinHandle<anyhow::Result<()>>> {
    runtime
        .document
        .click_card(index, target)
        .into_iter()
        .map(|action| runtime.renderer.dispatch(action))
        .collect()
}

/// Clicks "clear all"; `None` when the document is hidden.
#[tracing::instrument(name = "command.clear_all_click", skip(runtime))]
pub fn on_clear_all_click(runtime: &ViewerRuntime) -> Option<JoinHandle<anyhow::Result<()>>> {
    runtime
        .document
        .click_clear_all()
        .map(|action| runtime.renderer.dispatch(action))
}
