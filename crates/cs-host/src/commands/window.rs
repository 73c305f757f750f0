//! Inbound calls the backend makes on the viewer.

use cs_app::HistorySyncRenderer;

/// Makes the viewer opaque and interactive.
#[tracing::instrument(name = "command.show_window", skip_all)]
pub fn show_window(renderer: &HistorySyncRenderer) {
    renderer.show();
}

/// Makes the viewer transparent; clicks are ignored until it is shown.
#[tracing::instrument(name = "command.hide_window", skip_all)]
pub fn hide_window(renderer: &HistorySyncRenderer) {
    renderer.hide();
}
