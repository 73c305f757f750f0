use std::sync::Arc;

use cs_core::ports::HistoryViewPort;
use cs_core::Visibility;
use tracing::debug;

pub struct ApplyVisibility {
    view: Arc<dyn HistoryViewPort>,
}

impl ApplyVisibility {
    pub fn from_port(view: Arc<dyn HistoryViewPort>) -> Self {
        Self { view }
    }

    pub fn execute(&self, visibility: Visibility) {
        self.view.apply_visibility(visibility);
        debug!(?visibility, "Applied view visibility");
    }
}
