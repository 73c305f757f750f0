mod entry;
mod list;
mod render_state;

pub use entry::HistoryEntry;
pub use list::HistoryList;
pub use render_state::{ChangeDetection, RenderState};
