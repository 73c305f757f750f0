//! History view use cases
//!
//! ```text
//! [SyncLoop tick] ──► SyncHistory ──► RenderHistory ──► HistoryViewPort
//!                          ▲
//! [card click] ──► CopyEntry
//!              ──► RemoveEntry  ──┤ (forced sync)
//! [clear all]  ──► ClearHistory ──┘
//! [backend]    ──► ApplyVisibility
//! ```

mod apply_visibility;
mod clear_history;
mod copy_entry;
mod remove_entry;
mod render_history;
mod sync_history;

pub use apply_visibility::ApplyVisibility;
pub use clear_history::ClearHistory;
pub use copy_entry::CopyEntry;
pub use remove_entry::RemoveEntry;
pub use render_history::RenderHistory;
pub use sync_history::{SyncHistory, SyncMode, SyncOutcome};
