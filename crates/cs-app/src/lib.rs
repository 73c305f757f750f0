//! ClipShelf Application Orchestration Layer
//!
//! This crate contains the history-view use cases, the renderer facade that
//! composes them, and the polling loop that drives it.

pub mod app_paths;
pub mod history_renderer;
pub mod settings;
pub mod sync_loop;
pub mod usecases;

pub use history_renderer::HistorySyncRenderer;
pub use settings::SyncSettings;
pub use sync_loop::{start_sync_loop, SyncLoopHandle};
