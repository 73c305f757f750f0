//! # cs-core
//!
//! Core domain models and ports for the ClipShelf history viewer.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! history entries, render-state change detection, the card/document model,
//! and the port traits implemented by `cs-infra` or a real backend bridge.

pub mod app_dirs;
pub mod config;
pub mod history;
pub mod ports;
pub mod view;

// Re-export commonly used types at the crate root
pub use config::ViewerConfig;
pub use history::{ChangeDetection, HistoryEntry, HistoryList, RenderState};
pub use view::{ButtonRole, Card, CardTarget, UserAction, Visibility};
