//! # cs-infra
//!
//! Adapters implementing the `cs-core` ports:
//!
//! - **bridge**: an in-memory backend standing in for the real bridge
//! - **view**: an in-memory hosting document
//! - **app_dirs**: platform application directories via `dirs`

pub mod app_dirs;
pub mod bridge;
pub mod view;

pub use app_dirs::DirsAppDirsAdapter;
pub use bridge::{BridgeCall, InMemoryHistoryBridge};
pub use view::{DocumentSnapshot, DocumentView};
