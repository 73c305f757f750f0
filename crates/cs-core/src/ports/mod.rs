//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `cs-app` and the
//! adapters that reach the backend or the hosting document. The core logic
//! stays independent of any transport or rendering technology, and tests
//! substitute doubles for either side.

pub mod app_dirs;
pub mod errors;
mod history_bridge;
mod history_view;

pub use app_dirs::AppDirsPort;
pub use errors::{AppDirsError, BridgeError};
pub use history_bridge::HistoryBridgePort;
pub use history_view::HistoryViewPort;
