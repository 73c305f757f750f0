//! ClipShelf host layer
//!
//! Bootstrap (config, tracing, runtime wiring, run loop) and the inbound
//! commands the backend and the document call into.

pub mod bootstrap;
pub mod commands;
