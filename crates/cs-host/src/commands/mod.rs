pub mod document;
pub mod window;

pub use document::{on_card_click, on_clear_all_click};
pub use window::{hide_window, show_window};
