mod document;

pub use document::{DocumentSnapshot, DocumentView};
