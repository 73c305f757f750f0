/// A user intention raised by the document and forwarded to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Copy(String),
    Delete(String),
    ClearAll,
}

impl UserAction {
    pub fn name(&self) -> &'static str {
        match self {
            UserAction::Copy(_) => "copy",
            UserAction::Delete(_) => "delete",
            UserAction::ClearAll => "clear_all",
        }
    }
}
