use serde::{Deserialize, Serialize};

const PREVIEW_CHARS: usize = 80;

/// One remembered clipboard value.
///
/// Entries carry no id: two entries are the same entry iff their text is
/// byte-for-byte equal. The backend may send extra fields (`timestamp`,
/// `preview`); they are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text: String,
}

impl HistoryEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Short form used in log lines: the first 80 characters, followed by
    /// `...` when the text was cut.
    pub fn preview(&self) -> String {
        let mut chars = self.text.chars();
        let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }
}

impl From<&str> for HistoryEntry {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for HistoryEntry {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
