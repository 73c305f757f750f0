use std::hash::Hasher;

use serde::{Deserialize, Serialize};
use twox_hash::XxHash64;

use super::HistoryEntry;

/// Ordered history as returned by the backend.
///
/// The order is the backend's policy; this type never reorders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryList(Vec<HistoryEntry>);

impl HistoryList {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self(entries)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.0.iter()
    }

    pub fn into_entries(self) -> Vec<HistoryEntry> {
        self.0
    }

    /// Ordered content fingerprint.
    ///
    /// Each text is length-prefixed, so `["ab"]` and `["a", "b"]` hash
    /// differently, and a reordering changes the value.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = XxHash64::with_seed(0);
        hasher.write_u64(self.0.len() as u64);
        for entry in &self.0 {
            hasher.write_u64(entry.text.len() as u64);
            hasher.write(entry.text.as_bytes());
        }
        hasher.finish()
    }
}

impl From<Vec<HistoryEntry>> for HistoryList {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self(entries)
    }
}

impl<'a> FromIterator<&'a str> for HistoryList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(HistoryEntry::from).collect())
    }
}

impl FromIterator<HistoryEntry> for HistoryList {
    fn from_iter<I: IntoIterator<Item = HistoryEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a HistoryList {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
