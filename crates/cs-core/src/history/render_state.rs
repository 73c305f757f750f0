use super::HistoryList;

/// How a freshly fetched list is compared against the last rendered one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChangeDetection {
    /// Changed iff the length differs. Two different lists of equal length
    /// count as unchanged.
    #[default]
    Length,
    /// Changed iff the ordered content fingerprint differs.
    Content,
}

impl ChangeDetection {
    /// Parses the config spelling. Unknown values yield `None`; the caller
    /// decides the fallback.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "length" => Some(Self::Length),
            "content" => Some(Self::Content),
            _ => None,
        }
    }
}

/// What the viewer last rendered.
///
/// Starts at zero length with no fingerprint, lives for the process, and is
/// never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
    length: usize,
    fingerprint: Option<u64>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn fingerprint(&self) -> Option<u64> {
        self.fingerprint
    }

    /// Whether `list` differs from the recorded state under `detection`.
    pub fn differs_from(&self, list: &HistoryList, detection: ChangeDetection) -> bool {
        match detection {
            ChangeDetection::Length => list.len() != self.length,
            ChangeDetection::Content => self.fingerprint != Some(list.fingerprint()),
        }
    }

    /// Records `list` as the rendered one.
    pub fn record(&mut self, list: &HistoryList) {
        self.length = list.len();
        self.fingerprint = Some(list.fingerprint());
    }

    /// Records `list` if it differs; returns whether a render is due.
    pub fn observe(&mut self, list: &HistoryList, detection: ChangeDetection) -> bool {
        if !self.differs_from(list, detection) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            previous_len = self.length,
            next_len = list.len(),
            ?detection,
            "history changed"
        );
        self.record(list);
        true
    }
}
