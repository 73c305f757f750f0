use std::fmt::Write as _;
use std::sync::{Mutex, MutexGuard, PoisonError};

use cs_core::ports::HistoryViewPort;
use cs_core::{Card, CardTarget, UserAction, Visibility};
use tokio::sync::watch;
use tracing::trace;

/// Snapshot published to subscribers after every document mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub card_texts: Vec<String>,
    pub empty_shown: bool,
    pub visibility: Visibility,
    pub rebuild_count: u64,
}

struct DocumentState {
    cards: Vec<Card>,
    empty_shown: bool,
    visibility: Visibility,
    rebuild_count: u64,
}

impl DocumentState {
    fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            card_texts: self.cards.iter().map(|c| c.text().to_string()).collect(),
            empty_shown: self.empty_shown,
            visibility: self.visibility,
            rebuild_count: self.rebuild_count,
        }
    }
}

/// In-memory hosting document.
///
/// Holds the card container, the empty-state indicator and the body
/// visibility. The indicator starts shown: a document that was never
/// rendered has no cards.
///
/// # Examples
///
/// ```
/// use cs_core::ports::HistoryViewPort;
/// use cs_core::{Card, CardTarget, HistoryEntry, UserAction};
/// use cs_infra::DocumentView;
///
/// let doc = DocumentView::new();
/// assert!(doc.is_empty_state_shown());
///
/// doc.replace_cards(vec![Card::from_entry(&HistoryEntry::new("a"))]);
/// assert_eq!(doc.card_texts(), vec!["a"]);
/// assert_eq!(doc.click_card(0, CardTarget::Body), vec![UserAction::Copy("a".into())]);
/// ```
pub struct DocumentView {
    state: Mutex<DocumentState>,
    changes: watch::Sender<DocumentSnapshot>,
}

impl Default for DocumentView {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentView {
    /// An unrendered, visible document showing the empty-state indicator.
    pub fn new() -> Self {
        let state = DocumentState {
            cards: Vec::new(),
            empty_shown: true,
            visibility: Visibility::Shown,
            rebuild_count: 0,
        };
        let (changes, _) = watch::channel(state.snapshot());
        Self {
            state: Mutex::new(state),
            changes,
        }
    }

    fn lock(&self) -> MutexGuard<'_, DocumentState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &DocumentState) {
        self.changes.send_replace(state.snapshot());
    }

    /// Receives a snapshot after every rebuild or visibility change.
    pub fn subscribe(&self) -> watch::Receiver<DocumentSnapshot> {
        self.changes.subscribe()
    }

    /// Current state, as subscribers would receive it.
    pub fn snapshot(&self) -> DocumentSnapshot {
        self.lock().snapshot()
    }

    /// Texts of the cards on screen, in display order.
    pub fn card_texts(&self) -> Vec<String> {
        self.lock().cards.iter().map(|c| c.text().to_string()).collect()
    }

    pub fn card_count(&self) -> usize {
        self.lock().cards.len()
    }

    /// Whether the empty-state indicator carries the `show` class.
    pub fn is_empty_state_shown(&self) -> bool {
        self.lock().empty_shown
    }

    pub fn visibility(&self) -> Visibility {
        self.lock().visibility
    }

    /// How many times the card container was rebuilt.
    pub fn rebuild_count(&self) -> u64 {
        self.lock().rebuild_count
    }

    /// Clicks `target` inside the card at `index`.
    ///
    /// Returns the actions the card's handlers raised; nothing when the
    /// document is hidden or no card sits at `index`.
    pub fn click_card(&self, index: usize, target: CardTarget) -> Vec<UserAction> {
        let state = self.lock();
        if !state.visibility.is_interactive() {
            return Vec::new();
        }
        state
            .cards
            .get(index)
            .map(|card| card.dispatch_click(target))
            .unwrap_or_default()
    }

    /// Clicks the document's "clear all" control.
    ///
    /// Returns `None` while the document is hidden.
    pub fn click_clear_all(&self) -> Option<UserAction> {
        self.lock()
            .visibility
            .is_interactive()
            .then_some(UserAction::ClearAll)
    }

    /// Renders the document body as markup.
    ///
    /// Entry text is HTML-escaped. The body style carries the current
    /// opacity and `pointer-events` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs_infra::DocumentView;
    ///
    /// let markup = DocumentView::new().to_markup();
    /// assert!(markup.contains(r#"<div class="empty show">"#));
    /// ```
    pub fn to_markup(&self) -> String {
        let state = self.lock();
        let mut out = String::new();

        let _ = writeln!(
            out,
            r#"<body style="opacity: {}; pointer-events: {}">"#,
            state.visibility.opacity(),
            state.visibility.pointer_events()
        );

        let empty_class = if state.empty_shown { "empty show" } else { "empty" };
        let _ = writeln!(out, r#"  <div class="{empty_class}">No history yet</div>"#);

        out.push_str("  <div id=\"history\">\n");
        for card in &state.cards {
            let _ = writeln!(out, r#"    <div class="{}">"#, Card::CLASS_NAME);
            let _ = writeln!(
                out,
                r#"      <div class="{}">{}</div>"#,
                Card::TEXT_CLASS_NAME,
                escape_html(card.text())
            );
            let _ = writeln!(out, r#"      <div class="{}">"#, Card::ACTIONS_CLASS_NAME);
            for button in card.buttons() {
                let _ = writeln!(
                    out,
                    r#"        <button class="{}">{}</button>"#,
                    button.class_name, button.label
                );
            }
            out.push_str("      </div>\n    </div>\n");
        }
        out.push_str("  </div>\n</body>\n");
        out
    }
}

impl HistoryViewPort for DocumentView {
    fn replace_cards(&self, cards: Vec<Card>) {
        let mut state = self.lock();
        state.empty_shown = cards.is_empty();
        state.cards = cards;
        state.rebuild_count += 1;
        trace!(
            cards = state.cards.len(),
            rebuild = state.rebuild_count,
            "Document rebuilt"
        );
        self.publish(&state);
    }

    fn apply_visibility(&self, visibility: Visibility) {
        let mut state = self.lock();
        state.visibility = visibility;
        self.publish(&state);
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::HistoryEntry;

    fn cards(texts: &[&str]) -> Vec<Card> {
        texts
            .iter()
            .map(|t| Card::from_entry(&HistoryEntry::new(*t)))
            .collect()
    }

    #[test]
    fn new_document_shows_empty_state() {
        let doc = DocumentView::new();
        assert!(doc.is_empty_state_shown());
        assert_eq!(doc.card_count(), 0);
        assert_eq!(doc.rebuild_count(), 0);
    }

    #[test]
    fn replace_cards_toggles_empty_state() {
        let doc = DocumentView::new();

        doc.replace_cards(cards(&["a", "b"]));
        assert!(!doc.is_empty_state_shown());
        assert_eq!(doc.card_texts(), vec!["a", "b"]);

        doc.replace_cards(Vec::new());
        assert!(doc.is_empty_state_shown());
        assert_eq!(doc.card_count(), 0);
        assert_eq!(doc.rebuild_count(), 2);
    }

    #[test]
    fn hidden_document_ignores_clicks() {
        let doc = DocumentView::new();
        doc.replace_cards(cards(&["a"]));
        doc.apply_visibility(Visibility::Hidden);

        assert!(doc.click_card(0, CardTarget::Body).is_empty());
        assert_eq!(doc.click_clear_all(), None);

        doc.apply_visibility(Visibility::Shown);
        assert_eq!(
            doc.click_card(0, CardTarget::Body),
            vec![UserAction::Copy("a".into())]
        );
        assert_eq!(doc.click_clear_all(), Some(UserAction::ClearAll));
    }

    #[test]
    fn click_out_of_range_raises_nothing() {
        let doc = DocumentView::new();
        doc.replace_cards(cards(&["a"]));
        assert!(doc.click_card(3, CardTarget::CopyButton).is_empty());
    }

    #[test]
    fn markup_escapes_entry_text() {
        let doc = DocumentView::new();
        doc.replace_cards(cards(&["<b>&\"x\"</b>"]));

        let markup = doc.to_markup();

        assert!(markup.contains("&lt;b&gt;&amp;&quot;x&quot;&lt;/b&gt;"));
        assert!(markup.contains(r#"<div class="empty">"#));
        assert!(markup.contains(r#"<button class="btn btn-delete">"#));
    }

    #[test]
    fn markup_reflects_hidden_body() {
        let doc = DocumentView::new();
        doc.apply_visibility(Visibility::Hidden);

        let markup = doc.to_markup();

        assert!(markup.contains("opacity: 0; pointer-events: none"));
        assert!(markup.contains(r#"<div class="empty show">"#));
    }

    #[test]
    fn subscribers_see_each_rebuild() {
        let doc = DocumentView::new();
        let mut rx = doc.subscribe();

        doc.replace_cards(cards(&["a"]));

        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.card_texts, vec!["a"]);
        assert_eq!(snapshot.rebuild_count, 1);
        assert!(!snapshot.empty_shown);
    }
}
