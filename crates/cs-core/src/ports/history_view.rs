use crate::view::{Card, Visibility};

/// The hosting document: a card container, an empty-state indicator and
/// the body whose visibility the backend toggles.
pub trait HistoryViewPort: Send + Sync {
    /// Replaces every card in the container with `cards`, in order.
    ///
    /// Implementations apply the replacement as one step. An empty `cards`
    /// shows the empty-state indicator; a non-empty one hides it.
    fn replace_cards(&self, cards: Vec<Card>);

    fn apply_visibility(&self, visibility: Visibility);
}
