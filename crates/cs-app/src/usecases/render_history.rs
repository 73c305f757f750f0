use std::sync::Arc;

use cs_core::ports::HistoryViewPort;
use cs_core::{Card, HistoryList};
use tracing::debug;

/// Use case mapping a history list onto the document's card container.
///
/// Always a full rebuild: existing cards are dropped and one card per entry
/// is built in list order. An empty list leaves only the empty-state
/// indicator.
#[derive(Clone)]
pub struct RenderHistory {
    view: Arc<dyn HistoryViewPort>,
}

impl RenderHistory {
    pub fn from_port(view: Arc<dyn HistoryViewPort>) -> Self {
        Self { view }
    }

    /// Rebuilds the container from `list`; returns the number of cards shown.
    #[tracing::instrument(
        name = "usecase.render_history.execute",
        skip_all,
        fields(entries = list.len())
    )]
    pub fn execute(&self, list: &HistoryList) -> usize {
        let cards: Vec<Card> = list.iter().map(Card::from_entry).collect();
        let count = cards.len();

        self.view.replace_cards(cards);

        if count == 0 {
            debug!("Rendered empty state");
        } else {
            debug!(cards = count, "Rendered history cards");
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::Visibility;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingView {
        commits: Mutex<Vec<Vec<String>>>,
    }

    impl HistoryViewPort for RecordingView {
        fn replace_cards(&self, cards: Vec<Card>) {
            let texts = cards.iter().map(|c| c.text().to_string()).collect();
            self.commits.lock().unwrap().push(texts);
        }

        fn apply_visibility(&self, _visibility: Visibility) {}
    }

    #[test]
    fn renders_one_card_per_entry_in_order() {
        let view = Arc::new(RecordingView::default());
        let uc = RenderHistory::from_port(view.clone());

        let shown = uc.execute(&["a", "b", "c"].into_iter().collect());

        assert_eq!(shown, 3);
        assert_eq!(*view.commits.lock().unwrap(), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn empty_list_commits_empty_container() {
        let view = Arc::new(RecordingView::default());
        let uc = RenderHistory::from_port(view.clone());

        let shown = uc.execute(&HistoryList::empty());

        assert_eq!(shown, 0);
        assert_eq!(*view.commits.lock().unwrap(), vec![Vec::<String>::new()]);
    }

    #[test]
    fn duplicate_texts_each_get_a_card() {
        let view = Arc::new(RecordingView::default());
        let uc = RenderHistory::from_port(view.clone());

        uc.execute(&["x", "x"].into_iter().collect());

        assert_eq!(view.commits.lock().unwrap()[0], vec!["x", "x"]);
    }
}
