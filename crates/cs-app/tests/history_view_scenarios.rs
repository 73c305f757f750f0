//! End-to-end scenarios for [`HistorySyncRenderer`] against the in-memory
//! bridge and document.

use std::sync::Arc;
use std::time::Duration;

use cs_app::usecases::SyncOutcome;
use cs_app::HistorySyncRenderer;
use cs_core::{CardTarget, ChangeDetection, HistoryList, UserAction, Visibility};
use cs_infra::{BridgeCall, DocumentView, InMemoryHistoryBridge};

struct Harness {
    bridge: Arc<InMemoryHistoryBridge>,
    document: Arc<DocumentView>,
    renderer: Arc<HistorySyncRenderer>,
}

fn harness(entries: &[&str], detection: ChangeDetection) -> Harness {
    let bridge = Arc::new(InMemoryHistoryBridge::with_entries(entries.iter().copied()));
    let document = Arc::new(DocumentView::new());
    let renderer = Arc::new(HistorySyncRenderer::from_ports(
        bridge.clone(),
        document.clone(),
        detection,
    ));
    Harness {
        bridge,
        document,
        renderer,
    }
}

fn list(texts: &[&str]) -> HistoryList {
    texts.iter().copied().collect()
}

#[tokio::test]
async fn empty_backend_shows_empty_state() {
    let h = harness(&[], ChangeDetection::Length);

    let outcome = h.renderer.sync().await.unwrap();

    assert_eq!(outcome, SyncOutcome::Unchanged);
    assert!(h.document.is_empty_state_shown());
    assert_eq!(h.document.card_count(), 0);
}

#[tokio::test]
async fn cards_follow_backend_order_and_click_copies() {
    let h = harness(&["a", "b"], ChangeDetection::Length);

    h.renderer.sync().await.unwrap();
    assert_eq!(h.document.card_texts(), vec!["a", "b"]);
    assert!(!h.document.is_empty_state_shown());

    let actions = h.document.click_card(0, CardTarget::Body);
    assert_eq!(actions, vec![UserAction::Copy("a".into())]);
    for action in actions {
        h.renderer.handle(action).await.unwrap();
    }

    assert_eq!(h.bridge.clipboard().await.as_deref(), Some("a"));
}

#[tokio::test]
async fn delete_click_removes_card_without_copying() {
    let h = harness(&["a", "b"], ChangeDetection::Length);
    h.renderer.sync().await.unwrap();

    let actions = h.document.click_card(0, CardTarget::DeleteButton);
    assert_eq!(actions, vec![UserAction::Delete("a".into())]);
    for action in actions {
        h.renderer.handle(action).await.unwrap();
    }

    assert_eq!(h.document.card_texts(), vec!["b"]);
    assert_eq!(h.bridge.clipboard().await, None);
    assert_eq!(
        h.bridge.calls().await,
        vec![
            BridgeCall::GetHistory,
            BridgeCall::DeleteEntry("a".into()),
            BridgeCall::GetHistory,
        ]
    );
}

#[tokio::test]
async fn equal_length_replacement_is_missed_by_length_detection() {
    let h = harness(&["a"], ChangeDetection::Length);
    h.renderer.sync().await.unwrap();

    h.bridge.set_history(list(&["c"])).await;
    let outcome = h.renderer.sync().await.unwrap();

    assert_eq!(outcome, SyncOutcome::Unchanged);
    assert_eq!(h.document.card_texts(), vec!["a"]);
}

#[tokio::test]
async fn equal_length_replacement_is_caught_by_content_detection() {
    let h = harness(&["a"], ChangeDetection::Content);
    h.renderer.sync().await.unwrap();

    h.bridge.set_history(list(&["c"])).await;
    let outcome = h.renderer.sync().await.unwrap();

    assert_eq!(outcome, SyncOutcome::Rendered { cards: 1 });
    assert_eq!(h.document.card_texts(), vec!["c"]);
}

#[tokio::test]
async fn repeated_sync_without_change_rebuilds_once() {
    let h = harness(&["a", "b", "c"], ChangeDetection::Length);

    for _ in 0..5 {
        h.renderer.sync().await.unwrap();
    }

    assert_eq!(h.document.rebuild_count(), 1);
    assert_eq!(h.bridge.fetch_count().await, 5);
}

#[tokio::test]
async fn new_entry_is_rendered_on_next_sync() {
    let h = harness(&["a"], ChangeDetection::Length);
    h.renderer.sync().await.unwrap();

    h.bridge.push_entry("b").await;
    h.renderer.sync().await.unwrap();

    assert_eq!(h.document.card_texts(), vec!["b", "a"]);
    assert_eq!(h.renderer.render_state().await.length(), 2);
}

#[tokio::test]
async fn clear_all_empties_document_and_records_state() {
    let h = harness(&["a", "b"], ChangeDetection::Length);
    h.renderer.sync().await.unwrap();

    let action = h.document.click_clear_all().unwrap();
    h.renderer.handle(action).await.unwrap();

    assert!(h.document.is_empty_state_shown());
    assert_eq!(h.document.card_count(), 0);
    assert_eq!(h.renderer.render_state().await.length(), 0);
}

#[tokio::test]
async fn failed_delete_skips_refresh() {
    let h = harness(&["a"], ChangeDetection::Length);
    h.renderer.sync().await.unwrap();
    h.bridge.set_unavailable(true).await;

    let err = h.renderer.remove("a").await.unwrap_err();

    assert!(err.to_string().contains("Failed to delete entry"));
    assert_eq!(h.bridge.fetch_count().await, 1);
    assert_eq!(h.document.card_texts(), vec!["a"]);
}

#[tokio::test]
async fn failed_sync_keeps_previous_document() {
    let h = harness(&["a"], ChangeDetection::Length);
    h.renderer.sync().await.unwrap();
    h.bridge.set_unavailable(true).await;

    assert!(h.renderer.sync().await.is_err());

    assert_eq!(h.document.card_texts(), vec!["a"]);
    assert_eq!(h.renderer.render_state().await.length(), 1);
}

#[tokio::test]
async fn hide_makes_document_inert_until_shown() {
    let h = harness(&["a"], ChangeDetection::Length);
    h.renderer.sync().await.unwrap();

    h.renderer.hide();
    assert_eq!(h.document.visibility(), Visibility::Hidden);
    assert!(h.document.click_card(0, CardTarget::Text).is_empty());

    h.renderer.show();
    assert_eq!(h.document.visibility(), Visibility::Shown);
    assert_eq!(
        h.document.click_card(0, CardTarget::Text),
        vec![UserAction::Copy("a".into())]
    );
}

#[tokio::test]
async fn dispatch_runs_action_in_background() {
    let h = harness(&["x"], ChangeDetection::Length);

    h.renderer
        .dispatch(UserAction::Copy("x".into()))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(h.bridge.clipboard().await.as_deref(), Some("x"));
}

#[tokio::test]
async fn dispatch_reports_failure_through_handle() {
    let h = harness(&["x"], ChangeDetection::Length);
    h.bridge.set_unavailable(true).await;

    let result = h
        .renderer
        .dispatch(UserAction::Copy("x".into()))
        .await
        .unwrap();

    assert!(result.is_err());
}

#[tokio::test(start_paused = true)]
async fn overlapping_syncs_apply_the_last_response_to_arrive() {
    let h = harness(&["a", "b"], ChangeDetection::Length);
    h.bridge.set_fetch_delay(Some(Duration::from_secs(5))).await;

    let slow = {
        let renderer = h.renderer.clone();
        tokio::spawn(async move { renderer.sync().await })
    };
    tokio::task::yield_now().await;
    assert_eq!(h.bridge.fetch_count().await, 1);

    h.bridge.set_fetch_delay(None).await;
    h.bridge.set_history(list(&["c"])).await;
    let fast = h.renderer.sync().await.unwrap();
    assert_eq!(fast, SyncOutcome::Rendered { cards: 1 });
    assert_eq!(h.document.card_texts(), vec!["c"]);

    let late = slow.await.unwrap().unwrap();

    assert_eq!(late, SyncOutcome::Rendered { cards: 2 });
    assert_eq!(h.document.card_texts(), vec!["a", "b"]);
    assert_eq!(h.renderer.render_state().await.length(), 2);
}

#[tokio::test]
async fn render_rebuilds_without_touching_render_state() {
    let h = harness(&[], ChangeDetection::Length);

    let shown = h.renderer.render(&list(&["x", "y"]));

    assert_eq!(shown, 2);
    assert_eq!(h.document.card_texts(), vec!["x", "y"]);
    assert_eq!(h.renderer.render_state().await.length(), 0);
    assert_eq!(h.bridge.fetch_count().await, 0);
}
