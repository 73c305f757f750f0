use cs_app::SyncSettings;
use cs_core::{CardTarget, Visibility};
use cs_host::bootstrap::create_runtime;
use cs_host::commands::{hide_window, on_card_click, on_clear_all_click, show_window};

async fn settle(handles: Vec<tokio::task::JoinHandle<anyhow::Result<()>>>) {
    for handle in handles {
        handle.await.unwrap().unwrap();
    }
}

#[tokio::test]
async fn card_click_copies_entry() {
    let runtime = create_runtime(SyncSettings::default(), vec!["a".into(), "b".into()]);
    runtime.renderer.sync().await.unwrap();

    settle(on_card_click(&runtime, 1, CardTarget::Text)).await;

    assert_eq!(runtime.bridge.clipboard().await.as_deref(), Some("b"));
}

#[tokio::test]
async fn delete_click_refreshes_document() {
    let runtime = create_runtime(SyncSettings::default(), vec!["a".into(), "b".into()]);
    runtime.renderer.sync().await.unwrap();

    settle(on_card_click(&runtime, 1, CardTarget::DeleteButton)).await;

    assert_eq!(runtime.document.card_texts(), vec!["a"]);
    assert_eq!(runtime.bridge.clipboard().await, None);
}

#[tokio::test]
async fn clear_all_click_shows_empty_state() {
    let runtime = create_runtime(SyncSettings::default(), vec!["a".into()]);
    runtime.renderer.sync().await.unwrap();

    let handle = on_clear_all_click(&runtime).unwrap();
    handle.await.unwrap().unwrap();

    assert!(runtime.document.is_empty_state_shown());
    assert!(runtime.bridge.entries().await.is_empty());
}

#[tokio::test]
async fn hidden_window_swallows_clicks() {
    let runtime = create_runtime(SyncSettings::default(), vec!["a".into()]);
    runtime.renderer.sync().await.unwrap();

    hide_window(&runtime.renderer);
    assert_eq!(runtime.document.visibility(), Visibility::Hidden);
    assert!(on_card_click(&runtime, 0, CardTarget::Body).is_empty());
    assert!(on_clear_all_click(&runtime).is_none());

    show_window(&runtime.renderer);
    settle(on_card_click(&runtime, 0, CardTarget::Body)).await;
    assert_eq!(runtime.bridge.clipboard().await.as_deref(), Some("a"));
}
