use cookiesnap::base::snaperror::SnapError;
use cookiesnap::dialog::{CopyOutcome, DialogConfig, DialogState, InspectionDialog, MemoryClipboard};
use cookiesnap::dom::{Document, MemoryDocument};
use cookiesnap::trigger::Trigger;
use std::sync::Arc;
use std::time::Duration;

fn setup(clipboard: MemoryClipboard) -> (Arc<MemoryDocument>, InspectionDialog) {
    let doc = Arc::new(MemoryDocument::for_url("https://example.com/", "a=1; b=2").unwrap());
    let dialog = InspectionDialog::new(doc.clone(), Arc::new(clipboard));
    (doc, dialog)
}

#[test]
fn test_open_then_close_leaves_nothing() {
    let (doc, dialog) = setup(MemoryClipboard::new());
    let handle = dialog.open("X").unwrap();
    assert!(doc.is_attached(handle.elements().text));

    handle.close();

    assert_eq!(doc.element_count(), 0);
    assert!(doc.body_children().is_empty());
    assert!(!handle.has_pending_reset());
    assert_eq!(handle.state(), DialogState::Closed);
}

#[test]
fn test_second_open_is_rejected() {
    let (doc, dialog) = setup(MemoryClipboard::new());
    let first = dialog.open("first").unwrap();
    let mutations = doc.mutation_count();

    assert_eq!(dialog.open("second").unwrap_err(), SnapError::DialogAlreadyOpen);
    assert_eq!(doc.mutation_count(), mutations);
    assert_eq!(first.text().as_deref(), Some("first"));

    first.close();
    let second = dialog.open("second").unwrap();
    assert_eq!(second.text().as_deref(), Some("second"));
}

#[tokio::test(start_paused = true)]
async fn test_copy_acknowledgment_resets_after_duration() {
    let clipboard = MemoryClipboard::new();
    let (doc, dialog) = setup(clipboard.clone());
    let handle = dialog.open("X").unwrap();
    let copy_button = handle.elements().copy_button;

    assert_eq!(handle.copy().await, CopyOutcome::Copied);
    assert_eq!(clipboard.contents().as_deref(), Some("X"));
    assert_eq!(doc.text(copy_button).as_deref(), Some("Copied!"));
    assert_eq!(handle.state(), DialogState::Copied);
    assert!(handle.has_pending_reset());

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert_eq!(doc.text(copy_button).as_deref(), Some("Copied!"));

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(doc.text(copy_button).as_deref(), Some("Copy"));
    assert_eq!(handle.state(), DialogState::Open);
    assert!(!handle.has_pending_reset());
}

#[tokio::test(start_paused = true)]
async fn test_close_cancels_pending_reset() {
    let (doc, dialog) = setup(MemoryClipboard::new());
    let handle = dialog.open("X").unwrap();

    assert_eq!(handle.copy().await, CopyOutcome::Copied);
    tokio::time::sleep(Duration::from_millis(500)).await;
    handle.close();

    assert!(!handle.has_pending_reset());
    let mutations = doc.mutation_count();

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(doc.mutation_count(), mutations);
    assert_eq!(doc.element_count(), 0);
    assert_eq!(handle.state(), DialogState::Closed);
}

#[tokio::test]
async fn test_clipboard_failure_keeps_dialog_open() {
    let clipboard = MemoryClipboard::denied();
    let (doc, dialog) = setup(clipboard.clone());
    let handle = dialog.open("X").unwrap();
    let el = *handle.elements();

    assert_eq!(handle.copy().await, CopyOutcome::Fallback);
    assert_eq!(handle.state(), DialogState::Open);
    assert_eq!(doc.text(el.copy_button).as_deref(), Some("Copy"));
    assert!(doc.is_selected(el.text));
    assert!(!handle.has_pending_reset());
    assert_eq!(clipboard.contents(), None);

    // Permission granted later: a retry succeeds.
    clipboard.deny(false);
    assert_eq!(handle.copy().await, CopyOutcome::Copied);
}

#[tokio::test(start_paused = true)]
async fn test_close_during_clipboard_write() {
    let clipboard = MemoryClipboard::new().with_delay(Duration::from_millis(300));
    let (doc, dialog) = setup(clipboard);
    let handle = dialog.open("X").unwrap();

    let copier = handle.clone();
    let copy = tokio::spawn(async move { copier.copy().await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.close();
    let mutations = doc.mutation_count();

    assert_eq!(copy.await.unwrap(), CopyOutcome::Closed);
    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(doc.mutation_count(), mutations);
    assert!(!dialog.is_open());
}

#[tokio::test]
async fn test_copy_after_close_is_noop() {
    let clipboard = MemoryClipboard::new();
    let (_, dialog) = setup(clipboard.clone());
    let handle = dialog.open("X").unwrap();
    handle.close();

    assert_eq!(handle.copy().await, CopyOutcome::Closed);
    assert_eq!(clipboard.contents(), None);
}

#[tokio::test(start_paused = true)]
async fn test_custom_labels_and_duration() {
    let config = DialogConfig::chinese().with_ack_duration(Duration::from_millis(500));
    let doc = Arc::new(MemoryDocument::for_url("http://example.com/", "").unwrap());
    let dialog =
        InspectionDialog::new(doc.clone(), Arc::new(MemoryClipboard::new())).with_config(config);

    let handle = dialog.open("{}").unwrap();
    let el = *handle.elements();
    assert_eq!(doc.text(el.title).as_deref(), Some("Cookies 数据"));
    assert_eq!(doc.text(el.close_button).as_deref(), Some("关闭"));

    handle.copy().await;
    assert_eq!(doc.text(el.copy_button).as_deref(), Some("已复制!"));
    tokio::time::sleep(Duration::from_millis(501)).await;
    assert_eq!(doc.text(el.copy_button).as_deref(), Some("复制"));
}

#[tokio::test]
async fn test_trigger_cycle() {
    let clipboard = MemoryClipboard::new();
    let (doc, dialog) = setup(clipboard.clone());
    let trigger = Trigger::mount(dialog).unwrap();

    let handle = trigger.activate().unwrap();
    assert_eq!(handle.copy().await, CopyOutcome::Copied);

    let copied = clipboard.contents().unwrap();
    let value: serde_json::Value = serde_json::from_str(&copied).unwrap();
    assert_eq!(value["cookies"][0]["name"], "a");
    assert_eq!(value["cookies"][1]["value"], "2");
    assert_eq!(value["cookies"][0]["domain"], "example.com");
    assert_eq!(value["origins"], serde_json::json!([]));

    handle.close();
    // Only the trigger button remains.
    assert_eq!(doc.body_children(), vec![trigger.button()]);
    assert_eq!(doc.element_count(), 1);
}

#[tokio::test]
async fn test_trigger_reads_current_cookies() {
    let (doc, dialog) = setup(MemoryClipboard::new());
    let trigger = Trigger::mount(dialog).unwrap();

    doc.set_cookie("fresh=yes");
    let handle = trigger.activate().unwrap();
    let text = handle.text().unwrap();
    assert!(text.contains("\"fresh\""));
    assert!(!text.contains("\"a\""));
}

#[test]
fn test_copy_without_time_driver_skips_acknowledgment() {
    let clipboard = MemoryClipboard::new();
    let (doc, dialog) = setup(clipboard.clone());
    let handle = dialog.open("X").unwrap();

    // Runtime built without `enable_time()`.
    let rt = tokio::runtime::Builder::new_multi_thread().build().unwrap();
    assert_eq!(rt.block_on(handle.copy()), CopyOutcome::Unacknowledged);

    assert_eq!(clipboard.contents().as_deref(), Some("X"));
    assert_eq!(handle.state(), DialogState::Open);
    assert_eq!(doc.text(handle.elements().copy_button).as_deref(), Some("Copy"));
    assert!(!handle.has_pending_reset());

    // The dialog still closes cleanly afterwards.
    handle.close();
    assert_eq!(doc.element_count(), 0);
}

#[test]
fn test_copy_without_runtime_skips_acknowledgment() {
    let clipboard = MemoryClipboard::new();
    let (doc, dialog) = setup(clipboard.clone());
    let handle = dialog.open("X").unwrap();

    assert_eq!(futures::executor::block_on(handle.copy()), CopyOutcome::Unacknowledged);
    assert_eq!(clipboard.contents().as_deref(), Some("X"));
    assert_eq!(handle.state(), DialogState::Open);
    assert_eq!(doc.text(handle.elements().copy_button).as_deref(), Some("Copy"));
}
