//! The inspection dialog.
//!
//! States: `Closed -> Open -> Copied -> Open -> Closed`. `Copied` is a timed
//! sub-state of `Open`: the copy button shows the acknowledgment label until the
//! reset timer fires. The timer is owned by the dialog and aborted on close.

use super::clipboard::Clipboard;
use super::config::DialogConfig;
use crate::base::snaperror::SnapError;
use crate::dom::{Document, ElementId};
use parking_lot::Mutex;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

const OVERLAY_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("background-color", "rgba(0, 0, 0, 0.5)"),
    ("z-index", "10000"),
];

const PANEL_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "50%"),
    ("left", "50%"),
    ("transform", "translate(-50%, -50%)"),
    ("background-color", "white"),
    ("padding", "20px"),
    ("border-radius", "8px"),
    ("box-shadow", "0 4px 8px rgba(0, 0, 0, 0.2)"),
    ("max-width", "90%"),
    ("width", "800px"),
    ("max-height", "80%"),
    ("overflow", "auto"),
    ("z-index", "10001"),
    ("display", "flex"),
    ("flex-direction", "column"),
];

const TITLE_STYLE: &[(&str, &str)] = &[("margin", "0 0 15px 0")];

const TEXT_STYLE: &[(&str, &str)] = &[
    ("width", "100%"),
    ("min-height", "400px"),
    ("margin-bottom", "15px"),
    ("padding", "8px"),
    ("border", "1px solid #ccc"),
    ("border-radius", "4px"),
    ("resize", "vertical"),
    ("font-family", "monospace"),
    ("font-size", "14px"),
];

const BUTTON_ROW_STYLE: &[(&str, &str)] =
    &[("display", "flex"), ("justify-content", "space-between")];

const BUTTON_STYLE: &[(&str, &str)] = &[
    ("padding", "8px 16px"),
    ("color", "white"),
    ("border", "none"),
    ("border-radius", "4px"),
    ("cursor", "pointer"),
];

const COPY_COLOR: &str = "#4CAF50";
const CLOSE_COLOR: &str = "#f44336";

/// Lifecycle state of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Open,
    /// Open, with the copy acknowledgment showing.
    Copied,
    Closed,
}

/// Result of a copy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Text written; acknowledgment shown.
    Copied,
    /// Text written, but no timer could be armed to reset an acknowledgment, so
    /// none is shown.
    Unacknowledged,
    /// Clipboard write failed; the text is left selected for a manual copy.
    Fallback,
    /// The dialog was closed before or during the copy. Nothing was changed.
    Closed,
}

/// Elements injected by [`InspectionDialog::open`]. All of them live under `overlay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogElements {
    pub overlay: ElementId,
    pub panel: ElementId,
    pub title: ElementId,
    pub text: ElementId,
    pub buttons: ElementId,
    pub copy_button: ElementId,
    pub close_button: ElementId,
}

/// Opens inspection dialogs on a document, at most one at a time.
pub struct InspectionDialog {
    document: Arc<dyn Document>,
    clipboard: Arc<dyn Clipboard>,
    config: Arc<DialogConfig>,
    slot: Arc<AtomicBool>,
}

impl InspectionDialog {
    pub fn new(document: Arc<dyn Document>, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            document,
            clipboard,
            config: Arc::new(DialogConfig::default()),
            slot: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_config(mut self, config: DialogConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    pub fn document(&self) -> &Arc<dyn Document> {
        &self.document
    }

    /// True while a dialog opened here has not been closed.
    pub fn is_open(&self) -> bool {
        self.slot.load(Ordering::SeqCst)
    }

    /// Inject the dialog showing `text`.
    ///
    /// Fails with [`SnapError::DialogAlreadyOpen`] while another dialog from this
    /// instance is open; the open dialog is left untouched.
    pub fn open(&self, text: &str) -> Result<DialogHandle, SnapError> {
        if self
            .slot
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("inspection dialog already open, rejecting open");
            return Err(SnapError::DialogAlreadyOpen);
        }

        let elements = match render(self.document.as_ref(), &self.config, text) {
            Ok(elements) => elements,
            Err(e) => {
                self.slot.store(false, Ordering::SeqCst);
                return Err(e);
            }
        };

        tracing::debug!(overlay = %elements.overlay, bytes = text.len(), "inspection dialog opened");

        Ok(DialogHandle {
            shared: Arc::new(DialogShared {
                document: Arc::clone(&self.document),
                clipboard: Arc::clone(&self.clipboard),
                config: Arc::clone(&self.config),
                slot: Arc::clone(&self.slot),
                elements,
                inner: Mutex::new(DialogInner {
                    state: DialogState::Open,
                    reset_timer: None,
                    ack_epoch: 0,
                }),
            }),
        })
    }
}

/// Build the overlay subtree and mount it. Nothing stays behind on failure.
fn render(
    document: &dyn Document,
    config: &DialogConfig,
    text: &str,
) -> Result<DialogElements, SnapError> {
    let overlay = document.create_element("div");
    let built = build_panel(document, config, text, overlay).and_then(|elements| {
        document.mount(overlay)?;
        Ok(elements)
    });
    if built.is_err() {
        document.remove(overlay);
    }
    built
}

fn build_panel(
    document: &dyn Document,
    config: &DialogConfig,
    text: &str,
    overlay: ElementId,
) -> Result<DialogElements, SnapError> {
    document.apply_styles(overlay, OVERLAY_STYLE)?;

    let panel = child(document, overlay, "div")?;
    document.apply_styles(panel, PANEL_STYLE)?;

    let title = child(document, panel, "h2")?;
    document.set_text(title, &config.title)?;
    document.apply_styles(title, TITLE_STYLE)?;

    let text_area = child(document, panel, "textarea")?;
    document.set_value(text_area, text)?;
    document.apply_styles(text_area, TEXT_STYLE)?;

    let buttons = child(document, panel, "div")?;
    document.apply_styles(buttons, BUTTON_ROW_STYLE)?;

    let copy_button = child(document, buttons, "button")?;
    document.set_text(copy_button, &config.copy_label)?;
    document.apply_styles(copy_button, BUTTON_STYLE)?;
    document.set_style(copy_button, "background-color", COPY_COLOR)?;

    let close_button = child(document, buttons, "button")?;
    document.set_text(close_button, &config.close_label)?;
    document.apply_styles(close_button, BUTTON_STYLE)?;
    document.set_style(close_button, "background-color", CLOSE_COLOR)?;

    Ok(DialogElements {
        overlay,
        panel,
        title,
        text: text_area,
        buttons,
        copy_button,
        close_button,
    })
}

fn child(document: &dyn Document, parent: ElementId, tag: &str) -> Result<ElementId, SnapError> {
    let id = document.create_element(tag);
    if let Err(e) = document.append_child(parent, id) {
        document.remove(id);
        return Err(e);
    }
    Ok(id)
}

struct DialogInner {
    state: DialogState,
    reset_timer: Option<JoinHandle<()>>,
    // Bumped on every acknowledgment so a stale timer cannot revert a newer one.
    ack_epoch: u64,
}

struct DialogShared {
    document: Arc<dyn Document>,
    clipboard: Arc<dyn Clipboard>,
    config: Arc<DialogConfig>,
    slot: Arc<AtomicBool>,
    elements: DialogElements,
    inner: Mutex<DialogInner>,
}

impl DialogShared {
    /// Returns `false` if the dialog was already closed.
    fn teardown(&self) -> bool {
        let mut inner = self.inner.lock();
        if inner.state == DialogState::Closed {
            return false;
        }
        inner.state = DialogState::Closed;
        if let Some(timer) = inner.reset_timer.take() {
            timer.abort();
        }
        self.document.remove(self.elements.overlay);
        self.slot.store(false, Ordering::SeqCst);
        true
    }

    fn reset_ack(&self, epoch: u64) {
        let mut inner = self.inner.lock();
        if inner.state != DialogState::Copied || inner.ack_epoch != epoch {
            return;
        }
        inner.state = DialogState::Open;
        inner.reset_timer = None;
        if let Err(e) = self
            .document
            .set_text(self.elements.copy_button, &self.config.copy_label)
        {
            tracing::debug!(error = %e, "failed to restore copy label");
        }
        tracing::trace!("copy acknowledgment reset");
    }
}

impl Drop for DialogShared {
    fn drop(&mut self) {
        if self.teardown() {
            tracing::debug!("inspection dialog dropped while open, torn down");
        }
    }
}

/// A live dialog.
///
/// Cheap to clone; the copy and close controls each hold a clone. The dialog is
/// torn down by [`close`](Self::close) or when the last clone is dropped.
#[derive(Clone)]
#[must_use = "dropping the last handle closes the dialog"]
pub struct DialogHandle {
    shared: Arc<DialogShared>,
}

impl DialogHandle {
    pub fn state(&self) -> DialogState {
        self.shared.inner.lock().state
    }

    pub fn is_open(&self) -> bool {
        self.state() != DialogState::Closed
    }

    pub fn elements(&self) -> &DialogElements {
        &self.shared.elements
    }

    /// Current contents of the text surface, including user edits.
    pub fn text(&self) -> Option<String> {
        self.shared.document.value(self.shared.elements.text)
    }

    /// True while an acknowledgment reset is scheduled and has not run.
    pub fn has_pending_reset(&self) -> bool {
        self.shared
            .inner
            .lock()
            .reset_timer
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }

    /// Copy the text surface to the clipboard.
    ///
    /// Never fails: clipboard errors become [`CopyOutcome::Fallback`]. The
    /// acknowledgment reset runs on the current Tokio runtime and needs its time
    /// driver; without either the text is still copied, the label is left alone
    /// and [`CopyOutcome::Unacknowledged`] is returned.
    pub async fn copy(&self) -> CopyOutcome {
        let shared = &self.shared;

        let state = shared.inner.lock().state;
        if state == DialogState::Closed {
            return CopyOutcome::Closed;
        }

        // Keep the text highlighted so a failed write still leaves a manual copy path.
        if let Err(e) = shared.document.select(shared.elements.text) {
            tracing::debug!(error = %e, "failed to select dialog text");
        }
        let Some(text) = shared.document.value(shared.elements.text) else {
            return CopyOutcome::Closed;
        };

        let written = shared.clipboard.write_text(text).await;

        let mut inner = shared.inner.lock();
        if inner.state == DialogState::Closed {
            tracing::debug!("dialog closed during clipboard write");
            return CopyOutcome::Closed;
        }
        if let Err(e) = written {
            tracing::debug!(error = %e, "clipboard write failed, text left selected");
            return CopyOutcome::Fallback;
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                tracing::warn!("no Tokio runtime, skipping copy acknowledgment");
                return CopyOutcome::Unacknowledged;
            }
        };

        // Arm the timer before touching the label: creating a `Sleep` panics when
        // the runtime was built without its time driver.
        let delay = shared.config.ack_duration();
        let sleep = {
            let _guard = runtime.enter();
            match panic::catch_unwind(|| tokio::time::sleep(delay)) {
                Ok(sleep) => sleep,
                Err(_) => {
                    tracing::warn!("Tokio timers disabled, skipping copy acknowledgment");
                    return CopyOutcome::Unacknowledged;
                }
            }
        };

        if let Some(previous) = inner.reset_timer.take() {
            previous.abort();
        }
        if let Err(e) = shared
            .document
            .set_text(shared.elements.copy_button, &shared.config.copied_label)
        {
            tracing::debug!(error = %e, "failed to show copy acknowledgment");
        }
        inner.state = DialogState::Copied;
        inner.ack_epoch += 1;

        let epoch = inner.ack_epoch;
        let weak = Arc::downgrade(shared);
        inner.reset_timer = Some(runtime.spawn(async move {
            sleep.await;
            if let Some(shared) = weak.upgrade() {
                shared.reset_ack(epoch);
            }
        }));

        CopyOutcome::Copied
    }

    /// Remove every injected element and cancel the pending reset. Idempotent.
    pub fn close(&self) {
        if self.shared.teardown() {
            tracing::debug!(overlay = %self.shared.elements.overlay, "inspection dialog closed");
        }
    }
}

impl std::fmt::Debug for DialogHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogHandle")
            .field("elements", &self.shared.elements)
            .field("state", &self.state())
            .finish()
    }
}
