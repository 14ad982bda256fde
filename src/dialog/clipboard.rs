//! System clipboard abstraction.

use crate::base::snaperror::SnapError;
use futures::future::{BoxFuture, FutureExt};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Alias for the `Future` returned by a clipboard write.
pub type ClipboardWrite = BoxFuture<'static, Result<(), SnapError>>;

/// Trait for writing text to the system clipboard.
///
/// Writes may be asynchronous and may fail (permission denied, no clipboard).
/// Returns boxed futures for trait object compatibility.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: String) -> ClipboardWrite;
}

/// In-memory clipboard.
///
/// Clones share the same contents, so a test can keep one handle and give
/// another to the dialog.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    denied: Arc<AtomicBool>,
    delay: Option<Duration>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write with [`SnapError::ClipboardDenied`].
    pub fn denied() -> Self {
        let clipboard = Self::default();
        clipboard.deny(true);
        clipboard
    }

    /// Complete each write only after `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn deny(&self, denied: bool) {
        self.denied.store(denied, Ordering::SeqCst);
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: String) -> ClipboardWrite {
        let contents = Arc::clone(&self.contents);
        let denied = Arc::clone(&self.denied);
        let delay = self.delay;

        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            if denied.load(Ordering::SeqCst) {
                return Err(SnapError::ClipboardDenied);
            }
            *contents.lock() = Some(text);
            Ok(())
        }
        .boxed()
    }
}
