//! Interactive inspection of a serialized snapshot.
//!
//! [`InspectionDialog::open`] injects a modal into the host [`Document`](crate::dom::Document):
//! a dimming overlay, a title, a selectable text area holding the snapshot, and
//! copy/close buttons. The returned [`DialogHandle`] drives the two actions.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use cookiesnap::dialog::{CopyOutcome, InspectionDialog, MemoryClipboard};
//! use cookiesnap::dom::MemoryDocument;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), cookiesnap::base::snaperror::SnapError> {
//! let doc = Arc::new(MemoryDocument::for_url("https://example.com/", "").unwrap());
//! let dialog = InspectionDialog::new(doc, Arc::new(MemoryClipboard::new()));
//!
//! let handle = dialog.open("{\"cookies\": [], \"origins\": []}")?;
//! assert_eq!(handle.copy().await, CopyOutcome::Copied);
//! handle.close();
//! # Ok(())
//! # }
//! ```

mod clipboard;
mod config;
mod inspection;

pub use clipboard::{Clipboard, ClipboardWrite, MemoryClipboard};
pub use config::{DialogConfig, DEFAULT_ACK_DURATION_MS};
pub use inspection::{CopyOutcome, DialogElements, DialogHandle, DialogState, InspectionDialog};
