//! # cookiesnap
//!
//! Capture the cookies a page can see as a portable session snapshot and
//! inspect it in a modal dialog.
//!
//! `cookiesnap` reads the document-level cookie string, rebuilds it in the
//! storage-state layout browser automation tools import (`cookies` + `origins`),
//! and shows the JSON in a dialog with copy and close actions.
//!
//! ## Features
//!
//! - **Snapshot Builder**: total parser over any cookie string, last-write-wins on duplicate names
//! - **Export/Import**: pretty JSON with a stable key order, round-trips through serde
//! - **Inspection Dialog**: single-instance modal with a timed, cancellable copy acknowledgment
//! - **Host Seams**: `Document` and `Clipboard` traits with in-memory implementations
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use cookiesnap::dialog::{InspectionDialog, MemoryClipboard};
//! use cookiesnap::dom::MemoryDocument;
//! use cookiesnap::trigger::Trigger;
//!
//! let doc = Arc::new(MemoryDocument::for_url("https://example.com/", "sid=abc; theme=dark").unwrap());
//! let dialog = InspectionDialog::new(doc, Arc::new(MemoryClipboard::new()));
//! let trigger = Trigger::mount(dialog)?;
//!
//! let handle = trigger.activate()?;
//! assert!(handle.text().unwrap().contains("\"sid\""));
//! handle.close();
//! # Ok::<(), cookiesnap::base::snaperror::SnapError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error type
//! - [`cookies`] - Cookie parsing and session snapshots
//! - [`dom`] - Host document abstraction
//! - [`dialog`] - Clipboard, config and the inspection dialog
//! - [`trigger`] - The capture button
//!
//! ## Limits
//!
//! Only what the document-level cookie API exposes is captured: HttpOnly
//! cookies are invisible, and domain, path, expiry and SameSite are
//! reconstructed rather than read.

pub mod base;
pub mod cookies;
pub mod dialog;
pub mod dom;
pub mod trigger;
