//! Host document abstraction.
//!
//! The capture and the dialog never touch a page directly; they go through the
//! [`Document`] trait. [`MemoryDocument`] is the in-memory implementation used
//! for headless runs and tests.
//!
//! # Example
//!
//! ```rust
//! use cookiesnap::dom::{Document, MemoryDocument};
//!
//! let doc = MemoryDocument::for_url("https://example.com/", "sid=abc").unwrap();
//! let el = doc.create_element("div");
//! doc.mount(el).unwrap();
//! assert!(doc.is_attached(el));
//! ```

mod document;
mod memory;

pub use document::{Document, ElementId};
pub use memory::MemoryDocument;
