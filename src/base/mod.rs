//! Base types and error handling.
//!
//! - [`SnapError`](snaperror::SnapError): the single error type shared by every module

pub mod snaperror;
