use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SnapError {
    // Clipboard Errors
    #[error("Clipboard write denied")]
    ClipboardDenied,
    #[error("Clipboard unavailable")]
    ClipboardUnavailable,
    #[error("Clipboard write failed: {reason}")]
    ClipboardWriteFailed { reason: String },

    // Dialog Errors
    #[error("An inspection dialog is already open")]
    DialogAlreadyOpen,

    // Document Errors
    #[error("No such element: #{0}")]
    NoSuchElement(u64),
    #[error("Element #{child} cannot be inserted under #{parent}")]
    HierarchyRequest { parent: u64, child: u64 },

    // Data Errors
    #[error("Invalid session snapshot: {message}")]
    InvalidSnapshot { message: String },
    #[error("Invalid dialog config: {message}")]
    InvalidConfig { message: String },
    #[error("Serialization failed: {message}")]
    Serialization { message: String },
}

impl SnapError {
    /// Create a clipboard write failure.
    pub fn clipboard_write_failed(reason: impl Into<String>) -> Self {
        SnapError::ClipboardWriteFailed { reason: reason.into() }
    }

    /// Create an invalid snapshot error.
    pub fn invalid_snapshot(message: impl Into<String>) -> Self {
        SnapError::InvalidSnapshot { message: message.into() }
    }

    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        SnapError::InvalidConfig { message: message.into() }
    }

    /// True for every failure a clipboard backend can report.
    pub fn is_clipboard_error(&self) -> bool {
        matches!(
            self,
            SnapError::ClipboardDenied
                | SnapError::ClipboardUnavailable
                | SnapError::ClipboardWriteFailed { .. }
        )
    }
}

impl From<serde_json::Error> for SnapError {
    fn from(err: serde_json::Error) -> Self {
        SnapError::Serialization { message: err.to_string() }
    }
}
