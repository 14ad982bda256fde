//! The host document seam.

use crate::base::snaperror::SnapError;
use std::fmt;
use url::Url;

/// Handle to an element created through a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    #[inline]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The page everything is injected into.
///
/// Supplies the cookie string and location a capture reads, and the small element
/// API the trigger and dialog need. Methods take `&self` so one document can be
/// shared between the trigger, the dialog and its timer.
///
/// Mutating an element that was removed (or never existed) fails with
/// [`SnapError::NoSuchElement`].
pub trait Document: Send + Sync {
    /// The document-level cookie string (`name=value; name=value`).
    fn cookie(&self) -> String;

    /// The page URL.
    fn location(&self) -> Url;

    /// Create a detached element.
    fn create_element(&self, tag: &str) -> ElementId;

    fn set_text(&self, id: ElementId, text: &str) -> Result<(), SnapError>;

    fn text(&self, id: ElementId) -> Option<String>;

    /// Set the editable value of a form control.
    fn set_value(&self, id: ElementId, value: &str) -> Result<(), SnapError>;

    fn value(&self, id: ElementId) -> Option<String>;

    fn set_style(&self, id: ElementId, property: &str, value: &str) -> Result<(), SnapError>;

    fn style(&self, id: ElementId, property: &str) -> Option<String>;

    /// Append `child` as the last child of `parent`, detaching it from any previous parent.
    fn append_child(&self, parent: ElementId, child: ElementId) -> Result<(), SnapError>;

    /// Append an element to the document body.
    fn mount(&self, id: ElementId) -> Result<(), SnapError>;

    /// Detach an element and drop it together with its subtree. Returns `false`
    /// if the element no longer exists.
    fn remove(&self, id: ElementId) -> bool;

    /// True if the element is reachable from the document body.
    fn is_attached(&self, id: ElementId) -> bool;

    /// Select the contents of a text control.
    fn select(&self, id: ElementId) -> Result<(), SnapError>;

    /// Apply a list of style declarations in order.
    fn apply_styles(&self, id: ElementId, styles: &[(&str, &str)]) -> Result<(), SnapError> {
        for (property, value) in styles {
            self.set_style(id, property, value)?;
        }
        Ok(())
    }
}
