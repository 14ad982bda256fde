//! The floating "get cookies" button.
//!
//! Activation runs one capture cycle: read the page, build a snapshot,
//! serialize it and open the inspection dialog.

use crate::base::snaperror::SnapError;
use crate::cookies::snapshot::{PageContext, SessionSnapshot};
use crate::dialog::{DialogHandle, InspectionDialog};
use crate::dom::ElementId;

const TRIGGER_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "10px"),
    ("right", "10px"),
    ("z-index", "9999"),
    ("padding", "8px 12px"),
    ("background-color", "#4CAF50"),
    ("color", "white"),
    ("border", "none"),
    ("border-radius", "4px"),
    ("cursor", "pointer"),
];

pub struct Trigger {
    dialog: InspectionDialog,
    button: ElementId,
}

impl Trigger {
    /// Inject the button into the dialog's document.
    pub fn mount(dialog: InspectionDialog) -> Result<Self, SnapError> {
        let document = dialog.document();
        let button = document.create_element("button");

        let mounted = document
            .set_text(button, &dialog.config().trigger_label)
            .and_then(|_| document.apply_styles(button, TRIGGER_STYLE))
            .and_then(|_| document.mount(button));
        if let Err(e) = mounted {
            document.remove(button);
            return Err(e);
        }

        Ok(Self { dialog, button })
    }

    pub fn button(&self) -> ElementId {
        self.button
    }

    pub fn dialog(&self) -> &InspectionDialog {
        &self.dialog
    }

    /// Capture the page's cookies and show them.
    ///
    /// Fails with [`SnapError::DialogAlreadyOpen`] while a previous dialog is
    /// still open.
    pub fn activate(&self) -> Result<DialogHandle, SnapError> {
        if self.dialog.is_open() {
            return Err(SnapError::DialogAlreadyOpen);
        }

        let page = PageContext::capture(self.dialog.document().as_ref());
        let snapshot = SessionSnapshot::from_page(&page);
        let json = snapshot.to_json_pretty()?;

        tracing::debug!(hostname = %page.hostname, cookies = snapshot.len(), "trigger activated");
        self.dialog.open(&json)
    }

    /// Remove the button. An open dialog is left to its handle.
    pub fn unmount(self) -> InspectionDialog {
        self.dialog.document().remove(self.button);
        self.dialog
    }
}
