//! Photo attachments delivered by the host image picker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque handle to a picked image (a content URI on the host platform).
///
/// The flow never opens the file; it only tracks presence.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachmentHandle(String);

impl AttachmentHandle {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttachmentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two photos the document step collects.
///
/// Both must be present for document verification to pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentState {
    pub face_photo: Option<AttachmentHandle>,
    pub document_photo: Option<AttachmentHandle>,
}

impl AttachmentState {
    pub fn both_present(&self) -> bool {
        self.face_photo.is_some() && self.document_photo.is_some()
    }

    pub fn none_present(&self) -> bool {
        self.face_photo.is_none() && self.document_photo.is_none()
    }
}
