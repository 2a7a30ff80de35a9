//! Document step — both photos must be attached.

use crate::error::VerificationError;
use antifraude_types::AttachmentState;

/// Message shown when document verification passes.
pub const DOCUMENT_VALID_MESSAGE: &str = "Documento válido.";

pub struct DocumentVerifier;

impl DocumentVerifier {
    /// Pass iff both the face photo and the document photo are attached.
    ///
    /// The two failure shapes carry distinct messages: nothing attached at
    /// all, or exactly one photo missing.
    pub fn verify(&self, attachments: &AttachmentState) -> Result<(), VerificationError> {
        if attachments.both_present() {
            Ok(())
        } else if attachments.none_present() {
            Err(VerificationError::NoAttachments)
        } else {
            Err(VerificationError::AttachmentMissing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use antifraude_types::AttachmentHandle;

    #[test]
    fn no_attachments_has_its_own_message() {
        let err = DocumentVerifier
            .verify(&AttachmentState::default())
            .unwrap_err();
        assert_eq!(err, VerificationError::NoAttachments);
        assert_eq!(
            err.to_string(),
            "Documento inválido: Nenhuma imagem anexada."
        );
    }

    #[test]
    fn one_attachment_is_still_invalid() {
        let state = AttachmentState {
            face_photo: Some(AttachmentHandle::new("content://face")),
            document_photo: None,
        };
        assert_eq!(
            DocumentVerifier.verify(&state),
            Err(VerificationError::AttachmentMissing)
        );
    }

    #[test]
    fn both_attachments_pass() {
        let state = AttachmentState {
            face_photo: Some(AttachmentHandle::new("content://face")),
            document_photo: Some(AttachmentHandle::new("content://doc")),
        };
        assert_eq!(DocumentVerifier.verify(&state), Ok(()));
    }
}
