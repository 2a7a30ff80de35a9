//! Error taxonomy for the verification flow.
//!
//! Every variant maps to a user-visible message and/or a disabled Advance
//! control; none is fatal. The `Display` text is the message the user sees.

use antifraude_types::{FieldKind, ScoreBand};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerificationError {
    #[error("CPF inválido")]
    CpfFormatInvalid,

    #[error("{0} é obrigatório")]
    RequiredMissing(FieldKind),

    #[error("Chip Duplicado Inválido")]
    PhoneParityInvalid,

    /// The score landed in a Fail band; surfaces as an invalid CPF even when
    /// the format regex matched.
    #[error("CPF inválido")]
    ScoreBandFail(ScoreBand),

    #[error("Documento inválido: Nenhuma imagem anexada.")]
    NoAttachments,

    #[error("Documento inválido.")]
    AttachmentMissing,

    #[error("Este dispositivo não possui sensor biométrico")]
    BiometricHardwareAbsent,

    #[error("Sensor biométrico indisponível")]
    BiometricHardwareUnavailable,

    #[error("Nenhuma digital registrada no dispositivo")]
    BiometricNotEnrolled,

    /// Unexpected failure from the platform biometric prompt, caught and
    /// surfaced instead of terminating the flow.
    #[error("Erro na autenticação biométrica ({code}): {message}")]
    BiometricRuntime { code: i32, message: String },
}
