//! Modular biometric verification method.
//!
//! The flow does not specify HOW a biometric step passes — only that its
//! Verify action yields pass/fail. Two realizations ship behind the same
//! contract: delegation to the platform prompt (real hardware) and a fully
//! simulated choice check (demo mode).

use crate::error::VerificationError;
use antifraude_types::{AuthOutcome, BiometricCapability, CanAuthenticate};

/// Flow state visible to a method at Verify time.
#[derive(Clone, Copy, Debug, Default)]
pub struct MethodContext<'a> {
    /// The value selected through the two-stage dialog, if any.
    pub chosen_value: Option<&'a str>,
}

/// A pluggable pass/fail check for the biometric and facial steps.
pub trait BiometricMethod {
    /// Human-readable name of this method.
    fn name(&self) -> &str;

    /// Run the check against the current flow state.
    ///
    /// `Ok(false)` is an ordinary failed attempt; `Err` carries a condition
    /// that is surfaced to the user (hardware missing, runtime error).
    fn verify(&self, ctx: &MethodContext<'_>) -> Result<bool, VerificationError>;
}

/// Delegates to the platform biometric prompt.
pub struct PromptBiometric {
    capability: Box<dyn BiometricCapability>,
}

impl PromptBiometric {
    pub fn new(capability: Box<dyn BiometricCapability>) -> Self {
        Self { capability }
    }
}

impl BiometricMethod for PromptBiometric {
    fn name(&self) -> &str {
        "platform-prompt"
    }

    fn verify(&self, _ctx: &MethodContext<'_>) -> Result<bool, VerificationError> {
        match self.capability.can_authenticate() {
            CanAuthenticate::NoHardware => Err(VerificationError::BiometricHardwareAbsent),
            CanAuthenticate::HardwareUnavailable => {
                Err(VerificationError::BiometricHardwareUnavailable)
            }
            CanAuthenticate::NoneEnrolled => Err(VerificationError::BiometricNotEnrolled),
            CanAuthenticate::Success => match self.capability.authenticate() {
                AuthOutcome::Succeeded => Ok(true),
                AuthOutcome::Failed => Ok(false),
                AuthOutcome::Error { code, message } => {
                    Err(VerificationError::BiometricRuntime { code, message })
                }
            },
        }
    }
}

/// Simulated check: passes only when the dialog-selected value equals the
/// single valid option.
pub struct ChoiceBiometric {
    name: String,
    valid_choice: String,
}

impl ChoiceBiometric {
    pub fn new(name: impl Into<String>, valid_choice: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            valid_choice: valid_choice.into(),
        }
    }
}

impl BiometricMethod for ChoiceBiometric {
    fn name(&self) -> &str {
        &self.name
    }

    fn verify(&self, ctx: &MethodContext<'_>) -> Result<bool, VerificationError> {
        Ok(ctx.chosen_value == Some(self.valid_choice.as_str()))
    }
}
