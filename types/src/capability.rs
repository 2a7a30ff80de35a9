//! Capability traits for the host platform collaborators.
//!
//! The flow consumes these; it never implements them. Real implementations
//! wrap the platform biometric prompt and image picker. The `nullables`
//! crate provides deterministic doubles for tests.

use crate::attachment::AttachmentHandle;

/// Whether the device can run a biometric prompt at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanAuthenticate {
    Success,
    /// The device has no biometric sensor.
    NoHardware,
    /// The sensor exists but is currently unavailable.
    HardwareUnavailable,
    /// No biometric credential is enrolled on the device.
    NoneEnrolled,
}

/// Result of one biometric prompt invocation.
///
/// The platform delivers this via an asynchronous callback; the flow models
/// it as a synchronous return on the single logical update thread, applied to
/// the step status exactly once per invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    Succeeded,
    Failed,
    Error { code: i32, message: String },
}

/// The platform biometric prompt.
pub trait BiometricCapability {
    fn can_authenticate(&self) -> CanAuthenticate;

    /// Show the prompt and wait for its outcome.
    fn authenticate(&self) -> AuthOutcome;
}

/// The platform image picker. Fire-and-forget; the result is delivered once,
/// `None` when the user dismissed the picker.
pub trait ImagePicker {
    fn pick_image(&self, mime_filter: &str) -> Option<AttachmentHandle>;
}
