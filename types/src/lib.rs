//! Fundamental types for the AntiFraude verification flow.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: form fields, verification steps, screen routes, attachments,
//! score bands, flow parameters, and the capability traits that abstract the
//! host platform (biometric sensor, image picker, randomness).

pub mod attachment;
pub mod capability;
pub mod field;
pub mod params;
pub mod random;
pub mod route;
pub mod score;
pub mod step;

pub use attachment::{AttachmentHandle, AttachmentState};
pub use capability::{AuthOutcome, BiometricCapability, CanAuthenticate, ImagePicker};
pub use field::{FieldKind, FieldValidationResult, FormFields};
pub use params::FlowParams;
pub use random::RandomSource;
pub use route::{RouteParseError, ScreenRoute};
pub use score::{ScoreBand, ScoreColor, ScoreResult, Severity};
pub use step::{Step, StepStatus};
