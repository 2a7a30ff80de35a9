//! Multi-step identity-verification workflow.
//!
//! The flow walks a user through five screens: home, document photos,
//! fingerprint check, facial check, and a registration form scored from the
//! CPF. Each step tracks an attempted/passed status; forward navigation is
//! unlocked only by a passing Verify.
//!
//! The verification *method* for the biometric steps is modular — the flow
//! specifies *that* a step must pass, not *how*. Two realizations ship: one
//! delegating to the platform biometric prompt, one fully simulated behind a
//! two-stage selection dialog.
//!
//! Everything here is demo logic: the score is drawn from a band selected by
//! the CPF's first digit, and phone "validity" is last-digit parity. None of
//! it is real fraud detection.

pub mod dialog;
pub mod document;
pub mod error;
pub mod flow;
pub mod form;
pub mod method;
pub mod orchestrator;
pub mod score;
pub mod state;
pub mod validators;

pub use dialog::{DialogCoordinator, DialogEvent, DialogSelection, DialogStage, SourceChoice};
pub use document::DocumentVerifier;
pub use error::VerificationError;
pub use flow::ScreenFlow;
pub use form::{FormOutcome, FormVerifier};
pub use method::{BiometricMethod, ChoiceBiometric, MethodContext, PromptBiometric};
pub use orchestrator::{FlowEvent, FlowOrchestrator};
pub use score::{ScoreEngine, SystemRandom};
pub use state::StepStates;
