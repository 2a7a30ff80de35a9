//! Verification steps and their attempt/pass status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An independent verification stage in the flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Document,
    Biometric,
    Facial,
    Form,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Document => "documento",
            Step::Biometric => "biometria",
            Step::Facial => "facial",
            Step::Form => "formulario",
        };
        write!(f, "{name}")
    }
}

/// Whether a step has been attempted and whether the last attempt passed.
///
/// Created as `{attempted: false, passed: false}` at flow start and mutated
/// only by that step's Verify action. Re-attempting overwrites the previous
/// outcome; no history is kept. There is no explicit reset — the status lives
/// for the whole process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepStatus {
    pub attempted: bool,
    pub passed: bool,
}

impl StepStatus {
    /// Record the outcome of a Verify action.
    pub fn record(&mut self, passed: bool) {
        self.attempted = true;
        self.passed = passed;
    }
}
