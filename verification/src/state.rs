//! Per-step status tracking for the whole flow.

use antifraude_types::{Step, StepStatus};
use serde::{Deserialize, Serialize};

/// One [`StepStatus`] per verification step.
///
/// Statuses live for the whole process; nothing resets them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepStates {
    document: StepStatus,
    biometric: StepStatus,
    facial: StepStatus,
    form: StepStatus,
}

impl StepStates {
    pub fn get(&self, step: Step) -> StepStatus {
        match step {
            Step::Document => self.document,
            Step::Biometric => self.biometric,
            Step::Facial => self.facial,
            Step::Form => self.form,
        }
    }

    /// Record a Verify outcome for one step.
    pub fn record(&mut self, step: Step, passed: bool) {
        let status = match step {
            Step::Document => &mut self.document,
            Step::Biometric => &mut self.biometric,
            Step::Facial => &mut self.facial,
            Step::Form => &mut self.form,
        };
        status.record(passed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_steps_start_locked() {
        let states = StepStates::default();
        for step in [Step::Document, Step::Biometric, Step::Facial, Step::Form] {
            assert!(!states.get(step).attempted);
            assert!(!states.get(step).passed);
        }
    }

    #[test]
    fn recording_one_step_leaves_the_others_alone() {
        let mut states = StepStates::default();
        states.record(Step::Biometric, true);
        assert!(states.get(Step::Biometric).passed);
        assert!(!states.get(Step::Document).attempted);
        assert!(!states.get(Step::Facial).attempted);
        assert!(!states.get(Step::Form).attempted);
    }
}
