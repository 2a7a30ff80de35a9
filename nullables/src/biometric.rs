//! Nullable biometric prompt — scripted authentication outcomes.

use antifraude_types::{AuthOutcome, BiometricCapability, CanAuthenticate};
use std::sync::Mutex;

/// A deterministic biometric capability for testing.
///
/// Reports a fixed availability status; when available, prompt invocations
/// return pre-configured outcomes in order (repeating the last one).
pub struct NullBiometric {
    status: CanAuthenticate,
    outcomes: Mutex<Vec<AuthOutcome>>,
    index: Mutex<usize>,
}

impl NullBiometric {
    pub fn new(status: CanAuthenticate, outcomes: Vec<AuthOutcome>) -> Self {
        Self {
            status,
            outcomes: Mutex::new(outcomes),
            index: Mutex::new(0),
        }
    }

    /// Every prompt succeeds.
    pub fn succeeding() -> Self {
        Self::new(CanAuthenticate::Success, vec![AuthOutcome::Succeeded])
    }

    /// Every prompt fails (wrong finger).
    pub fn failing() -> Self {
        Self::new(CanAuthenticate::Success, vec![AuthOutcome::Failed])
    }

    /// Every prompt errors out with the given code and message.
    pub fn erroring(code: i32, message: impl Into<String>) -> Self {
        Self::new(
            CanAuthenticate::Success,
            vec![AuthOutcome::Error {
                code,
                message: message.into(),
            }],
        )
    }

    /// Hardware is not usable; the prompt is never shown.
    pub fn unavailable(status: CanAuthenticate) -> Self {
        Self::new(status, Vec::new())
    }
}

impl BiometricCapability for NullBiometric {
    fn can_authenticate(&self) -> CanAuthenticate {
        self.status
    }

    fn authenticate(&self) -> AuthOutcome {
        let outcomes = self.outcomes.lock().unwrap();
        let mut idx = self.index.lock().unwrap();
        let current = (*idx).min(outcomes.len().saturating_sub(1));
        *idx += 1;
        outcomes
            .get(current)
            .cloned()
            .unwrap_or(AuthOutcome::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_play_in_order_then_repeat_the_last() {
        let prompt = NullBiometric::new(
            CanAuthenticate::Success,
            vec![AuthOutcome::Failed, AuthOutcome::Succeeded],
        );
        assert_eq!(prompt.authenticate(), AuthOutcome::Failed);
        assert_eq!(prompt.authenticate(), AuthOutcome::Succeeded);
        assert_eq!(prompt.authenticate(), AuthOutcome::Succeeded);
    }

    #[test]
    fn unavailable_hardware_reports_its_status() {
        let prompt = NullBiometric::unavailable(CanAuthenticate::NoneEnrolled);
        assert_eq!(prompt.can_authenticate(), CanAuthenticate::NoneEnrolled);
    }
}
