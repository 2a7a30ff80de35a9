//! Flow parameters — the tunable values of the demo verification flow.

use serde::{Deserialize, Serialize};

/// Configuration for the simulated biometric and facial steps.
///
/// The dialog offers exactly two named options per step; only one of them is
/// treated as valid by the verification engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowParams {
    /// The two options listed in the biometric selection dialog.
    pub biometric_options: [String; 2],
    /// The two options listed in the facial selection dialog.
    pub facial_options: [String; 2],
    /// The only biometric choice that verifies successfully.
    pub valid_biometric_choice: String,
    /// The only facial choice that verifies successfully.
    pub valid_facial_choice: String,
}

impl FlowParams {
    /// Demo defaults — the option labels and valid choices the demo ships
    /// with.
    pub fn demo_defaults() -> Self {
        Self {
            biometric_options: ["Biometria 1".to_string(), "Biometria 2".to_string()],
            facial_options: ["Facial 1".to_string(), "Facial 2".to_string()],
            valid_biometric_choice: "Biometria 1".to_string(),
            valid_facial_choice: "Facial 1".to_string(),
        }
    }
}

impl Default for FlowParams {
    fn default() -> Self {
        Self::demo_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_choices_are_listed_options() {
        let params = FlowParams::demo_defaults();
        assert!(params
            .biometric_options
            .contains(&params.valid_biometric_choice));
        assert!(params.facial_options.contains(&params.valid_facial_choice));
    }
}
