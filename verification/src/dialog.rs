//! Two-stage choice dialog used by the biometric and facial steps.
//!
//! Stage 1 asks "use existing or add new"; adding new is unsupported and ends
//! the sequence with a notice. Using an existing credential opens Stage 2, a
//! list of exactly two named options; selecting one closes the dialog and
//! hands the value to the step's state machine. Dismissing either stage
//! returns to idle with no side effects.

use antifraude_types::FlowParams;
use serde::{Deserialize, Serialize};

/// Where the dialog sequence currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogStage {
    #[default]
    None,
    ChoosingSource,
    ChoosingValue,
}

/// Stage 1 options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceChoice {
    UseExisting,
    AddNew,
}

/// Transient dialog state; destroyed when the dialog is dismissed or a value
/// is chosen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogSelection {
    pub stage: DialogStage,
    pub chosen_value: Option<String>,
}

/// What a dialog interaction produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogEvent {
    /// "Add new" was chosen — terminal, nothing changed.
    NotSupported(String),
    /// Stage 2 closed with a selection.
    ValueChosen(String),
}

/// Drives one step's dialog sequence.
pub struct DialogCoordinator {
    selection: DialogSelection,
    options: [String; 2],
    not_supported_notice: String,
}

impl DialogCoordinator {
    pub fn new(options: [String; 2], not_supported_notice: impl Into<String>) -> Self {
        Self {
            selection: DialogSelection::default(),
            options,
            not_supported_notice: not_supported_notice.into(),
        }
    }

    /// Coordinator for the fingerprint step.
    pub fn biometric(params: &FlowParams) -> Self {
        Self::new(
            params.biometric_options.clone(),
            "Adicionar nova digital não suportado",
        )
    }

    /// Coordinator for the facial step.
    pub fn facial(params: &FlowParams) -> Self {
        Self::new(
            params.facial_options.clone(),
            "Adicionar nova facial não suportado",
        )
    }

    pub fn selection(&self) -> &DialogSelection {
        &self.selection
    }

    pub fn stage(&self) -> DialogStage {
        self.selection.stage
    }

    /// The Stage 2 option labels.
    pub fn options(&self) -> &[String; 2] {
        &self.options
    }

    /// Open Stage 1. No-op if a sequence is already in progress.
    pub fn open(&mut self) {
        if self.selection.stage == DialogStage::None {
            self.selection = DialogSelection {
                stage: DialogStage::ChoosingSource,
                chosen_value: None,
            };
        }
    }

    /// Answer Stage 1. Returns `None` when the dialog is not at Stage 1.
    pub fn choose_source(&mut self, choice: SourceChoice) -> Option<DialogEvent> {
        if self.selection.stage != DialogStage::ChoosingSource {
            return None;
        }
        match choice {
            SourceChoice::AddNew => {
                self.selection = DialogSelection::default();
                Some(DialogEvent::NotSupported(self.not_supported_notice.clone()))
            }
            SourceChoice::UseExisting => {
                self.selection.stage = DialogStage::ChoosingValue;
                None
            }
        }
    }

    /// Pick one of the two Stage 2 options by index. Returns `None` when the
    /// dialog is not at Stage 2 or the index is out of range.
    pub fn choose_value(&mut self, index: usize) -> Option<DialogEvent> {
        if self.selection.stage != DialogStage::ChoosingValue {
            return None;
        }
        let value = self.options.get(index)?.clone();
        self.selection = DialogSelection::default();
        Some(DialogEvent::ValueChosen(value))
    }

    /// Close the dialog at either stage without choosing.
    pub fn dismiss(&mut self) {
        self.selection = DialogSelection::default();
    }
}
