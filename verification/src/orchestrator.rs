//! Flow orchestrator — connects validators, score engine, dialogs, and the
//! per-step state machine into the five-screen verification flow.
//!
//! All state mutation happens synchronously inside the action methods below,
//! on one logical thread. User-visible toasts come out as [`FlowEvent`]s in a
//! pending queue the host drains with [`FlowOrchestrator::take_events`].

use crate::dialog::{DialogCoordinator, DialogEvent, DialogStage, SourceChoice};
use crate::document::{DocumentVerifier, DOCUMENT_VALID_MESSAGE};
use crate::flow::ScreenFlow;
use crate::form::{FormOutcome, FormVerifier};
use crate::method::{BiometricMethod, MethodContext};
use crate::score::ScoreEngine;
use crate::state::StepStates;
use antifraude_types::{
    AttachmentHandle, AttachmentState, FieldKind, FlowParams, FormFields, ImagePicker, ScreenRoute,
    Step, StepStatus,
};

/// Events emitted by the orchestrator for the host UI to process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowEvent {
    /// Short transient text for the notification surface (a toast).
    Notice(String),
    /// A step's Verify action completed.
    StepVerified { step: Step, passed: bool },
    /// The current route changed.
    Navigated(ScreenRoute),
}

/// The orchestrator ties together all flow subsystems.
pub struct FlowOrchestrator {
    flow: ScreenFlow,
    steps: StepStates,
    scores: ScoreEngine,
    biometric_method: Box<dyn BiometricMethod>,
    facial_method: Box<dyn BiometricMethod>,
    biometric_dialog: DialogCoordinator,
    facial_dialog: DialogCoordinator,
    // Per-screen transient state, discarded when its screen is left.
    fields: FormFields,
    form_outcome: Option<FormOutcome>,
    attachments: AttachmentState,
    document_message: Option<String>,
    biometric_choice: Option<String>,
    facial_choice: Option<String>,
    /// Pending events for the host to process.
    pending_events: Vec<FlowEvent>,
}

impl FlowOrchestrator {
    pub fn new(
        params: FlowParams,
        scores: ScoreEngine,
        biometric_method: Box<dyn BiometricMethod>,
        facial_method: Box<dyn BiometricMethod>,
    ) -> Self {
        Self {
            flow: ScreenFlow::new(),
            steps: StepStates::default(),
            scores,
            biometric_method,
            facial_method,
            biometric_dialog: DialogCoordinator::biometric(&params),
            facial_dialog: DialogCoordinator::facial(&params),
            fields: FormFields::default(),
            form_outcome: None,
            attachments: AttachmentState::default(),
            document_message: None,
            biometric_choice: None,
            facial_choice: None,
            pending_events: Vec::new(),
        }
    }

    /// Demo-mode flow: simulated biometric/facial checks, system randomness.
    pub fn demo() -> Self {
        let params = FlowParams::demo_defaults();
        let biometric = crate::method::ChoiceBiometric::new(
            "digital-simulada",
            params.valid_biometric_choice.clone(),
        );
        let facial =
            crate::method::ChoiceBiometric::new("facial-simulada", params.valid_facial_choice.clone());
        Self::new(
            params,
            ScoreEngine::with_system_random(),
            Box::new(biometric),
            Box::new(facial),
        )
    }

    // ── Navigation ──────────────────────────────────────────────────────

    pub fn current_route(&self) -> ScreenRoute {
        self.flow.current()
    }

    /// Unconditional jump. Transient state owned by the screen being left is
    /// discarded; step statuses persist.
    pub fn navigate(&mut self, route: ScreenRoute) {
        let leaving = self.flow.current();
        if leaving == route {
            return;
        }
        self.discard_screen_state(leaving);
        self.flow.navigate(route);
        tracing::debug!(from = %leaving, to = %route, "navigated");
        self.pending_events.push(FlowEvent::Navigated(route));
    }

    fn discard_screen_state(&mut self, leaving: ScreenRoute) {
        match leaving {
            ScreenRoute::Formulario => {
                self.fields = FormFields::default();
                self.form_outcome = None;
            }
            ScreenRoute::Documento => {
                self.attachments = AttachmentState::default();
                self.document_message = None;
            }
            ScreenRoute::Biometria => {
                self.biometric_choice = None;
                self.biometric_dialog.dismiss();
            }
            ScreenRoute::Facial => {
                self.facial_choice = None;
                self.facial_dialog.dismiss();
            }
            ScreenRoute::Home => {}
        }
    }

    // ── Form screen ─────────────────────────────────────────────────────

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Mutate one field (called on every keystroke). Validation results stay
    /// as they were until the next Verify.
    pub fn edit_field(&mut self, field: FieldKind, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// The last form Verify outcome, if any since entering the screen.
    pub fn form_outcome(&self) -> Option<&FormOutcome> {
        self.form_outcome.as_ref()
    }

    // ── Document screen ─────────────────────────────────────────────────

    pub fn attachments(&self) -> &AttachmentState {
        &self.attachments
    }

    /// Inline message under the document buttons, if a Verify has run.
    pub fn document_message(&self) -> Option<&str> {
        self.document_message.as_deref()
    }

    /// Ask the picker for a face photo. A dismissed picker delivers nothing.
    pub fn pick_face_photo(&mut self, picker: &dyn ImagePicker) {
        self.attach_face_photo(picker.pick_image("image/*"));
    }

    /// Ask the picker for a document photo.
    pub fn pick_document_photo(&mut self, picker: &dyn ImagePicker) {
        self.attach_document_photo(picker.pick_image("image/*"));
    }

    pub fn attach_face_photo(&mut self, handle: Option<AttachmentHandle>) {
        if let Some(handle) = handle {
            self.attachments.face_photo = Some(handle);
            self.document_message = None;
        }
    }

    pub fn attach_document_photo(&mut self, handle: Option<AttachmentHandle>) {
        if let Some(handle) = handle {
            self.attachments.document_photo = Some(handle);
            self.document_message = None;
        }
    }

    // ── Choice dialogs (biometric and facial screens) ───────────────────

    pub fn dialog_stage(&self, step: Step) -> DialogStage {
        match step {
            Step::Biometric => self.biometric_dialog.stage(),
            Step::Facial => self.facial_dialog.stage(),
            _ => DialogStage::None,
        }
    }

    /// The value previously selected for a step, if any.
    pub fn chosen_value(&self, step: Step) -> Option<&str> {
        match step {
            Step::Biometric => self.biometric_choice.as_deref(),
            Step::Facial => self.facial_choice.as_deref(),
            _ => None,
        }
    }

    pub fn open_dialog(&mut self, step: Step) {
        if let Some(dialog) = self.dialog_mut(step) {
            dialog.open();
        }
    }

    pub fn choose_source(&mut self, step: Step, choice: SourceChoice) {
        let Some(dialog) = self.dialog_mut(step) else {
            return;
        };
        if let Some(DialogEvent::NotSupported(notice)) = dialog.choose_source(choice) {
            self.pending_events.push(FlowEvent::Notice(notice));
        }
    }

    pub fn choose_value(&mut self, step: Step, index: usize) {
        let event = match self.dialog_mut(step) {
            Some(dialog) => dialog.choose_value(index),
            None => return,
        };
        if let Some(DialogEvent::ValueChosen(value)) = event {
            self.pending_events
                .push(FlowEvent::Notice(format!("Selecionado: {value}")));
            match step {
                Step::Biometric => self.biometric_choice = Some(value),
                Step::Facial => self.facial_choice = Some(value),
                _ => {}
            }
        }
    }

    pub fn dismiss_dialog(&mut self, step: Step) {
        if let Some(dialog) = self.dialog_mut(step) {
            dialog.dismiss();
        }
    }

    fn dialog_mut(&mut self, step: Step) -> Option<&mut DialogCoordinator> {
        match step {
            Step::Biometric => Some(&mut self.biometric_dialog),
            Step::Facial => Some(&mut self.facial_dialog),
            _ => None,
        }
    }

    // ── Verify and Advance ──────────────────────────────────────────────

    pub fn step_status(&self, step: Step) -> StepStatus {
        self.steps.get(step)
    }

    /// The step's Verify action: recompute pass/fail from current state and
    /// overwrite the step status.
    pub fn verify(&mut self, step: Step) {
        let passed = match step {
            Step::Form => {
                let outcome = FormVerifier.verify(&self.fields, &mut self.scores);
                let passed = outcome.passed;
                self.form_outcome = Some(outcome);
                passed
            }
            Step::Document => match DocumentVerifier.verify(&self.attachments) {
                Ok(()) => {
                    self.document_message = Some(DOCUMENT_VALID_MESSAGE.to_string());
                    true
                }
                Err(err) => {
                    self.document_message = Some(err.to_string());
                    false
                }
            },
            Step::Biometric => self.verify_method(Step::Biometric),
            Step::Facial => self.verify_method(Step::Facial),
        };
        self.steps.record(step, passed);
        tracing::debug!(step = %step, passed, "step verified");
        self.pending_events
            .push(FlowEvent::StepVerified { step, passed });
    }

    fn verify_method(&mut self, step: Step) -> bool {
        let (method, choice) = match step {
            Step::Biometric => (&self.biometric_method, self.biometric_choice.as_deref()),
            Step::Facial => (&self.facial_method, self.facial_choice.as_deref()),
            _ => return false,
        };
        let ctx = MethodContext {
            chosen_value: choice,
        };
        let (passed, notice) = match method.verify(&ctx) {
            Ok(passed) => (passed, step_notice(step, passed).to_string()),
            Err(err) => {
                tracing::warn!(step = %step, error = %err, "biometric method error");
                (false, err.to_string())
            }
        };
        self.pending_events.push(FlowEvent::Notice(notice));
        passed
    }

    /// Whether the step's Advance control is enabled. Required observable
    /// state: false whenever the step has not passed.
    pub fn can_advance(&self, step: Step) -> bool {
        self.steps.get(step).passed
    }

    /// The step's Advance action: navigates to the next screen when the step
    /// passed, otherwise a strict no-op. Returns whether navigation happened.
    pub fn advance(&mut self, step: Step) -> bool {
        if !self.can_advance(step) {
            return false;
        }
        self.navigate(ScreenFlow::advance_target(step));
        true
    }

    /// Drain pending events in emission order.
    pub fn take_events(&mut self) -> Vec<FlowEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

fn step_notice(step: Step, passed: bool) -> &'static str {
    match (step, passed) {
        (Step::Biometric, true) => "Biometria válida!",
        (Step::Biometric, false) => "Biometria inválida!",
        (Step::Facial, true) => "Facial válida!",
        _ => "Facial inválida!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::ChoiceBiometric;
    use antifraude_nullables::NullRandom;

    fn demo_with_score(score: u16) -> FlowOrchestrator {
        let params = FlowParams::demo_defaults();
        FlowOrchestrator::new(
            params.clone(),
            ScoreEngine::new(Box::new(NullRandom::constant(score))),
            Box::new(ChoiceBiometric::new(
                "digital-simulada",
                params.valid_biometric_choice.clone(),
            )),
            Box::new(ChoiceBiometric::new(
                "facial-simulada",
                params.valid_facial_choice.clone(),
            )),
        )
    }

    #[test]
    fn advance_before_any_verify_is_a_no_op() {
        let mut flow = demo_with_score(350);
        flow.navigate(ScreenRoute::Formulario);
        flow.take_events();
        assert!(!flow.can_advance(Step::Form));
        assert!(!flow.advance(Step::Form));
        assert!(!flow.advance(Step::Form));
        assert_eq!(flow.current_route(), ScreenRoute::Formulario);
        assert!(flow.take_events().is_empty());
    }

    #[test]
    fn leaving_the_form_discards_fields_but_keeps_status() {
        let mut flow = demo_with_score(350);
        flow.navigate(ScreenRoute::Formulario);
        flow.edit_field(FieldKind::Cpf, "123.456.789-00");
        flow.edit_field(FieldKind::Name, "Maria");
        flow.edit_field(FieldKind::Address, "Rua A, 1");
        flow.edit_field(FieldKind::Phone, "(11) 91234-5678");
        flow.verify(Step::Form);
        assert!(flow.can_advance(Step::Form));

        flow.navigate(ScreenRoute::Home);
        assert_eq!(flow.fields(), &FormFields::default());
        assert!(flow.form_outcome().is_none());
        // The status survives the screen change.
        assert!(flow.step_status(Step::Form).passed);
    }

    #[test]
    fn verify_overwrites_a_previous_pass() {
        let mut flow = demo_with_score(350);
        flow.navigate(ScreenRoute::Biometria);
        flow.open_dialog(Step::Biometric);
        flow.choose_source(Step::Biometric, SourceChoice::UseExisting);
        flow.choose_value(Step::Biometric, 0);
        flow.verify(Step::Biometric);
        assert!(flow.can_advance(Step::Biometric));

        // Re-select the invalid option and re-verify: pass is overwritten.
        flow.open_dialog(Step::Biometric);
        flow.choose_source(Step::Biometric, SourceChoice::UseExisting);
        flow.choose_value(Step::Biometric, 1);
        flow.verify(Step::Biometric);
        assert!(!flow.can_advance(Step::Biometric));
        assert!(!flow.advance(Step::Biometric));
        assert_eq!(flow.current_route(), ScreenRoute::Biometria);
    }

    #[test]
    fn dialog_actions_on_stepless_screens_do_nothing() {
        let mut flow = demo_with_score(350);
        flow.open_dialog(Step::Form);
        assert_eq!(flow.dialog_stage(Step::Form), DialogStage::None);
        flow.choose_value(Step::Document, 0);
        assert!(flow.take_events().is_empty());
    }
}
