//! Screen flow controller — a current-route pointer over the 5-node graph.

use antifraude_types::{ScreenRoute, Step};

/// Holds the current screen. Jumps are unconditional at this level; the
/// guard on forward progress lives in the per-step Advance enablement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenFlow {
    current: ScreenRoute,
}

impl Default for ScreenFlow {
    fn default() -> Self {
        Self {
            current: ScreenRoute::Home,
        }
    }
}

impl ScreenFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ScreenRoute {
        self.current
    }

    /// Unconditional jump by route name.
    pub fn navigate(&mut self, route: ScreenRoute) {
        self.current = route;
    }

    /// The screen a step's Advance button navigates to.
    pub fn advance_target(step: Step) -> ScreenRoute {
        match step {
            Step::Form => ScreenRoute::Documento,
            Step::Document => ScreenRoute::Biometria,
            Step::Biometric => ScreenRoute::Facial,
            Step::Facial => ScreenRoute::Home,
        }
    }

    /// The step whose Verify/Advance controls live on a screen, if any.
    pub fn step_for(route: ScreenRoute) -> Option<Step> {
        match route {
            ScreenRoute::Home => None,
            ScreenRoute::Documento => Some(Step::Document),
            ScreenRoute::Biometria => Some(Step::Biometric),
            ScreenRoute::Facial => Some(Step::Facial),
            ScreenRoute::Formulario => Some(Step::Form),
        }
    }
}
