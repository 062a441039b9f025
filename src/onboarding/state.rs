use std::rc::Rc;
use yew::Reducible;

/// Everything the visitor types during onboarding. Lives exactly as long as
/// the portal component is mounted; nothing is persisted anywhere.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisitorInput {
    pub name: String,
    pub business_name: String,
    pub signature: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnboardingStep {
    Identify,
    Welcome,
    Agreement,
    Success,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PortalAction {
    SetName(String),
    SetBusinessName(String),
    SetSignature(String),
    /// Identify -> Welcome. Requires name and business name.
    Submit,
    /// Welcome -> Agreement.
    Proceed,
    /// Agreement -> Success. Requires a typed signature.
    Finalize,
    /// Back to a blank Identify step. Distinct from closing the overlay,
    /// which hides the portal without touching this state.
    Reset,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PortalState {
    pub step: OnboardingStep,
    pub input: VisitorInput,
}

impl Default for PortalState {
    fn default() -> Self {
        Self {
            step: OnboardingStep::Identify,
            input: VisitorInput::default(),
        }
    }
}

impl PortalState {
    pub fn can_submit(&self) -> bool {
        !self.input.name.is_empty() && !self.input.business_name.is_empty()
    }

    pub fn can_finalize(&self) -> bool {
        !self.input.signature.is_empty()
    }

    /// The whole machine. Guarded actions whose guard does not hold leave
    /// the state untouched; the UI disables the corresponding control, so
    /// reaching that branch means a caller skipped the guard.
    fn apply(&self, action: PortalAction) -> PortalState {
        let mut next = self.clone();
        match action {
            PortalAction::SetName(value) => next.input.name = value,
            PortalAction::SetBusinessName(value) => next.input.business_name = value,
            PortalAction::SetSignature(value) => next.input.signature = value,
            PortalAction::Submit => {
                if self.step == OnboardingStep::Identify && self.can_submit() {
                    next.step = OnboardingStep::Welcome;
                }
            }
            PortalAction::Proceed => {
                if self.step == OnboardingStep::Welcome {
                    next.step = OnboardingStep::Agreement;
                }
            }
            PortalAction::Finalize => {
                if self.step == OnboardingStep::Agreement && self.can_finalize() {
                    next.step = OnboardingStep::Success;
                }
            }
            PortalAction::Reset => next = PortalState::default(),
        }
        next
    }
}

impl Reducible for PortalState {
    type Action = PortalAction;

    fn reduce(self: Rc<Self>, action: PortalAction) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identified() -> PortalState {
        PortalState::default()
            .apply(PortalAction::SetName("Jordan".into()))
            .apply(PortalAction::SetBusinessName("Oakwood Chapel".into()))
    }

    fn signed() -> PortalState {
        identified()
            .apply(PortalAction::Submit)
            .apply(PortalAction::Proceed)
            .apply(PortalAction::SetSignature("Jordan Reyes".into()))
    }

    #[test]
    fn submit_requires_both_identity_fields() {
        let blank = PortalState::default();
        assert_eq!(blank.apply(PortalAction::Submit), blank);

        let name_only = blank.apply(PortalAction::SetName("Jordan".into()));
        assert_eq!(name_only.apply(PortalAction::Submit).step, OnboardingStep::Identify);

        let business_only =
            blank.apply(PortalAction::SetBusinessName("Oakwood Chapel".into()));
        assert_eq!(
            business_only.apply(PortalAction::Submit).step,
            OnboardingStep::Identify
        );

        assert_eq!(identified().apply(PortalAction::Submit).step, OnboardingStep::Welcome);
    }

    #[test]
    fn finalize_requires_signature() {
        let on_agreement = identified()
            .apply(PortalAction::Submit)
            .apply(PortalAction::Proceed);
        assert_eq!(on_agreement.step, OnboardingStep::Agreement);
        assert_eq!(on_agreement.apply(PortalAction::Finalize), on_agreement);

        let done = signed().apply(PortalAction::Finalize);
        assert_eq!(done.step, OnboardingStep::Success);
    }

    #[test]
    fn steps_are_strictly_linear() {
        let blank = PortalState::default();
        assert_eq!(blank.apply(PortalAction::Proceed), blank);
        assert_eq!(blank.apply(PortalAction::Finalize), blank);

        let welcomed = identified().apply(PortalAction::Submit);
        assert_eq!(welcomed.apply(PortalAction::Finalize), welcomed);
        assert_eq!(welcomed.apply(PortalAction::Submit), welcomed);
    }

    #[test]
    fn reset_clears_input_and_returns_to_identify() {
        let done = signed().apply(PortalAction::Finalize);
        assert_eq!(done.step, OnboardingStep::Success);

        let fresh = done.apply(PortalAction::Reset);
        assert_eq!(fresh, PortalState::default());
        assert_eq!(fresh.input, VisitorInput::default());
    }

    #[test]
    fn field_edits_do_not_advance_the_step() {
        let state = identified();
        assert_eq!(state.step, OnboardingStep::Identify);
        assert_eq!(state.input.name, "Jordan");
        assert_eq!(state.input.business_name, "Oakwood Chapel");
    }
}
