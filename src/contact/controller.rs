use std::rc::Rc;

use yew::prelude::*;

use super::validation::{validate, FormData, FormErrors, FormField};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    SuccessShown,
    /// Last attempt failed; the form keeps its data so the user can retry.
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContactAction {
    Edit(FormField, String),
    /// Validation passed elsewhere and a submission task is starting.
    SubmitStarted,
    ValidationFailed(FormErrors),
    SubmitSucceeded,
    SubmitFailed(String),
    DismissSuccess,
    DismissError,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactFormState {
    pub data: FormData,
    pub errors: FormErrors,
    pub phase: SubmitPhase,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            data: FormData::default(),
            errors: FormErrors::default(),
            phase: SubmitPhase::Idle,
        }
    }
}

impl ContactFormState {
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn success_visible(&self) -> bool {
        self.phase == SubmitPhase::SuccessShown
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.phase {
            SubmitPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Checks the current data. On success returns the payload to send.
    pub fn prepare_submission(&self) -> Result<FormData, FormErrors> {
        let errors = validate(&self.data);
        if errors.is_empty() {
            Ok(self.data.clone())
        } else {
            Err(errors)
        }
    }
}

impl Reducible for ContactFormState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => {
                next.data.set(field, value);
                if next.errors.get(field).is_some() {
                    next.errors.clear(field);
                }
            }
            ContactAction::SubmitStarted => {
                if self.is_submitting() {
                    return self;
                }
                next.errors = FormErrors::default();
                next.phase = SubmitPhase::Submitting;
            }
            ContactAction::ValidationFailed(errors) => {
                next.errors = errors;
                if !self.is_submitting() {
                    next.phase = SubmitPhase::Idle;
                }
            }
            ContactAction::SubmitSucceeded => {
                if !self.is_submitting() {
                    return self;
                }
                next.data = FormData::default();
                next.phase = SubmitPhase::SuccessShown;
            }
            ContactAction::SubmitFailed(message) => {
                if !self.is_submitting() {
                    return self;
                }
                next.phase = SubmitPhase::Failed(message);
            }
            ContactAction::DismissSuccess => {
                if !self.success_visible() {
                    return self;
                }
                next.phase = SubmitPhase::Idle;
            }
            ContactAction::DismissError => {
                if self.failure().is_none() {
                    return self;
                }
                next.phase = SubmitPhase::Idle;
            }
        }
        Rc::new(next)
    }
}
