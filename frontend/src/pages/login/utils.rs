use crate::{
    api::{ApiError, LoginRequest, Merchant},
    state::navigation::resolve_redirect_target,
};
use leptos::*;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const SUBMIT_LABEL: &str = "Sign in";
pub const SUBMITTING_LABEL: &str = "Signing in...";

/// Lifecycle of one login attempt.
///
/// `Failed` is the idle state with an error on display; a new submission
/// clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }
}

/// Moves `state` into `Submitting`. Returns false when a submission is
/// already in flight.
pub fn begin_submission(state: RwSignal<SubmissionState>) -> bool {
    if state.with_untracked(SubmissionState::is_submitting) {
        return false;
    }
    state.set(SubmissionState::Submitting);
    true
}

pub fn failure_message(error: &ApiError) -> String {
    if error.is_recognized() {
        error.error.clone()
    } else {
        LOGIN_FAILED_MESSAGE.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Redirect(String),
    Failed(String),
}

pub fn resolve_outcome(result: &Result<Merchant, ApiError>, intended: Option<&str>) -> LoginOutcome {
    match result {
        Ok(_) => LoginOutcome::Redirect(resolve_redirect_target(intended)),
        Err(error) => LoginOutcome::Failed(failure_message(error)),
    }
}
