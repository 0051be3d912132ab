use super::utils::{begin_submission, resolve_outcome, LoginFormState, LoginOutcome, SubmissionState};
use crate::{
    api::{ApiError, LoginRequest, Merchant},
    state::{
        auth,
        navigation::{use_navigator, Navigator},
    },
    utils::lifecycle::{use_view_liveness, ViewLiveness},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub state: RwSignal<SubmissionState>,
    pub login_action: Action<LoginRequest, Result<Merchant, ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if !begin_submission(self.state) {
            return;
        }
        self.login_action.dispatch(self.form.to_request());
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let state = create_rw_signal(SubmissionState::Idle);
    let login_action = auth::use_login_action();
    let navigator = use_navigator();
    let liveness = use_view_liveness();

    create_effect(move |_| {
        handle_login_result(login_action.value().get(), &liveness, state, &navigator);
    });

    LoginViewModel {
        form,
        state,
        login_action,
    }
}

/// Applies the latest action value unless the view has gone away.
pub(crate) fn handle_login_result(
    result: Option<Result<Merchant, ApiError>>,
    liveness: &ViewLiveness,
    state: RwSignal<SubmissionState>,
    navigator: &dyn Navigator,
) {
    let Some(result) = result else {
        return;
    };
    if !liveness.is_live() {
        return;
    }
    apply_login_result(&result, state, navigator);
}

pub(crate) fn apply_login_result(
    result: &Result<Merchant, ApiError>,
    state: RwSignal<SubmissionState>,
    navigator: &dyn Navigator,
) {
    match resolve_outcome(result, navigator.redirect_target().as_deref()) {
        // The page is torn down by the navigation, so the state stays as is.
        LoginOutcome::Redirect(target) => navigator.replace(&target, None),
        LoginOutcome::Failed(message) => state.set(SubmissionState::Failed(message)),
    }
}
