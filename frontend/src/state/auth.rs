use crate::{
    api::{self, ApiError, LoginRequest, Merchant},
    pages::login::repository::{self as login_repository, LoginRepository},
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub merchant: Option<Merchant>,
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn signed_in(merchant: Merchant) -> Self {
        Self {
            merchant: Some(merchant),
            is_authenticated: true,
        }
    }
}

fn create_auth_context() -> AuthContext {
    let restored = api::stored_merchant()
        .map(AuthState::signed_in)
        .unwrap_or_default();
    if let Some(merchant) = &restored.merchant {
        log::debug!("Restored session for {}", merchant.email);
    }
    create_signal(restored)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Merchant, ApiError> {
    let response = repo.login(request).await?;
    log::info!("Logged in as {}", response.merchant.email);
    let merchant = response.merchant;
    set_auth_state.set(AuthState::signed_in(merchant.clone()));
    Ok(merchant)
}

pub fn use_login_action() -> Action<LoginRequest, Result<Merchant, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository::use_login_repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{merchant, FakeAuthApi};
    use futures::executor::block_on;
    use std::rc::Rc;

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "bakery@example.com".into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn successful_login_updates_auth_state() {
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let fake = Rc::new(FakeAuthApi::succeeding());
        let repo = LoginRepository::new(fake.clone());

        let merchant_result = block_on(login_request(credentials(), &repo, set_state)).unwrap();

        assert_eq!(merchant_result, merchant());
        assert_eq!(state.get(), AuthState::signed_in(merchant()));
        assert_eq!(fake.requests(), vec![credentials()]);
        runtime.dispose();
    }

    #[test]
    fn failed_login_leaves_auth_state_untouched() {
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let repo = LoginRepository::new(Rc::new(FakeAuthApi::failing(ApiError::unknown(
            "Invalid credentials",
        ))));

        let err = block_on(login_request(credentials(), &repo, set_state)).unwrap_err();

        assert_eq!(err.error, "Invalid credentials");
        assert_eq!(state.get(), AuthState::default());
        runtime.dispose();
    }

    #[test]
    fn auth_provider_starts_anonymous_without_stored_session() {
        let runtime = create_runtime();
        let (state, _) = create_auth_context();
        assert!(!state.get().is_authenticated);
        runtime.dispose();
    }
}
