#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiError, AuthApi, LoginRequest, LoginResponse, Merchant};
    use crate::state::{auth::AuthState, navigation::Navigator};
    use async_trait::async_trait;
    use leptos::*;
    use std::cell::RefCell;

    pub fn merchant() -> Merchant {
        Merchant {
            id: 1,
            name: "Corner Bakery".into(),
            email: "bakery@example.com".into(),
        }
    }

    pub fn provide_auth(
        merchant: Option<Merchant>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: merchant.is_some(),
            merchant,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    /// Authentication collaborator with a canned answer.
    pub struct FakeAuthApi {
        result: Result<LoginResponse, ApiError>,
        requests: RefCell<Vec<LoginRequest>>,
    }

    impl FakeAuthApi {
        pub fn succeeding() -> Self {
            Self {
                result: Ok(LoginResponse {
                    token: "tok-test".into(),
                    merchant: merchant(),
                }),
                requests: RefCell::default(),
            }
        }

        pub fn failing(error: ApiError) -> Self {
            Self {
                result: Err(error),
                requests: RefCell::default(),
            }
        }

        pub fn requests(&self) -> Vec<LoginRequest> {
            self.requests.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for FakeAuthApi {
        async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.result.clone()
        }
    }

    /// Navigator that records every replace instead of touching a router.
    #[derive(Default)]
    pub struct RecordingNavigator {
        current: String,
        redirect_target: Option<String>,
        replaced: RefCell<Vec<(String, Option<String>)>>,
    }

    impl RecordingNavigator {
        pub fn at(path: &str) -> Self {
            Self {
                current: path.to_string(),
                ..Self::default()
            }
        }

        pub fn with_redirect_target(path: &str) -> Self {
            Self {
                current: "/login".to_string(),
                redirect_target: Some(path.to_string()),
                ..Self::default()
            }
        }

        pub fn replaced(&self) -> Vec<(String, Option<String>)> {
            self.replaced.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn redirect_target(&self) -> Option<String> {
            self.redirect_target.clone()
        }

        fn current_path(&self) -> String {
            self.current.clone()
        }

        fn replace(&self, path: &str, from: Option<&str>) {
            self.replaced
                .borrow_mut()
                .push((path.to_string(), from.map(str::to_string)));
        }
    }
}
