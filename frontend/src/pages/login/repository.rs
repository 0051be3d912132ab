use crate::api::{ApiClient, ApiError, AuthApi, LoginRequest, LoginResponse};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<dyn AuthApi>,
}

impl LoginRepository {
    pub fn new(client: Rc<dyn AuthApi>) -> Self {
        Self { client }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(request).await
    }
}

/// Repository from context, or one over the shared `ApiClient`.
pub fn use_login_repository() -> LoginRepository {
    use_context::<LoginRepository>().unwrap_or_else(|| {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        LoginRepository::new_with_client(Rc::new(api))
    })
}
