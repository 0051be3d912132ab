use async_trait::async_trait;

use super::{
    client::{persist_session, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse},
};

/// Authentication capability consumed by the login view.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError>;
}

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let login_response: LoginResponse = response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))?;

            // The session is still usable for this page load without storage.
            if let Err(err) = persist_session(&login_response) {
                log::warn!("Could not persist session: {}", err);
            }
            Ok(login_response)
        } else {
            Err(response
                .json::<ApiError>()
                .await
                .unwrap_or_else(|_| ApiError::unrecognized(status.as_u16())))
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        ApiClient::login(self, request).await
    }
}
