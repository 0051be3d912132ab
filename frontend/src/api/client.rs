use reqwest::Client;

use crate::{api::types::*, config, utils::storage as storage_utils};

const AUTH_TOKEN_KEY: &str = "auth_token";
const CURRENT_MERCHANT_KEY: &str = "current_merchant";

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    #[cfg(test)]
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }
}

pub(super) fn persist_session(response: &LoginResponse) -> Result<(), String> {
    let storage = storage_utils::local_storage()?;
    storage
        .set_item(AUTH_TOKEN_KEY, &response.token)
        .map_err(|_| "Failed to store token")?;
    let merchant_json = serde_json::to_string(&response.merchant)
        .map_err(|_| "Failed to serialize merchant profile")?;
    storage
        .set_item(CURRENT_MERCHANT_KEY, &merchant_json)
        .map_err(|_| "Failed to store merchant profile")?;
    Ok(())
}

/// Merchant of the persisted session, if a token is present.
pub fn stored_merchant() -> Option<Merchant> {
    let storage = storage_utils::local_storage().ok()?;
    let token = storage.get_item(AUTH_TOKEN_KEY).ok().flatten()?;
    if token.trim().is_empty() {
        return None;
    }
    let raw = storage.get_item(CURRENT_MERCHANT_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}
