//! `POST /auth/login/wca/`: trade the WCA redirect for a PCA API key.

use tracing::{debug, warn};

use super::client::{body_excerpt, PcaApiClient};
use crate::auth::{Credential, RedirectParams};
use crate::error::AuthError;
use crate::traits::HttpClient;

pub const LOGIN_PATH: &str = "/auth/login/wca/";

impl<C: HttpClient> PcaApiClient<C> {
    /// Post the redirect parameters and read the credential out of the answer.
    ///
    /// Every failure, whether transport, status or body shape, is an
    /// [`AuthError::AuthFailed`].
    pub async fn exchange_code(&self, redirect: &RedirectParams) -> Result<Credential, AuthError> {
        let response = self
            .post_json(LOGIN_PATH, &redirect.to_json_body(), None)
            .await
            .map_err(|e| AuthError::AuthFailed {
                message: e.to_string(),
            })?;

        if !response.is_success() {
            warn!(status = response.status, "WCA code exchange rejected");
            return Err(AuthError::AuthFailed {
                message: format!("HTTP {}: {}", response.status, body_excerpt(&response)),
            });
        }

        let body: serde_json::Value = response.json().map_err(|e| AuthError::AuthFailed {
            message: format!("invalid login response: {}", e),
        })?;

        let credential = credential_from_body(&body).ok_or_else(|| AuthError::AuthFailed {
            message: "login response carried no API key".to_string(),
        })?;
        debug!("WCA code exchanged for an API key");
        Ok(credential)
    }
}

/// The login answer is a single-field object whose value is the key,
/// e.g. `{"token": "..."}` or `{"key": "..."}`.
fn credential_from_body(body: &serde_json::Value) -> Option<Credential> {
    match body {
        serde_json::Value::Object(fields) => fields
            .values()
            .filter_map(serde_json::Value::as_str)
            .find_map(Credential::parse),
        serde_json::Value::String(token) => Credential::parse(token.as_str()),
        _ => None,
    }
}
