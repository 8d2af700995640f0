//! Turning a WCA redirect into a PCA credential.
//!
//! A cached credential always wins: while one is held, no request is made
//! whatever the redirect carries. Without one, the authorization code is
//! posted to the login endpoint at most once per process; a code that was
//! already posted, successfully or not, is refused locally.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use super::cache::CredentialCache;
use super::credentials::Credential;
use super::redirect::{AuthorizationCode, RedirectParams};
use crate::adapters::ReqwestHttpClient;
use crate::api::PcaApiClient;
use crate::error::AuthError;
use crate::mutex_ext::MutexExt;
use crate::traits::HttpClient;

/// Outcome of [`AuthExchange::ensure_credential`].
#[derive(Debug, Clone, PartialEq)]
pub enum CredentialStatus {
    /// A credential is available.
    Ready(Credential),
    /// No credential and no code: the user has to go through the WCA.
    LoginRequired,
}

impl CredentialStatus {
    pub fn credential(&self) -> Option<&Credential> {
        match self {
            CredentialStatus::Ready(credential) => Some(credential),
            CredentialStatus::LoginRequired => None,
        }
    }
}

/// Exchanges authorization codes for credentials.
pub struct AuthExchange<C: HttpClient = ReqwestHttpClient> {
    cache: CredentialCache,
    api: Arc<PcaApiClient<C>>,
    posted_codes: Mutex<HashSet<AuthorizationCode>>,
}

impl<C: HttpClient> AuthExchange<C> {
    pub fn new(cache: CredentialCache, api: Arc<PcaApiClient<C>>) -> Self {
        Self {
            cache,
            api,
            posted_codes: Mutex::new(HashSet::new()),
        }
    }

    pub fn cache(&self) -> &CredentialCache {
        &self.cache
    }

    /// Make sure a credential is available, exchanging the redirect's code
    /// if needed.
    ///
    /// On success the new credential is stored exactly once. On failure the
    /// cache is left empty and the code is spent.
    pub async fn ensure_credential(
        &self,
        redirect: Option<&RedirectParams>,
    ) -> Result<CredentialStatus, AuthError> {
        if let Some(credential) = self.cache.get() {
            debug!("Using cached credential");
            return Ok(CredentialStatus::Ready(credential));
        }

        let Some(redirect) = redirect else {
            return Ok(CredentialStatus::LoginRequired);
        };

        let Some(code) = redirect.code() else {
            if let Some(error) = redirect.error() {
                warn!(error = %error, "WCA redirect carried an error instead of a code");
                return Err(AuthError::AuthFailed {
                    message: format!("WCA sign-in was not completed: {}", error),
                });
            }
            return Ok(CredentialStatus::LoginRequired);
        };

        if !self.mark_posted(code) {
            warn!("Refusing to post an authorization code twice");
            return Err(AuthError::CodeAlreadyUsed);
        }

        let credential = self.api.exchange_code(redirect).await?;
        self.cache.set(credential.clone());
        info!("Signed in with the WCA");
        Ok(CredentialStatus::Ready(credential))
    }

    /// Record `code` as posted; false if it already was.
    fn mark_posted(&self, code: AuthorizationCode) -> bool {
        self.posted_codes.lock_or_recover().insert(code)
    }
}

impl<C: HttpClient> std::fmt::Debug for AuthExchange<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthExchange")
            .field("cache", &self.cache)
            .field("base_url", &self.api.base_url())
            .finish()
    }
}
