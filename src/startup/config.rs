//! Client configuration.
//!
//! Defaults target the public PCA API and the WCA OAuth application; each
//! value can be overridden from the environment or with the `with_*`
//! builders.

use std::path::PathBuf;
use std::time::Duration;

use crate::api::PCA_API_URL;
use crate::auth::build_authorize_url;
use crate::error::SystemError;

pub const DEFAULT_WCA_AUTHORIZE_URL: &str = "https://www.worldcubeassociation.org/oauth/authorize/";
pub const DEFAULT_WCA_CLIENT_ID: &str = "6751d55b9b1cc5710fed3a47d9c69eca871af9b0f83ec5388a5b0cebe1f93037";
pub const DEFAULT_WCA_REDIRECT_URI: &str = "http://localhost:8000/regional-rankings";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_URL: &str = "PCA_API_URL";
pub const ENV_AUTHORIZE_URL: &str = "PCA_WCA_AUTHORIZE_URL";
pub const ENV_CLIENT_ID: &str = "PCA_WCA_CLIENT_ID";
pub const ENV_REDIRECT_URI: &str = "PCA_WCA_REDIRECT_URI";
pub const ENV_CREDENTIALS_PATH: &str = "PCA_CREDENTIALS_PATH";
pub const ENV_HTTP_TIMEOUT: &str = "PCA_HTTP_TIMEOUT_SECS";
pub const ENV_NO_BROWSER: &str = "PCA_NO_BROWSER";

/// Runtime configuration of the client.
///
/// # Example
///
/// ```ignore
/// use pca_region::startup::PcaConfig;
///
/// let config = PcaConfig::default()
///     .with_api_base_url("http://localhost:8080")
///     .with_open_browser(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PcaConfig {
    /// Base URL of the PCA API
    pub api_base_url: String,
    /// WCA OAuth authorize endpoint
    pub authorize_url: String,
    /// OAuth application id registered with the WCA
    pub client_id: String,
    /// Where the WCA sends the user back to after consent
    pub redirect_uri: String,
    /// Credential file override; `None` uses the home directory
    pub credentials_path: Option<PathBuf>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Open the authorize link in a browser on `login`
    pub open_browser: bool,
}

impl Default for PcaConfig {
    fn default() -> Self {
        Self {
            api_base_url: PCA_API_URL.to_string(),
            authorize_url: DEFAULT_WCA_AUTHORIZE_URL.to_string(),
            client_id: DEFAULT_WCA_CLIENT_ID.to_string(),
            redirect_uri: DEFAULT_WCA_REDIRECT_URI.to_string(),
            credentials_path: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            open_browser: true,
        }
    }
}

impl PcaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_authorize_url(mut self, url: impl Into<String>) -> Self {
        self.authorize_url = url.into();
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = redirect_uri.into();
        self
    }

    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = Some(path.into());
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_open_browser(mut self, open: bool) -> Self {
        self.open_browser = open;
        self
    }

    /// Defaults overridden by whichever `PCA_*` variables are set.
    ///
    /// Blank values count as unset. Fails only on a timeout that is not a
    /// positive integer.
    pub fn from_env() -> Result<Self, SystemError> {
        let mut config = Self::default();

        if let Some(url) = env_value(ENV_API_URL) {
            config.api_base_url = url;
        }
        if let Some(url) = env_value(ENV_AUTHORIZE_URL) {
            config.authorize_url = url;
        }
        if let Some(client_id) = env_value(ENV_CLIENT_ID) {
            config.client_id = client_id;
        }
        if let Some(redirect_uri) = env_value(ENV_REDIRECT_URI) {
            config.redirect_uri = redirect_uri;
        }
        if let Some(path) = env_value(ENV_CREDENTIALS_PATH) {
            config.credentials_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = env_value(ENV_HTTP_TIMEOUT) {
            config.request_timeout_secs = match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(SystemError::EnvironmentError {
                        variable: ENV_HTTP_TIMEOUT.to_string(),
                        message: format!("expected a positive number of seconds, got '{}'", raw),
                    })
                }
            };
        }
        if env_value(ENV_NO_BROWSER).is_some() {
            config.open_browser = false;
        }

        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The WCA link that starts the login.
    pub fn authorize_link(&self) -> String {
        build_authorize_url(&self.authorize_url, &self.client_id, &self.redirect_uri)
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
