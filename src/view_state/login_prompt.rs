//! The "Login with WCA" call-to-action.

use crate::auth::build_authorize_url;
use crate::startup::config::{DEFAULT_WCA_AUTHORIZE_URL, DEFAULT_WCA_CLIENT_ID, DEFAULT_WCA_REDIRECT_URI};
use crate::startup::PcaConfig;

pub const LOGIN_PROMPT_TITLE: &str = "Want to see your regional rank here?";
pub const LOGIN_PROMPT_BODY: &str = "If you've competed in an official WCA competition before, you can easily set your region in just a few steps.";
pub const LOGIN_ACTION_LABEL: &str = "Login with WCA";

/// Parameters of the login call-to-action.
///
/// Ranking pages and the region page show the same prompt; they differ
/// only in these settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPromptConfig {
    /// Full WCA authorize link, redirect included.
    pub authorize_url: String,
    /// Whether the prompt offers a dismiss control.
    pub dismissible: bool,
}

impl LoginPromptConfig {
    pub fn from_config(config: &PcaConfig) -> Self {
        Self {
            authorize_url: config.authorize_link(),
            dismissible: true,
        }
    }

    pub fn with_dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }
}

impl Default for LoginPromptConfig {
    fn default() -> Self {
        Self {
            authorize_url: build_authorize_url(
                DEFAULT_WCA_AUTHORIZE_URL,
                DEFAULT_WCA_CLIENT_ID,
                DEFAULT_WCA_REDIRECT_URI,
            ),
            dismissible: true,
        }
    }
}

/// A rendered login prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPrompt {
    pub title: &'static str,
    pub body: &'static str,
    pub action_label: &'static str,
    pub authorize_url: String,
    pub dismissible: bool,
    /// Why the last sign-in attempt failed, if it did.
    pub error: Option<String>,
}

impl LoginPrompt {
    pub fn new(config: &LoginPromptConfig, error: Option<String>) -> Self {
        Self {
            title: LOGIN_PROMPT_TITLE,
            body: LOGIN_PROMPT_BODY,
            action_label: LOGIN_ACTION_LABEL,
            authorize_url: config.authorize_url.clone(),
            dismissible: config.dismissible,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompt_points_at_wca() {
        let prompt = LoginPrompt::new(&LoginPromptConfig::default(), None);
        assert!(prompt
            .authorize_url
            .starts_with("https://www.worldcubeassociation.org/oauth/authorize/?client_id="));
        assert!(prompt.authorize_url.ends_with("&response_type=code&scope="));
        assert_eq!(prompt.action_label, "Login with WCA");
        assert!(prompt.dismissible);
    }

    #[test]
    fn test_variants_differ_only_in_config() {
        let navigation = LoginPromptConfig::default().with_dismissible(false);
        let a = LoginPrompt::new(&navigation, None);
        let b = LoginPrompt::new(&LoginPromptConfig::default(), None);
        assert_eq!(a.title, b.title);
        assert_eq!(a.body, b.body);
        assert_ne!(a.dismissible, b.dismissible);
    }
}
