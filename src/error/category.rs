//! Error category classification.
//!
//! Categories map every failure onto one of the rendered outcomes the
//! session can show: a network/system error, a moderation decision, or a
//! return to the login prompt.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport failures (connection, DNS, timeout, undecodable body).
    /// Surfaced to the user; retried only when the user asks.
    Network,

    /// The identity exchange failed or the stored credential was rejected.
    /// Recovered by returning to the login prompt.
    Auth,

    /// The API answered with a 5xx.
    Server,

    /// The moderation backend refused a region submission.
    /// The credential stays valid.
    Moderation,

    /// Local filesystem or environment problems.
    System,

    /// Invalid or missing configuration values.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if the same request may succeed when re-invoked.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns true if recovering requires the login flow again.
    pub fn returns_to_login(&self) -> bool {
        matches!(self, ErrorCategory::Auth)
    }

    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Moderation => "moderation",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Suggested next step for the user.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and run the command again",
            ErrorCategory::Auth => "Run `pca login` to sign in with your WCA account again",
            ErrorCategory::Server => "The server may be experiencing issues. Please try again later",
            ErrorCategory::Moderation => {
                "You can only set your region once every year. E-mail the results committee to appeal"
            }
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Check your PCA_* environment variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
