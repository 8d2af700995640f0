//! Authentication-related error types.

use std::fmt;

/// Failures of the WCA code exchange and of the stored credential.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// The token endpoint rejected the authorization code, or the exchange
    /// could not be completed.
    AuthFailed { message: String },

    /// The authorization code was already posted once in this process.
    CodeAlreadyUsed,

    /// The API rejected the stored credential.
    Unauthorized { status: u16 },

    /// No credential is stored.
    NotAuthenticated,
}

impl AuthError {
    /// Whether the stored credential must be dropped before continuing.
    pub fn clears_credential(&self) -> bool {
        matches!(self, AuthError::Unauthorized { .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::AuthFailed { .. } => {
                "Signing in with the WCA failed. The login link may have expired; please try again."
                    .to_string()
            }
            AuthError::CodeAlreadyUsed => {
                "This login link was already used. Please sign in with the WCA again.".to_string()
            }
            AuthError::Unauthorized { .. } => {
                "Your session has expired. Please sign in again.".to_string()
            }
            AuthError::NotAuthenticated => {
                "You are not signed in. Run `pca login` to continue.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::AuthFailed { .. } => "E_AUTH_FAILED",
            AuthError::CodeAlreadyUsed => "E_AUTH_CODE_USED",
            AuthError::Unauthorized { .. } => "E_AUTH_UNAUTHORIZED",
            AuthError::NotAuthenticated => "E_AUTH_NOT_AUTH",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::AuthFailed { message } => write!(f, "WCA code exchange failed: {}", message),
            AuthError::CodeAlreadyUsed => write!(f, "Authorization code was already exchanged"),
            AuthError::Unauthorized { status } => {
                write!(f, "Stored credential rejected (HTTP {})", status)
            }
            AuthError::NotAuthenticated => write!(f, "No credential stored"),
        }
    }
}

impl std::error::Error for AuthError {}
