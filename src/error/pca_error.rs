//! Unified error type for the region client.

use std::fmt;

use super::auth::AuthError;
use super::category::ErrorCategory;
use super::network::NetworkError;
use super::submit::SubmitError;
use super::system::SystemError;

/// Unified error type.
///
/// `PcaError` consolidates the domain errors so that session code can make
/// one decision per failure: clear the credential, show a moderation
/// message, or show a network/system error.
#[derive(Debug, Clone, PartialEq)]
pub enum PcaError {
    /// Transport and protocol errors.
    Network(NetworkError),

    /// Code exchange and credential errors.
    Auth(AuthError),

    /// Region submission rejections.
    Submit(SubmitError),

    /// Local system errors.
    System(SystemError),
}

impl PcaError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            PcaError::Network(err) if err.is_server_side() => ErrorCategory::Server,
            PcaError::Network(_) => ErrorCategory::Network,
            PcaError::Auth(_) => ErrorCategory::Auth,
            PcaError::Submit(_) => ErrorCategory::Moderation,
            PcaError::System(SystemError::EnvironmentError { .. }) => ErrorCategory::Configuration,
            PcaError::System(_) => ErrorCategory::System,
        }
    }

    /// Check if re-invoking the operation may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            PcaError::Network(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// Whether the stored credential was rejected and must be cleared.
    pub fn requires_reauth(&self) -> bool {
        match self {
            PcaError::Auth(err) => err.clears_credential(),
            _ => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            PcaError::Network(err) => err.user_message(),
            PcaError::Auth(err) => err.user_message(),
            PcaError::Submit(err) => err.user_message(),
            PcaError::System(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PcaError::Network(err) => err.error_code(),
            PcaError::Auth(err) => err.error_code(),
            PcaError::Submit(err) => err.error_code(),
            PcaError::System(err) => err.error_code(),
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for PcaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PcaError::Network(err) => write!(f, "{}", err),
            PcaError::Auth(err) => write!(f, "{}", err),
            PcaError::Submit(err) => write!(f, "{}", err),
            PcaError::System(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for PcaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PcaError::Network(err) => Some(err),
            PcaError::Auth(err) => Some(err),
            PcaError::Submit(err) => Some(err),
            PcaError::System(err) => Some(err),
        }
    }
}

impl From<NetworkError> for PcaError {
    fn from(err: NetworkError) -> Self {
        PcaError::Network(err)
    }
}

impl From<AuthError> for PcaError {
    fn from(err: AuthError) -> Self {
        PcaError::Auth(err)
    }
}

impl From<SubmitError> for PcaError {
    fn from(err: SubmitError) -> Self {
        PcaError::Submit(err)
    }
}

impl From<SystemError> for PcaError {
    fn from(err: SystemError) -> Self {
        PcaError::System(err)
    }
}

impl From<std::io::Error> for PcaError {
    fn from(err: std::io::Error) -> Self {
        PcaError::System(super::system::classify_io_error(err, None, "I/O operation"))
    }
}

impl From<serde_json::Error> for PcaError {
    fn from(err: serde_json::Error) -> Self {
        PcaError::Network(NetworkError::InvalidResponse {
            message: err.to_string(),
        })
    }
}
