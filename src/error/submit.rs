//! Region submission rejections.
//!
//! These are business-rule answers from the moderation backend, not
//! transport failures; the credential stays valid after any of them.

use std::fmt;

/// Why the API refused a region-change request.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The moderators refused the request (HTTP 403).
    Denied { message: String },

    /// A request was already made this calendar year, or the payload was
    /// rejected as a duplicate (HTTP 400/409).
    Conflict { status: u16, message: String },

    /// The session is not in a state that offers submission.
    NotEligible,
}

impl SubmitError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Denied { .. } => {
                "Your region request was denied. You must e-mail the results committee to appeal."
                    .to_string()
            }
            SubmitError::Conflict { .. } => {
                "Your request has been denied as you may have already set your region for this year. You can only set your region once every year."
                    .to_string()
            }
            SubmitError::NotEligible => {
                "You can't change your region right now. You can only set your region once every year."
                    .to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SubmitError::Denied { .. } => "E_SUBMIT_DENIED",
            SubmitError::Conflict { .. } => "E_SUBMIT_CONFLICT",
            SubmitError::NotEligible => "E_SUBMIT_INELIGIBLE",
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Denied { message } => write!(f, "Region request denied: {}", message),
            SubmitError::Conflict { status, message } => {
                write!(f, "Region request rejected (HTTP {}): {}", status, message)
            }
            SubmitError::NotEligible => write!(f, "Region change not offered in this session"),
        }
    }
}

impl std::error::Error for SubmitError {}
