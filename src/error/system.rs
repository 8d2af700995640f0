//! System-related error types.
//!
//! Local failures: the credential file, the home directory, environment
//! configuration and terminal input.

use std::fmt;
use std::path::PathBuf;

/// System-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum SystemError {
    /// Could not determine home directory.
    NoHomeDirectory,

    /// Permission denied for a file operation.
    PermissionDenied { path: PathBuf, operation: String },

    /// Generic I/O error.
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// Environment variable set to an unusable value.
    EnvironmentError { variable: String, message: String },
}

impl SystemError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::NoHomeDirectory => {
                "Could not determine your home directory. Set PCA_CREDENTIALS_PATH to choose where your login is kept."
                    .to_string()
            }
            SystemError::PermissionDenied { path, operation } => format!(
                "Permission denied: cannot {} '{}'.",
                operation,
                path.display()
            ),
            SystemError::IoError {
                operation, path, ..
            } => match path {
                Some(p) => format!("Failed to {} '{}'", operation, p.display()),
                None => format!("Failed to {}", operation),
            },
            SystemError::EnvironmentError { variable, message } => {
                format!("Environment variable '{}' error: {}", variable, message)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::NoHomeDirectory => "E_SYS_NO_HOME",
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::IoError { .. } => "E_SYS_IO",
            SystemError::EnvironmentError { .. } => "E_SYS_ENV",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::NoHomeDirectory => write!(f, "Could not determine home directory"),
            SystemError::PermissionDenied { path, operation } => {
                write!(f, "Permission denied: {} '{}'", operation, path.display())
            }
            SystemError::IoError {
                operation,
                path,
                message,
            } => match path {
                Some(p) => write!(f, "I/O error during {} '{}': {}", operation, p.display(), message),
                None => write!(f, "I/O error during {}: {}", operation, message),
            },
            SystemError::EnvironmentError { variable, message } => {
                write!(f, "Environment error ({}): {}", variable, message)
            }
        }
    }
}

impl std::error::Error for SystemError {}

/// Classify a `std::io::Error` for `operation` on an optional `path`.
pub fn classify_io_error(err: std::io::Error, path: Option<PathBuf>, operation: &str) -> SystemError {
    match (err.kind(), path) {
        (std::io::ErrorKind::PermissionDenied, Some(path)) => SystemError::PermissionDenied {
            path,
            operation: operation.to_string(),
        },
        (_, path) => SystemError::IoError {
            operation: operation.to_string(),
            path,
            message: err.to_string(),
        },
    }
}
