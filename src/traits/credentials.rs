//! Credential store trait abstraction.
//!
//! A store persists exactly one API credential under one fixed key.
//! Access is synchronous: the store is local to the process and the file it
//! writes is tiny.

use thiserror::Error;

use crate::auth::Credential;

/// Credential storage errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CredentialsError {
    /// Failed to read the stored credential
    #[error("Failed to load credentials: {0}")]
    LoadFailed(String),
    /// Failed to persist the credential
    #[error("Failed to save credentials: {0}")]
    SaveFailed(String),
    /// Failed to remove the stored credential
    #[error("Failed to clear credentials: {0}")]
    ClearFailed(String),
    /// Stored data could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Durable storage for the single API credential.
///
/// Implementations include the file-backed production store and an
/// in-memory store for tests.
pub trait CredentialStore: Send + Sync {
    /// Read the stored credential.
    ///
    /// # Returns
    /// - `Ok(Some(credential))` if one is stored
    /// - `Ok(None)` if the client is logged out
    /// - `Err(error)` if reading failed
    fn load(&self) -> Result<Option<Credential>, CredentialsError>;

    /// Replace the stored credential.
    fn save(&self, credential: &Credential) -> Result<(), CredentialsError>;

    /// Remove the stored credential. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), CredentialsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_error_display() {
        assert_eq!(
            CredentialsError::LoadFailed("read error".to_string()).to_string(),
            "Failed to load credentials: read error"
        );
        assert_eq!(
            CredentialsError::SaveFailed("disk full".to_string()).to_string(),
            "Failed to save credentials: disk full"
        );
        assert_eq!(
            CredentialsError::ClearFailed("busy".to_string()).to_string(),
            "Failed to clear credentials: busy"
        );
        assert_eq!(
            CredentialsError::Serialization("invalid json".to_string()).to_string(),
            "Serialization error: invalid json"
        );
    }

    #[test]
    fn test_credentials_error_implements_error_trait() {
        let err = CredentialsError::LoadFailed("x".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
