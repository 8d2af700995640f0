//! Credential type and file storage.
//!
//! The PCA API key is kept in `~/.pca/.credentials.json` under a single
//! fixed key. Absence of the file (or of the key) means logged out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::traits::CredentialsError;

/// The credentials directory name.
const CREDENTIALS_DIR: &str = ".pca";

/// The credentials file name.
const CREDENTIALS_FILE: &str = ".credentials.json";

/// Server-issued API key authorizing requests on behalf of one user.
///
/// `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token, rejecting blank values.
    pub fn parse(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("Token {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// On-disk layout of the credentials file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct StoredCredentials {
    #[serde(default)]
    pca_api_key: Option<String>,
}

/// Reads and writes the credentials file.
#[derive(Debug, Clone)]
pub struct CredentialsManager {
    /// Path to the credentials file.
    credentials_path: PathBuf,
}

impl CredentialsManager {
    /// Create a manager for `~/.pca/.credentials.json`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self::with_path(
            home.join(CREDENTIALS_DIR).join(CREDENTIALS_FILE),
        ))
    }

    /// Create a manager for an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            credentials_path: path.into(),
        }
    }

    /// Get the path to the credentials file.
    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    /// Load the stored credential.
    ///
    /// A missing file, a missing key or a blank key all mean logged out.
    pub fn load(&self) -> Result<Option<Credential>, CredentialsError> {
        if !self.credentials_path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.credentials_path)
            .map_err(|e| CredentialsError::LoadFailed(e.to_string()))?;

        let stored: StoredCredentials = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| CredentialsError::Serialization(e.to_string()))?;

        Ok(stored.pca_api_key.and_then(Credential::parse))
    }

    /// Save the credential, replacing whatever was stored.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, credential: &Credential) -> Result<(), CredentialsError> {
        if let Some(parent) = self.credentials_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| CredentialsError::SaveFailed(e.to_string()))?;
            }
        }

        let stored = StoredCredentials {
            pca_api_key: Some(credential.as_str().to_string()),
        };

        let file = File::create(&self.credentials_path)
            .map_err(|e| CredentialsError::SaveFailed(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &stored)
            .map_err(|e| CredentialsError::Serialization(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| CredentialsError::SaveFailed(e.to_string()))
    }

    /// Remove the credentials file if it exists.
    pub fn clear(&self) -> Result<(), CredentialsError> {
        if !self.credentials_path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.credentials_path)
            .map_err(|e| CredentialsError::ClearFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> CredentialsManager {
        CredentialsManager::with_path(temp_dir.path().join(CREDENTIALS_DIR).join(CREDENTIALS_FILE))
    }

    #[test]
    fn test_credential_parse_rejects_blank() {
        assert!(Credential::parse("").is_none());
        assert!(Credential::parse("   ").is_none());
        assert_eq!(Credential::parse(" abc123 ").unwrap().as_str(), "abc123");
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::parse("super-secret").unwrap();
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_authorization_header_uses_token_scheme() {
        let credential = Credential::parse("abc123").unwrap();
        assert_eq!(credential.authorization_header(), "Token abc123");
    }

    #[test]
    fn test_load_nonexistent_is_logged_out() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        assert_eq!(manager.load().unwrap(), None);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        let credential = Credential::parse("abc123").unwrap();

        manager.save(&credential).unwrap();
        assert_eq!(manager.load().unwrap(), Some(credential));
    }

    #[test]
    fn test_save_replaces_previous_credential() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        manager.save(&Credential::parse("first").unwrap()).unwrap();
        manager.save(&Credential::parse("second").unwrap()).unwrap();

        assert_eq!(manager.load().unwrap().unwrap().as_str(), "second");
    }

    #[test]
    fn test_file_layout_is_single_key() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        manager.save(&Credential::parse("abc123").unwrap()).unwrap();

        let raw = fs::read_to_string(manager.credentials_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({ "pca_api_key": "abc123" }));
    }

    #[test]
    fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        manager.save(&Credential::parse("abc123").unwrap()).unwrap();
        assert!(manager.credentials_path().exists());

        manager.clear().unwrap();
        assert!(!manager.credentials_path().exists());
        assert_eq!(manager.load().unwrap(), None);
    }

    #[test]
    fn test_clear_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        assert!(manager.clear().is_ok());
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        assert!(!manager.credentials_path().parent().unwrap().exists());

        manager.save(&Credential::parse("abc123").unwrap()).unwrap();
        assert!(manager.credentials_path().parent().unwrap().exists());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::create_dir_all(manager.credentials_path().parent().unwrap()).unwrap();
        fs::write(manager.credentials_path(), "not valid json").unwrap();

        assert!(matches!(
            manager.load(),
            Err(CredentialsError::Serialization(_))
        ));
    }

    #[test]
    fn test_load_blank_key_is_logged_out() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::create_dir_all(manager.credentials_path().parent().unwrap()).unwrap();
        fs::write(manager.credentials_path(), r#"{"pca_api_key": ""}"#).unwrap();

        assert_eq!(manager.load().unwrap(), None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::create_dir_all(manager.credentials_path().parent().unwrap()).unwrap();
        fs::write(
            manager.credentials_path(),
            r#"{"pca_api_key": "abc123", "saved_by": "older-client"}"#,
        )
        .unwrap();

        assert_eq!(manager.load().unwrap().unwrap().as_str(), "abc123");
    }
}
