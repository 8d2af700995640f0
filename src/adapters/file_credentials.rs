//! File-backed credential store adapter.

use std::path::{Path, PathBuf};

use crate::auth::{Credential, CredentialsManager};
use crate::error::SystemError;
use crate::traits::{CredentialStore, CredentialsError};

/// [`CredentialStore`] over a [`CredentialsManager`].
///
/// The credential lives in `~/.pca/.credentials.json` unless another path
/// is configured.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    manager: CredentialsManager,
}

impl FileCredentialStore {
    /// Store at the default location under the home directory.
    pub fn new() -> Result<Self, SystemError> {
        CredentialsManager::new()
            .map(|manager| Self { manager })
            .ok_or(SystemError::NoHomeDirectory)
    }

    /// Store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            manager: CredentialsManager::with_path(path),
        }
    }

    /// Store at `path` if given, otherwise at the default location.
    pub fn at(path: Option<&Path>) -> Result<Self, SystemError> {
        match path {
            Some(path) => Ok(Self::with_path(path)),
            None => Self::new(),
        }
    }

    pub fn credentials_path(&self) -> &Path {
        self.manager.credentials_path()
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<Credential>, CredentialsError> {
        self.manager.load()
    }

    fn save(&self, credential: &Credential) -> Result<(), CredentialsError> {
        self.manager.save(credential)
    }

    fn clear(&self) -> Result<(), CredentialsError> {
        self.manager.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_store_through_trait_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("creds.json");
        let store: Box<dyn CredentialStore> = Box::new(FileCredentialStore::with_path(&path));

        assert_eq!(store.load().unwrap(), None);
        store.save(&Credential::parse("abc123").unwrap()).unwrap();
        assert!(path.exists());
        assert_eq!(store.load().unwrap().unwrap().as_str(), "abc123");
        store.clear().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_at_prefers_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("explicit.json");
        let store = FileCredentialStore::at(Some(&path)).unwrap();
        assert_eq!(store.credentials_path(), path.as_path());
    }

    #[test]
    fn test_default_location_ends_with_pca_dir() {
        if let Ok(store) = FileCredentialStore::new() {
            assert!(store.credentials_path().ends_with(".pca/.credentials.json"));
        }
    }
}
