//! In-memory credential store for testing.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::auth::Credential;
use crate::mutex_ext::MutexExt;
use crate::traits::{CredentialStore, CredentialsError};

/// In-memory [`CredentialStore`] with switchable failures.
///
/// Clones share the stored value, the failure switches and the counters,
/// so a test can hand one clone to the code under test and inspect another.
///
/// # Example
///
/// ```ignore
/// let store = InMemoryCredentials::new();
/// let cache = CredentialCache::init(Arc::new(store.clone()));
///
/// cache.set(Credential::parse("abc123").unwrap());
/// assert_eq!(store.save_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentials {
    credential: Arc<Mutex<Option<Credential>>>,
    load_should_fail: Arc<AtomicBool>,
    save_should_fail: Arc<AtomicBool>,
    clear_should_fail: Arc<AtomicBool>,
    saves: Arc<AtomicUsize>,
    clears: Arc<AtomicUsize>,
}

impl InMemoryCredentials {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `credential`.
    pub fn with_credential(credential: Credential) -> Self {
        let store = Self::default();
        *store.credential.lock_or_recover() = Some(credential);
        store
    }

    pub fn set_load_should_fail(&self, should_fail: bool) {
        self.load_should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn set_save_should_fail(&self, should_fail: bool) {
        self.save_should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn set_clear_should_fail(&self, should_fail: bool) {
        self.clear_should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// What is stored right now, bypassing the failure switches.
    pub fn get_credential(&self) -> Option<Credential> {
        self.credential.lock_or_recover().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Number of successful clears.
    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl CredentialStore for InMemoryCredentials {
    fn load(&self) -> Result<Option<Credential>, CredentialsError> {
        if self.load_should_fail.load(Ordering::SeqCst) {
            return Err(CredentialsError::LoadFailed("simulated load failure".to_string()));
        }
        Ok(self.get_credential())
    }

    fn save(&self, credential: &Credential) -> Result<(), CredentialsError> {
        if self.save_should_fail.load(Ordering::SeqCst) {
            return Err(CredentialsError::SaveFailed("simulated save failure".to_string()));
        }
        *self.credential.lock_or_recover() = Some(credential.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialsError> {
        if self.clear_should_fail.load(Ordering::SeqCst) {
            return Err(CredentialsError::ClearFailed("simulated clear failure".to_string()));
        }
        *self.credential.lock_or_recover() = None;
        self.clears.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
