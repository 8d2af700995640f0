//! Process-wide credential state.
//!
//! [`CredentialCache`] mirrors the durable [`CredentialStore`] in memory.
//! It is read once on session start (`init`) and written through on every
//! change; nothing else in the crate touches the store directly.
//! Storage failures are logged and otherwise ignored: the in-memory value
//! stays authoritative for the rest of the process.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use super::credentials::Credential;
use crate::mutex_ext::MutexExt;
use crate::traits::CredentialStore;

/// Shared handle to the single API credential.
///
/// Clones share the same value.
#[derive(Clone)]
pub struct CredentialCache {
    store: Arc<dyn CredentialStore>,
    current: Arc<Mutex<Option<Credential>>>,
}

impl CredentialCache {
    /// Read the durable store once and start mirroring it.
    pub fn init(store: Arc<dyn CredentialStore>) -> Self {
        let current = match store.load() {
            Ok(credential) => credential,
            Err(e) => {
                warn!("Could not read stored credential, starting logged out: {}", e);
                None
            }
        };
        debug!(logged_in = current.is_some(), "Credential cache initialized");

        Self {
            store,
            current: Arc::new(Mutex::new(current)),
        }
    }

    /// The current credential, if logged in.
    pub fn get(&self) -> Option<Credential> {
        self.current.lock_or_recover().clone()
    }

    /// Whether a credential is held.
    pub fn is_logged_in(&self) -> bool {
        self.current.lock_or_recover().is_some()
    }

    /// Replace the credential and write it through to storage.
    pub fn set(&self, credential: Credential) {
        if let Err(e) = self.store.save(&credential) {
            warn!("Could not persist credential: {}", e);
        }
        *self.current.lock_or_recover() = Some(credential);
    }

    /// Drop the credential from memory and storage.
    pub fn clear(&self) {
        if let Err(e) = self.store.clear() {
            warn!("Could not remove stored credential: {}", e);
        }
        *self.current.lock_or_recover() = None;
    }

    /// Logout path: forget the credential everywhere.
    pub fn teardown(&self) {
        debug!("Tearing down credential state");
        self.clear();
    }
}

impl std::fmt::Debug for CredentialCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialCache")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}
