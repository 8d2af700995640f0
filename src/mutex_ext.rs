//! Poison-tolerant locking for the small pieces of shared session state.

use std::sync::{Mutex, MutexGuard};

/// Extension trait that recovers the data of a poisoned mutex.
pub(crate) trait MutexExt<T> {
    /// Lock, recovering the guard if a previous holder panicked.
    fn lock_or_recover(&self) -> MutexGuard<'_, T>;
}

impl<T> MutexExt<T> for Mutex<T> {
    #[track_caller]
    fn lock_or_recover(&self) -> MutexGuard<'_, T> {
        match self.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                let loc = std::panic::Location::caller();
                tracing::error!(
                    mutex_type = std::any::type_name::<T>(),
                    file = loc.file(),
                    line = loc.line(),
                    "Mutex poisoned, recovering inner value"
                );
                poisoned.into_inner()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_lock_or_recover_normal() {
        let mutex = Mutex::new(Some("abc123"));
        assert_eq!(*mutex.lock_or_recover(), Some("abc123"));
    }

    #[test]
    fn test_lock_or_recover_after_panic() {
        let mutex = Arc::new(Mutex::new(0));
        let mutex_clone = Arc::clone(&mutex);

        let _ = std::thread::spawn(move || {
            let mut guard = mutex_clone.lock().unwrap();
            *guard = 7;
            panic!("poison the lock");
        })
        .join();

        assert_eq!(*mutex.lock_or_recover(), 7);
    }
}
