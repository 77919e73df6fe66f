//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, Store};

/// The state of the REST server.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The in-memory store shared by all request handlers.
    pub store: Arc<Mutex<Store>>,
}

impl AppState {
    /// Create a new [AppState] with an empty store.
    pub fn new() -> Self {
        Self::with_store(Store::new())
    }

    /// Create a new [AppState] that serves `store`.
    pub fn with_store(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Acquire exclusive access to the store.
    ///
    /// # Errors
    ///
    /// Returns [Error::StoreLockError] if the lock is poisoned.
    pub fn lock_store(&self) -> Result<MutexGuard<'_, Store>, Error> {
        self.store.lock().map_err(|error| {
            tracing::error!("could not acquire store lock: {error}");
            Error::StoreLockError
        })
    }
}
