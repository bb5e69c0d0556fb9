//! Application state shared across handlers.

use std::sync::{Arc, Mutex};

use phonebook_core::PhonebookStore;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The store sits behind a single
/// mutex so that every read or mutation observes a consistent entry sequence.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: Mutex<PhonebookStore>,
}

impl AppState {
    /// Create a new application state around `store`.
    #[must_use]
    pub fn new(config: ServerConfig, store: PhonebookStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: Mutex::new(store),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Run one store operation while holding the store lock.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the lock is poisoned.
    pub fn with_store<T>(&self, op: impl FnOnce(&mut PhonebookStore) -> T) -> Result<T, AppError> {
        let mut store = self
            .inner
            .store
            .lock()
            .map_err(|_| AppError::Internal("Store lock poisoned".to_string()))?;
        Ok(op(&mut store))
    }
}
