//! Integration tests for the phonebook server.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p phonebook-integration-tests
//! ```
//!
//! Each test starts its own server on an OS-assigned port with a freshly
//! seeded store, so tests never observe each other's writes.

#![cfg_attr(not(test), forbid(unsafe_code))]

use phonebook_core::PhonebookStore;
use phonebook_server::{AppState, ServerConfig};

/// A running server and a client pointed at it.
pub struct TestServer {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestServer {
    /// Spin up a server over the seeded store.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn seeded() -> Self {
        Self::with_store(PhonebookStore::seeded()).await
    }

    /// Spin up a server over `store`.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn with_store(store: PhonebookStore) -> Self {
        let app = phonebook_server::app(AppState::new(ServerConfig::default(), store));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let port = listener
            .local_addr()
            .expect("Failed to read test listener address")
            .port();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        Self {
            client: reqwest::Client::new(),
            base_url: format!("http://127.0.0.1:{port}"),
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
