//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health            - Liveness check
//! GET    /info              - Entry count and server time (HTML)
//!
//! # Phonebook API
//! GET    /api/persons       - List all entries
//! POST   /api/persons       - Create an entry from {name, number}
//! GET    /api/persons/{id}  - Fetch one entry
//! DELETE /api/persons/{id}  - Delete one entry
//! ```
//!
//! Each path also matches with a trailing slash.
//!
//! Anything else, including a known path with an unsupported method, gets
//! `404 {"error": "unknown endpoint"}`.

pub mod info;
pub mod persons;

use axum::{
    Router,
    routing::{MethodRouter, get},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create all routes for the phonebook.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info::show))
        .route("/api/persons", person_collection())
        .route("/api/persons/", person_collection())
        .route("/api/persons/{id}", person_member())
        .route("/api/persons/{id}/", person_member())
}

/// `GET` and `POST` on the collection path.
fn person_collection() -> MethodRouter<AppState> {
    get(persons::index).post(persons::create)
}

/// `GET` and `DELETE` on an entry path.
fn person_member() -> MethodRouter<AppState> {
    get(persons::show).delete(persons::destroy)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Fallback for unmatched paths and methods.
pub async fn unknown_endpoint() -> AppError {
    AppError::UnknownEndpoint
}
