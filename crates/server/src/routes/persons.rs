//! Phonebook entry handlers (`/api/persons`).

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use phonebook_core::{Entry, NewEntry};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List every entry in insertion order.
///
/// # Errors
///
/// Returns `AppError::Internal` if the store lock is poisoned.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Entry>>> {
    let entries = state.with_store(|store| store.list_all().to_vec())?;
    Ok(Json(entries))
}

/// Fetch a single entry by id.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no entry has this id.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Entry>> {
    state
        .with_store(|store| store.find_by_id(&id).cloned())?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Create an entry from a `{name, number}` body.
///
/// # Errors
///
/// - `AppError::Store` if a field is missing or the name is taken
/// - `AppError::MalformedBody` if the body is not valid JSON of the right shape
#[instrument(skip(state, headers, body))]
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Entry>> {
    let candidate = parse_candidate(&headers, &body)?;

    let entry = state.with_store(|store| store.create(candidate))??;
    tracing::info!(id = %entry.id, name = %entry.name, "Created phonebook entry");

    Ok(Json(entry))
}

/// Delete an entry by id and return it.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no entry has this id.
#[instrument(skip(state))]
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Entry>> {
    let entry = state
        .with_store(|store| store.delete_by_id(&id))?
        .ok_or(AppError::NotFound)?;
    tracing::info!(id = %entry.id, name = %entry.name, number = %entry.number, "Deleted phonebook entry");

    Ok(Json(entry))
}

/// Decode the create candidate.
///
/// A body that is not JSON-typed, or is blank, reads as `{}` and so fails
/// store validation instead of body parsing.
fn parse_candidate(headers: &HeaderMap, body: &[u8]) -> Result<NewEntry> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewEntry::default());
    }

    Json::<NewEntry>::from_bytes(body)
        .map(|Json(candidate)| candidate)
        .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))
}

/// `application/json` or any `+json` media type, parameters ignored.
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .is_some_and(|mime| {
            mime.eq_ignore_ascii_case("application/json")
                || mime.to_ascii_lowercase().ends_with("+json")
        })
}
