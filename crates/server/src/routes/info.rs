//! Info page: entry count and server time.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Timestamp layout, e.g. `Thu Oct 15 2026 10:00:00 GMT+0000`.
const TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// HTML fragment for `GET /info`.
#[derive(Template, WebTemplate)]
#[template(path = "info.html")]
pub struct InfoTemplate {
    pub count: usize,
    pub timestamp: String,
}

/// Render the phonebook summary.
///
/// # Errors
///
/// Returns `AppError::Internal` if the store lock is poisoned.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<InfoTemplate> {
    let summary = state.with_store(|store| store.summary())?;

    Ok(InfoTemplate {
        count: summary.count,
        timestamp: summary.generated_at.format(TIMESTAMP_FORMAT).to_string(),
    })
}
