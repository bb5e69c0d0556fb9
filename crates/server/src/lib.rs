//! Phonebook server library.
//!
//! This crate provides the HTTP service as a library, allowing the router to
//! be built and exercised by tests without binding a real port.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;

pub use config::ServerConfig;
pub use state::AppState;

/// Build the complete application router around `state`.
pub fn app(state: AppState) -> Router {
    routes::routes()
        .fallback(routes::unknown_endpoint)
        .method_not_allowed_fallback(routes::unknown_endpoint)
        .layer(middleware::propagate_request_id_layer())
        .layer(middleware::access_log_layer())
        .layer(middleware::set_request_id_layer())
        .layer(middleware::cors_layer())
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use phonebook_core::{Entry, PhonebookStore};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn test_app() -> Router {
        app(AppState::new(ServerConfig::default(), PhonebookStore::seeded()))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(body: &Value) -> Request<Body> {
        Request::post("/api/persons")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_seeded_entries() {
        let (status, body) = send(&test_app(), get("/api/persons")).await;
        assert_eq!(status, StatusCode::OK);
        let entries: Vec<Entry> = serde_json::from_str(&body).unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].name, "Arto Hellas");
    }

    #[tokio::test]
    async fn test_show_entry() {
        let (status, body) = send(&test_app(), get("/api/persons/2")).await;
        assert_eq!(status, StatusCode::OK);
        let entry: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            entry,
            json!({"id": "2", "name": "Ada Lovelace", "number": "39-44-5323523"})
        );
    }

    #[tokio::test]
    async fn test_show_missing_entry() {
        let (status, body) = send(&test_app(), get("/api/persons/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, error::NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_create_and_info() {
        let app = test_app();
        let (status, body) = send(&app, post_json(&json!({"name": "X", "number": "1"}))).await;
        assert_eq!(status, StatusCode::OK);
        let entry: Entry = serde_json::from_str(&body).unwrap();
        assert_eq!(entry.id.as_str(), "5");

        let (status, body) = send(&app, get("/info")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Phonebook has info for 5 people"));
    }

    #[tokio::test]
    async fn test_create_without_content_type_is_missing_field() {
        let request = Request::post("/api/persons")
            .body(Body::from(r#"{"name": "X", "number": "1"}"#))
            .unwrap();
        let (status, body) = send(&test_app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"name or number missing"}"#);
    }

    #[tokio::test]
    async fn test_create_empty_json_body_is_missing_field() {
        let app = test_app();
        let request = Request::post("/api/persons")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"name or number missing"}"#);

        let (_, body) = send(&app, get("/api/persons")).await;
        let entries: Vec<Entry> = serde_json::from_str(&body).unwrap();
        assert_eq!(entries.len(), 4);
    }

    #[tokio::test]
    async fn test_trailing_slash_paths() {
        let app = test_app();
        let (status, body) = send(&app, get("/api/persons/")).await;
        assert_eq!(status, StatusCode::OK);
        let entries: Vec<Entry> = serde_json::from_str(&body).unwrap();
        assert_eq!(entries.len(), 4);

        let (status, body) = send(&app, get("/api/persons/3/")).await;
        assert_eq!(status, StatusCode::OK);
        let entry: Entry = serde_json::from_str(&body).unwrap();
        assert_eq!(entry.name, "Dan Abramov");

        let request = Request::post("/api/persons/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name": "X", "number": "1"}"#))
            .unwrap();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);

        let request = Request::delete("/api/persons/5/").body(Body::empty()).unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        let entry: Entry = serde_json::from_str(&body).unwrap();
        assert_eq!(entry.name, "X");
    }

    #[tokio::test]
    async fn test_create_malformed_json() {
        let request = Request::post("/api/persons")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(&test_app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"malformed JSON body"}"#);
    }

    #[tokio::test]
    async fn test_create_wrong_field_type() {
        let (status, _) = send(&test_app(), post_json(&json!({"name": "X", "number": 123}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_entry() {
        let app = test_app();
        let request = Request::delete("/api/persons/1").body(Body::empty()).unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        let entry: Entry = serde_json::from_str(&body).unwrap();
        assert_eq!(entry.name, "Arto Hellas");

        let request = Request::delete("/api/persons/1").body(Body::empty()).unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, error::NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_unknown_endpoint() {
        let (status, body) = send(&test_app(), get("/api/unknown")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"error":"unknown endpoint"}"#);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_unknown_endpoint() {
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/api/persons/1")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&test_app(), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"error":"unknown endpoint"}"#);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&test_app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let request = Request::get("/api/persons")
            .header(middleware::REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.headers()[middleware::REQUEST_ID_HEADER], "abc-123");
    }

    #[tokio::test]
    async fn test_request_id_is_generated() {
        let response = test_app().oneshot(get("/api/persons")).await.unwrap();
        let id = response.headers()[middleware::REQUEST_ID_HEADER]
            .to_str()
            .unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn test_request_id_on_error_responses() {
        let request = Request::get("/api/persons/99")
            .header(middleware::REQUEST_ID_HEADER, "lookup-miss")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[middleware::REQUEST_ID_HEADER], "lookup-miss");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = Request::get("/api/persons")
            .header(header::ORIGIN, "https://example.com")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
