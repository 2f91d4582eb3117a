//! HTTP routes.
//!
//! Each collection is read and replaced as a whole. GET responses carry an
//! `ETag` with the collection's content hash; a PUT that sends it back in
//! `If-Match` is rejected with 412 if someone else saved in between. `If-Match`
//! may list several tags; the PUT goes through if any of them is current. A PUT
//! without `If-Match` always wins.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::app::App;
use crate::infrastructure::ports::{CollectionVersion, ExpectedVersions, RepoError, Versioned};
use crate::use_cases::ManagementError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route(
            "/api/artifacts",
            get(list_artifacts).put(replace_artifacts),
        )
        .route(
            "/api/possibilities",
            get(list_possibilities).put(replace_possibilities),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Artifacts
// =============================================================================

async fn list_artifacts(State(app): State<Arc<App>>) -> Result<Response, ApiError> {
    let artifacts = app.use_cases.management.artifact.list().await?;
    versioned_json(artifacts)
}

async fn replace_artifacts(
    State(app): State<Arc<App>>,
    headers: HeaderMap,
    body: Result<Json<Vec<Value>>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(records) = body?;
    let version = app
        .use_cases
        .management
        .artifact
        .replace_all(records, if_match(&headers))
        .await?;
    saved(version)
}

// =============================================================================
// Possibilities
// =============================================================================

async fn list_possibilities(State(app): State<Arc<App>>) -> Result<Response, ApiError> {
    let possibilities = app.use_cases.management.possibility.list().await?;
    versioned_json(possibilities)
}

async fn replace_possibilities(
    State(app): State<Arc<App>>,
    headers: HeaderMap,
    body: Result<Json<Vec<Value>>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(records) = body?;
    let version = app
        .use_cases
        .management
        .possibility
        .replace_all(records, if_match(&headers))
        .await?;
    saved(version)
}

// =============================================================================
// Helpers
// =============================================================================

fn versioned_json<T: Serialize>(collection: Versioned<T>) -> Result<Response, ApiError> {
    let etag = etag_header(&collection.version)?;
    Ok(([(header::ETAG, etag)], Json(collection.records)).into_response())
}

fn saved(version: CollectionVersion) -> Result<Response, ApiError> {
    let etag = etag_header(&version)?;
    Ok(([(header::ETAG, etag)], Json(json!({ "success": true }))).into_response())
}

fn etag_header(version: &CollectionVersion) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(&format!("\"{version}\""))
        .map_err(|e| ApiError::Internal(e.to_string()))
}

/// Acceptable versions from `If-Match`, which may list several tags.
/// `*`, or no usable tag at all, means "no check".
fn if_match(headers: &HeaderMap) -> Option<ExpectedVersions> {
    let mut versions = Vec::new();
    for value in headers.get_all(header::IF_MATCH) {
        let Ok(value) = value.to_str() else {
            continue;
        };
        for entry in value.split(',') {
            let entry = entry.trim();
            let entry = entry.strip_prefix("W/").unwrap_or(entry);
            let tag = entry.trim_matches('"');
            if tag == "*" {
                return None;
            }
            if !tag.is_empty() {
                versions.push(CollectionVersion::new(tag));
            }
        }
    }
    ExpectedVersions::any_of(versions)
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    PreconditionFailed(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::PreconditionFailed(msg) => (StatusCode::PRECONDITION_FAILED, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ManagementError> for ApiError {
    fn from(e: ManagementError) -> Self {
        match e {
            ManagementError::InvalidInput(msg) => ApiError::BadRequest(msg),
            ManagementError::Repo(e) => e.into(),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        if e.is_conflict() {
            ApiError::PreconditionFailed(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    use crate::infrastructure::json_store::JsonCollectionStore;

    fn router(dir: &std::path::Path) -> Router {
        let app = Arc::new(App::with_json_store(JsonCollectionStore::shared(dir)));
        routes().with_state(app)
    }

    fn put(path: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::PUT)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn get_req(path: &str) -> Request<Body> {
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request")
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn health_is_ok() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = router(dir.path());

        for path in ["/", "/api/health"] {
            let response = app.clone().oneshot(get_req(path)).await.expect("response");
            assert_eq!(response.status(), StatusCode::OK);
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .expect("body");
            assert_eq!(&bytes[..], b"OK");
        }
    }

    #[tokio::test]
    async fn empty_store_serves_empty_arrays() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = router(dir.path());

        for path in ["/api/artifacts", "/api/possibilities"] {
            let response = app.clone().oneshot(get_req(path)).await.expect("response");
            assert_eq!(response.status(), StatusCode::OK);
            assert!(response.headers().contains_key(header::ETAG));
            assert_eq!(body_json(response).await, json!([]));
        }
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = router(dir.path());
        let possibilities = json!([
            { "id": "dust", "name": "Dust" },
            { "id": "ash", "name": "Ash", "description": "grey" }
        ]);

        let response = app
            .clone()
            .oneshot(put("/api/possibilities", possibilities.clone()))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "success": true }));

        let response = app
            .oneshot(get_req("/api/possibilities"))
            .await
            .expect("response");
        assert_eq!(body_json(response).await, possibilities);
    }

    #[tokio::test]
    async fn invalid_record_is_a_400_with_error_body() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = router(dir.path());

        let response = app
            .oneshot(put(
                "/api/artifacts",
                json!([{ "id": "a", "name": "A", "possibilities": [{ "possibility": "x", "count": 0 }] }]),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().is_some_and(|e| e.contains("artifacts[0]")));
        assert!(!dir.path().join("artifacts.json").exists());
    }

    #[tokio::test]
    async fn non_array_body_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = router(dir.path());

        let response = app
            .oneshot(put("/api/possibilities", json!({ "id": "dust" })))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await.get("error").is_some());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_500_with_message() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("artifacts.json"), "[{").expect("seed");
        let app = router(dir.path());

        let response = app
            .oneshot(get_req("/api/artifacts"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"].as_str().is_some_and(|e| e.contains("artifacts.json")));
    }

    #[tokio::test]
    async fn stale_if_match_is_412_and_fresh_one_succeeds() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = router(dir.path());

        let response = app
            .clone()
            .oneshot(get_req("/api/artifacts"))
            .await
            .expect("response");
        let etag = response
            .headers()
            .get(header::ETAG)
            .cloned()
            .expect("etag");

        let mut first = put("/api/artifacts", json!([{ "id": "ring", "name": "Ring", "description": "" }]));
        first.headers_mut().insert(header::IF_MATCH, etag.clone());
        let response = app.clone().oneshot(first).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let mut second = put("/api/artifacts", json!([]));
        second.headers_mut().insert(header::IF_MATCH, etag);
        let response = app.clone().oneshot(second).await.expect("response");
        assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);

        let response = app
            .oneshot(get_req("/api/artifacts"))
            .await
            .expect("response");
        let body = body_json(response).await;
        assert_eq!(body[0]["id"], "ring");
    }

    #[tokio::test]
    async fn put_without_if_match_is_last_write_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = router(dir.path());

        for name in ["First", "Second"] {
            let response = app
                .clone()
                .oneshot(put("/api/possibilities", json!([{ "id": "p", "name": name }])))
                .await
                .expect("response");
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .oneshot(get_req("/api/possibilities"))
            .await
            .expect("response");
        assert_eq!(body_json(response).await[0]["name"], "Second");
    }

    #[test]
    fn if_match_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(if_match(&headers), None);

        headers.insert(header::IF_MATCH, HeaderValue::from_static("W/\"abc\""));
        assert_eq!(if_match(&headers), ExpectedVersions::any_of([CollectionVersion::new("abc")]));

        headers.insert(header::IF_MATCH, HeaderValue::from_static("*"));
        assert_eq!(if_match(&headers), None);
    }

    #[test]
    fn if_match_list_keeps_every_tag() {
        let mut headers = HeaderMap::new();
        headers.insert(header::IF_MATCH, HeaderValue::from_static("\"abc\", W/\"def\""));

        let expected = if_match(&headers).expect("tags");
        assert!(expected.matches(&CollectionVersion::new("abc")));
        assert!(expected.matches(&CollectionVersion::new("def")));
        assert!(!expected.matches(&CollectionVersion::new("abc\", \"def")));
    }

    #[tokio::test]
    async fn if_match_list_containing_current_tag_succeeds() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = router(dir.path());

        let response = app
            .clone()
            .oneshot(get_req("/api/possibilities"))
            .await
            .expect("response");
        let etag = response
            .headers()
            .get(header::ETAG)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .expect("etag");

        let mut request = put("/api/possibilities", json!([{ "id": "dust", "name": "Dust" }]));
        let list = HeaderValue::from_str(&format!("\"stale\", {etag}")).expect("header");
        request.headers_mut().insert(header::IF_MATCH, list);
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let mut request = put("/api/possibilities", json!([]));
        let list = HeaderValue::from_static("\"stale\", \"older\"");
        request.headers_mut().insert(header::IF_MATCH, list);
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
    }
}
