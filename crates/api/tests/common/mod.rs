//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router with the full middleware stack. The
//! MongoDB client connects lazily, so tests that never reach a repository
//! (auth rejections, session issuance, validation failures) run without a
//! database. Store-backed tests call [`test_db`] instead, which is gated
//! on `MONGODB_TEST_URI`.

// Each test binary compiles its own copy of this module and uses a subset
// of the helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use huntbase_api::auth::jwt::{generate_token, JwtConfig, SignInPayload};
use huntbase_api::config::ServerConfig;
use huntbase_api::router::build_app_router;
use huntbase_api::state::AppState;

/// Secret used to sign tokens in tests.
pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and development cookie flags.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        production: false,
        image_upload_api_key: None,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiry_days: 365,
        },
    }
}

/// Build the full application router over the given database handle.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_app_with(db: huntbase_db::Db) -> Router {
    let config = test_config();
    let state = AppState {
        db,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the application router over a lazily connecting client.
///
/// Suitable for tests that resolve before any repository call.
pub async fn build_test_app() -> Router {
    let db = huntbase_db::connect("mongodb://127.0.0.1:27017", "huntbase-test")
        .await
        .expect("client construction is local and must succeed");
    build_app_with(db)
}

/// Connect to the MongoDB instance named by `MONGODB_TEST_URI` and create a
/// uniquely named database for the calling test.
///
/// Returns `None` when the variable is unset so store-backed tests skip on
/// machines without a reachable mongod. Callers drop the database when done.
pub async fn test_db() -> Option<huntbase_db::Db> {
    let uri = std::env::var("MONGODB_TEST_URI").ok()?;

    let name = format!("huntbase-test-{}", uuid::Uuid::new_v4().simple());
    let db = huntbase_db::connect(&uri, &name)
        .await
        .expect("client construction must succeed");
    huntbase_db::ensure_indexes(&db)
        .await
        .expect("index bootstrap must succeed");

    Some(db)
}

/// `Cookie` header value holding a freshly signed session for `email`.
pub fn session_cookie_for(email: &str) -> String {
    let identity = SignInPayload {
        email: email.to_string(),
        display_name: None,
        photo_url: None,
    };
    let token = generate_token(&identity, &test_config().jwt)
        .expect("token generation must succeed");
    format!("token={token}")
}

/// Send a GET request.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a JSON POST request.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a request with an optional `Cookie` header and optional JSON body.
pub async fn request_with_cookie(
    app: Router,
    method: Method,
    path: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be JSON")
}

/// Collect a response body as a UTF-8 string.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("response body must be UTF-8")
}
