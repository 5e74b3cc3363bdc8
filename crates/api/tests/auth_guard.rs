//! HTTP-level integration tests for the session auth guard.
//!
//! Every protected route must answer 401 without a cookie and 403 with a
//! token that fails validation, before any handler logic runs.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, request_with_cookie, test_config, TEST_SECRET};
use huntbase_api::auth::jwt::{generate_token, JwtConfig, SignInPayload};

/// Protected routes and methods, one per resource family.
const PROTECTED: &[(&str, &str)] = &[
    ("POST", "/add-product"),
    ("GET", "/get-product/65a1b2c3d4e5f6a7b8c9d0e1"),
    ("GET", "/my-products/a@x.com"),
    ("PATCH", "/update-product/65a1b2c3d4e5f6a7b8c9d0e1"),
    ("PATCH", "/approve-products/65a1b2c3d4e5f6a7b8c9d0e1"),
    ("PATCH", "/vote/65a1b2c3d4e5f6a7b8c9d0e1"),
    ("GET", "/get-users/a@x.com"),
    ("PATCH", "/users/admin/65a1b2c3d4e5f6a7b8c9d0e1"),
    ("DELETE", "/users/delete/65a1b2c3d4e5f6a7b8c9d0e1"),
    ("GET", "/report-details/65a1b2c3d4e5f6a7b8c9d0e1"),
    ("DELETE", "/delete-content/65a1b2c3d4e5f6a7b8c9d0e1"),
    ("GET", "/get-coupon"),
    ("POST", "/add-coupon/SAVE20"),
    ("PATCH", "/update-coupon/65a1b2c3d4e5f6a7b8c9d0e1"),
    ("DELETE", "/coupon/delete/65a1b2c3d4e5f6a7b8c9d0e1"),
];

fn method(name: &str) -> Method {
    name.parse().unwrap()
}

/// JSON body for the routes that deserialize one; harmless elsewhere.
fn empty_body(method: &Method) -> Option<serde_json::Value> {
    (*method == Method::POST || *method == Method::PATCH).then(|| serde_json::json!({}))
}

/// Every protected route rejects a cookie-less request with 401.
#[tokio::test]
async fn test_missing_cookie_yields_401() {
    for (m, path) in PROTECTED {
        let m = method(m);
        let app = build_test_app().await;

        let response = request_with_cookie(app, m.clone(), path, None, empty_body(&m)).await;

        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "route {m} {path} must require a session cookie"
        );
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "unAuthorized Access");
    }
}

/// A cookie that is not a valid JWT rejects with 403.
#[tokio::test]
async fn test_tampered_token_yields_403() {
    for (m, path) in PROTECTED {
        let m = method(m);
        let app = build_test_app().await;

        let response = request_with_cookie(
            app,
            m.clone(),
            path,
            Some("token=not-a-real-jwt"),
            empty_body(&m),
        )
        .await;

        assert_eq!(
            response.status(),
            StatusCode::FORBIDDEN,
            "route {m} {path} must reject a tampered token"
        );
        let json = body_json(response).await;
        assert_eq!(json["message"], "Forbidden access");
    }
}

/// An expired token rejects with 403 even though the signature is valid.
#[tokio::test]
async fn test_expired_token_yields_403() {
    // A negative lifetime produces an exp in the past.
    let expired_config = JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiry_days: -1,
    };
    let identity = SignInPayload {
        email: "a@x.com".to_string(),
        display_name: None,
        photo_url: None,
    };
    let token = generate_token(&identity, &expired_config).unwrap();

    let app = build_test_app().await;
    let response = request_with_cookie(
        app,
        Method::GET,
        "/my-products/a@x.com",
        Some(&format!("token={token}")),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A token signed with a different secret rejects with 403.
#[tokio::test]
async fn test_foreign_secret_yields_403() {
    let foreign_config = JwtConfig {
        secret: "some-other-secret".to_string(),
        expiry_days: 365,
    };
    let identity = SignInPayload {
        email: "a@x.com".to_string(),
        display_name: None,
        photo_url: None,
    };
    let token = generate_token(&identity, &foreign_config).unwrap();

    // Sanity: the test config signs with a different secret.
    assert_ne!(test_config().jwt.secret, foreign_config.secret);

    let app = build_test_app().await;
    let response = request_with_cookie(
        app,
        Method::GET,
        "/my-products/a@x.com",
        Some(&format!("token={token}")),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Malformed object ids on authenticated routes answer 400 after the guard.
#[tokio::test]
async fn test_invalid_object_id_yields_400() {
    let identity = SignInPayload {
        email: "a@x.com".to_string(),
        display_name: None,
        photo_url: None,
    };
    let token = generate_token(&identity, &test_config().jwt).unwrap();

    let app = build_test_app().await;
    let response = request_with_cookie(
        app,
        Method::PATCH,
        "/vote/not-a-hex-id",
        Some(&format!("token={token}")),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}
