//! Store-backed HTTP integration tests.
//!
//! These run against a live MongoDB instance: set `MONGODB_TEST_URI`
//! (e.g. `mongodb://127.0.0.1:27017`) to enable them. Each test creates a
//! uniquely named database and drops it when done, so tests are isolated
//! and can run in parallel.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    body_json, build_app_with, get, post_json, request_with_cookie, session_cookie_for, test_db,
};
use huntbase_core::product::ProductStatus;
use huntbase_core::roles::Role;
use huntbase_db::models::product::{Product, ProductOwner};
use huntbase_db::models::report::{Report, ReportOwner};
use huntbase_db::models::user::{RegisterUser, User};
use huntbase_db::repositories::{CouponRepo, ProductRepo, ReportRepo, UserRepo};
use huntbase_db::Db;
use mongodb::bson::DateTime;

/// Insert an account with the given role so RBAC lookups resolve.
async fn seed_user(db: &Db, email: &str, role: Role) {
    let mut user = User::new(
        email,
        RegisterUser {
            display_name: None,
            photo_url: None,
        },
    );
    user.role = role;
    UserRepo::insert(db, &user).await.unwrap();
}

fn seed_product(name: &str, status: ProductStatus, votes: i64, tags: &[&str]) -> Product {
    Product {
        id: None,
        name: name.to_string(),
        description: None,
        image: None,
        external_links: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        owner: ProductOwner {
            email: "owner@x.com".to_string(),
            name: None,
            image: None,
        },
        status,
        votes,
        created_at: DateTime::now(),
    }
}

/// Insert a product and return its hex id.
async fn insert_product(db: &Db, product: &Product) -> String {
    let result = ProductRepo::create(db, product).await.unwrap();
    result.inserted_id.as_object_id().unwrap().to_hex()
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Registering the same email twice leaves a single unchanged account.
#[tokio::test]
async fn test_repeat_registration_is_idempotent() {
    let Some(db) = test_db().await else { return };

    let app = build_app_with(db.clone());
    let first = post_json(
        app,
        "/users/a@x.com",
        serde_json::json!({ "displayName": "Ada" }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);
    let json = body_json(first).await;
    assert!(json["insertedId"].is_string());

    // Second registration returns the stored document, not a new insert.
    let app = build_app_with(db.clone());
    let second = post_json(
        app,
        "/users/a@x.com",
        serde_json::json!({ "displayName": "Someone Else" }),
    )
    .await;
    assert_eq!(second.status(), StatusCode::OK);
    let json = body_json(second).await;
    assert_eq!(json["email"], "a@x.com");
    assert_eq!(json["displayName"], "Ada");
    assert_eq!(json["role"], "Customer");

    assert_eq!(UserRepo::count(&db).await.unwrap(), 1);

    db.drop().await.unwrap();
}

// ---------------------------------------------------------------------------
// Voting
// ---------------------------------------------------------------------------

/// Voting N times adds exactly N; there is no per-user dedup.
#[tokio::test]
async fn test_vote_three_times_adds_three() {
    let Some(db) = test_db().await else { return };

    let id = insert_product(&db, &seed_product("Widget", ProductStatus::Pending, 0, &[])).await;
    let cookie = session_cookie_for("voter@x.com");

    for _ in 0..3 {
        let app = build_app_with(db.clone());
        let response = request_with_cookie(
            app,
            Method::PATCH,
            &format!("/vote/{id}"),
            Some(&cookie),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let app = build_app_with(db.clone());
    let response = request_with_cookie(
        app,
        Method::GET,
        &format!("/get-product/{id}"),
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["votes"], 3);

    db.drop().await.unwrap();
}

// ---------------------------------------------------------------------------
// Trending
// ---------------------------------------------------------------------------

/// Trending returns at most six products, accepted only, by votes descending.
#[tokio::test]
async fn test_trending_caps_at_six_accepted_by_votes() {
    let Some(db) = test_db().await else { return };

    for votes in 0..8 {
        insert_product(
            &db,
            &seed_product(&format!("p{votes}"), ProductStatus::Accepted, votes, &[]),
        )
        .await;
    }
    // Highest vote count of all, but not accepted.
    insert_product(&db, &seed_product("hidden", ProductStatus::Pending, 100, &[])).await;

    let app = build_app_with(db.clone());
    let response = get(app, "/trending").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let products = json.as_array().unwrap();
    assert_eq!(products.len(), 6);

    let votes: Vec<i64> = products.iter().map(|p| p["votes"].as_i64().unwrap()).collect();
    assert_eq!(votes, vec![7, 6, 5, 4, 3, 2]);
    assert!(products.iter().all(|p| p["status"] == "Accepted"));

    db.drop().await.unwrap();
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Tag search is a case-insensitive literal substring; blank returns all.
#[tokio::test]
async fn test_tag_search_semantics() {
    let Some(db) = test_db().await else { return };

    insert_product(&db, &seed_product("a", ProductStatus::Accepted, 0, &["AI", "tools"])).await;
    insert_product(&db, &seed_product("b", ProductStatus::Accepted, 0, &["database"])).await;
    insert_product(&db, &seed_product("c", ProductStatus::Accepted, 0, &["c++"])).await;

    // Case-insensitive match against the stored "AI" tag.
    let app = build_app_with(db.clone());
    let response = get(app, "/all-products?search=ai").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "a");

    // Metacharacters match literally ("c%2B%2B" decodes to "c++").
    let app = build_app_with(db.clone());
    let response = get(app, "/all-products?search=c%2B%2B").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "c");

    // A blank term returns the full catalog.
    let app = build_app_with(db.clone());
    let response = get(app, "/all-products?search=").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 3);

    db.drop().await.unwrap();
}

// ---------------------------------------------------------------------------
// Coupons
// ---------------------------------------------------------------------------

/// A duplicate coupon code answers 400 and leaves a single document.
#[tokio::test]
async fn test_duplicate_coupon_rejected_without_insert() {
    let Some(db) = test_db().await else { return };

    seed_user(&db, "admin@x.com", Role::Admin).await;
    let cookie = session_cookie_for("admin@x.com");
    let body = serde_json::json!({ "discount": 20, "expiry": "2027-01-01" });

    let app = build_app_with(db.clone());
    let response = request_with_cookie(
        app,
        Method::POST,
        "/add-coupon/SAVE20",
        Some(&cookie),
        Some(body.clone()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = build_app_with(db.clone());
    let response = request_with_cookie(
        app,
        Method::POST,
        "/add-coupon/SAVE20",
        Some(&cookie),
        Some(body),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Coupon already exists");

    assert_eq!(CouponRepo::list_all(&db).await.unwrap().len(), 1);

    db.drop().await.unwrap();
}

// ---------------------------------------------------------------------------
// Report resolution
// ---------------------------------------------------------------------------

/// The combined deletion always reports both outcomes, including a zero
/// report count when nothing referenced the product.
#[tokio::test]
async fn test_combined_deletion_reports_both_outcomes() {
    let Some(db) = test_db().await else { return };

    seed_user(&db, "mod@x.com", Role::Moderator).await;
    let cookie = session_cookie_for("mod@x.com");

    let reported = insert_product(&db, &seed_product("bad", ProductStatus::Accepted, 0, &[])).await;
    let report = Report {
        id: None,
        report_id: reported.clone(),
        owner: ReportOwner {
            email: "reporter@x.com".to_string(),
        },
        reason: Some("spam".to_string()),
        created_at: DateTime::now(),
    };
    ReportRepo::create(&db, &report).await.unwrap();

    let app = build_app_with(db.clone());
    let response = request_with_cookie(
        app,
        Method::DELETE,
        &format!("/delete-content/{reported}"),
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["productDelete"]["deletedCount"], 1);
    assert_eq!(json["reportDelete"]["deletedCount"], 1);

    // Deleting a product no report references still reports both sides.
    let unreported = insert_product(&db, &seed_product("ok", ProductStatus::Accepted, 0, &[])).await;
    let app = build_app_with(db.clone());
    let response = request_with_cookie(
        app,
        Method::DELETE,
        &format!("/delete-content/{unreported}"),
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["productDelete"]["deletedCount"], 1);
    assert_eq!(json["reportDelete"]["deletedCount"], 0);

    db.drop().await.unwrap();
}
