//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router through `tower::ServiceExt::oneshot`, with
//! no TCP listener involved. Every endpoint except login and health needs a
//! bearer token, so the helpers thread one through each request.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use pawshot_api::auth::jwt::{generate_access_token, JwtConfig};
use pawshot_api::auth::password::hash_password;
use pawshot_api::config::ServerConfig;
use pawshot_api::router::build_app_router;
use pawshot_api::state::AppState;
use pawshot_core::roles::{ROLE_ADMIN, ROLE_USER};
use pawshot_db::repositories::UserRepo;

/// JWT secret used by every test router and minted token.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through the same [`build_app_router`] the production binary
/// uses, so tests exercise the identical middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Seed an active admin user and return a valid bearer token for them.
pub async fn seed_admin(pool: &PgPool) -> String {
    seed_user_with_role(pool, "admin@example.com", ROLE_ADMIN).await
}

/// Seed an active regular user and return a valid bearer token for them.
pub async fn seed_user(pool: &PgPool) -> String {
    seed_user_with_role(pool, "user@example.com", ROLE_USER).await
}

async fn seed_user_with_role(pool: &PgPool, email: &str, role: &str) -> String {
    let hash = hash_password("test-password-123").expect("hash");
    let user = UserRepo::create(pool, email, &hash, "Test User", role)
        .await
        .expect("seed user");
    generate_access_token(user.id, role, &test_config().jwt).expect("token")
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };
    app.oneshot(request).await.expect("response")
}

pub async fn get(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn get_anon(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    token: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(json)).await
}

pub async fn post_json_anon(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(json)).await
}

pub async fn post_empty(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    token: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(json)).await
}

pub async fn delete(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is valid JSON")
}

// ---------------------------------------------------------------------------
// Domain fixtures
// ---------------------------------------------------------------------------

/// Create an owner through the API, returning its id.
pub async fn seed_owner(pool: &PgPool, admin: &str, email: &str) -> i64 {
    let resp = post_json(
        build_test_app(pool.clone()),
        "/api/v1/owners",
        admin,
        serde_json::json!({"name": "Lisa", "email": email}),
    )
    .await;
    assert_eq!(resp.status(), axum::http::StatusCode::CREATED);
    body_json(resp).await["id"].as_i64().unwrap()
}

/// Create a pet for an owner through the API, returning its id.
pub async fn seed_pet(pool: &PgPool, admin: &str, owner_id: i64) -> i64 {
    let resp = post_json(
        build_test_app(pool.clone()),
        "/api/v1/pets",
        admin,
        serde_json::json!({"name": "Fluffy", "species": "Cat", "age": 3, "owner_id": owner_id}),
    )
    .await;
    assert_eq!(resp.status(), axum::http::StatusCode::CREATED);
    body_json(resp).await["id"].as_i64().unwrap()
}

/// Create a photographer through the API, returning its id.
pub async fn seed_photographer(pool: &PgPool, admin: &str, available: bool) -> i64 {
    let resp = post_json(
        build_test_app(pool.clone()),
        "/api/v1/photographers",
        admin,
        serde_json::json!({"name": "Jim", "specialty": "Portraits", "is_available": available}),
    )
    .await;
    assert_eq!(resp.status(), axum::http::StatusCode::CREATED);
    body_json(resp).await["id"].as_i64().unwrap()
}

/// Create a service through the API, returning its id.
pub async fn seed_service(pool: &PgPool, admin: &str, name: &str, price_cents: i64) -> i64 {
    let resp = post_json(
        build_test_app(pool.clone()),
        "/api/v1/services",
        admin,
        serde_json::json!({"name": name, "price_cents": price_cents}),
    )
    .await;
    assert_eq!(resp.status(), axum::http::StatusCode::CREATED);
    body_json(resp).await["id"].as_i64().unwrap()
}

/// Create a booking through the API, returning its id.
pub async fn seed_booking(
    pool: &PgPool,
    token: &str,
    owner_id: i64,
    pet_id: i64,
    photographer_id: i64,
    service_ids: &[i64],
) -> i64 {
    let resp = post_json(
        build_test_app(pool.clone()),
        "/api/v1/bookings",
        token,
        serde_json::json!({
            "booking_date": "2026-09-12T10:00:00Z",
            "location": "Studio A",
            "owner_id": owner_id,
            "pet_id": pet_id,
            "photographer_id": photographer_id,
            "service_ids": service_ids,
        }),
    )
    .await;
    assert_eq!(resp.status(), axum::http::StatusCode::CREATED);
    body_json(resp).await["id"].as_i64().unwrap()
}
