//! Integration tests for login and the two-tier access gate.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{
    body_json, build_test_app, get, get_anon, post_json, post_json_anon, seed_admin, seed_user,
};

#[sqlx::test(migrations = "../db/migrations")]
async fn login_returns_token_and_user_info(pool: PgPool) {
    seed_admin(&pool).await;

    let resp = post_json_anon(
        build_test_app(pool.clone()),
        "/api/v1/auth/login",
        serde_json::json!({"email": "admin@example.com", "password": "test-password-123"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let token = body["access_token"].as_str().unwrap().to_string();
    assert!(body["expires_in"].as_i64().unwrap() > 0);
    assert_eq!(body["user"]["role"], "admin");

    // The issued token is accepted by a protected endpoint.
    let resp = get(build_test_app(pool.clone()), "/api/v1/auth/me", &token).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["email"], "admin@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_wrong_password_is_unauthorized(pool: PgPool) {
    seed_admin(&pool).await;

    let resp = post_json_anon(
        build_test_app(pool.clone()),
        "/api/v1/auth/login",
        serde_json::json!({"email": "admin@example.com", "password": "wrong"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    // Unknown email and wrong password are indistinguishable.
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Invalid email or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_unknown_email_is_unauthorized(pool: PgPool) {
    let resp = post_json_anon(
        build_test_app(pool.clone()),
        "/api/v1/auth/login",
        serde_json::json!({"email": "nobody@example.com", "password": "whatever"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_token_is_unauthorized(pool: PgPool) {
    let resp = get_anon(build_test_app(pool.clone()), "/api/v1/bookings").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn garbage_token_is_unauthorized(pool: PgPool) {
    let resp = get(
        build_test_app(pool.clone()),
        "/api/v1/bookings",
        "not-a-real-token",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn regular_user_cannot_reach_admin_endpoints(pool: PgPool) {
    let user = seed_user(&pool).await;

    let resp = post_json(
        build_test_app(pool.clone()),
        "/api/v1/owners",
        &user,
        serde_json::json!({"name": "Lisa", "email": "lisa@example.com"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(resp).await["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn regular_user_can_read(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    let user = seed_user(&pool).await;
    common::seed_owner(&pool, &admin, "lisa@example.com").await;

    let resp = get(build_test_app(pool.clone()), "/api/v1/owners", &user).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_endpoint_is_public(pool: PgPool) {
    let resp = get_anon(build_test_app(pool.clone()), "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");
}
