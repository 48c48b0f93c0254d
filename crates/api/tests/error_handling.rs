//! Integration tests for the error response surface.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use sqlx::PgPool;
use tower::ServiceExt;

use common::{body_json, build_test_app, get_anon, seed_admin};

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_route_is_404(pool: PgPool) {
    let resp = get_anon(build_test_app(pool.clone()), "/api/v1/nope").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_json_body_is_rejected(pool: PgPool) {
    let admin = seed_admin(&pool).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/owners")
        .header("authorization", format!("Bearer {admin}"))
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = build_test_app(pool.clone()).oneshot(request).await.unwrap();
    // axum's Json extractor rejects before the handler runs.
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_required_field_is_unprocessable(pool: PgPool) {
    let admin = seed_admin(&pool).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/owners")
        .header("authorization", format!("Bearer {admin}"))
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name": "Lisa"}"#))
        .unwrap();
    let resp = build_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_content_type_is_unsupported_media_type(pool: PgPool) {
    let admin = seed_admin(&pool).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/owners")
        .header("authorization", format!("Bearer {admin}"))
        .body(Body::from(r#"{"name": "Lisa", "email": "l@example.com"}"#))
        .unwrap();
    let resp = build_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn error_body_carries_message_and_code(pool: PgPool) {
    let resp = get_anon(build_test_app(pool.clone()), "/api/v1/bookings").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(resp).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert!(body["error"].as_str().is_some());
}
