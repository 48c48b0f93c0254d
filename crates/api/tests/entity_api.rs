//! Integration tests for owner, pet, and photographer endpoints.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{
    body_json, build_test_app, delete, get, post_json, put_json, seed_admin, seed_owner, seed_pet,
    seed_photographer,
};

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_crud_round_trip(pool: PgPool) {
    let admin = seed_admin(&pool).await;

    let resp = post_json(
        build_test_app(pool.clone()),
        "/api/v1/owners",
        &admin,
        serde_json::json!({
            "name": "Lisa",
            "email": "lisa@example.com",
            "phone": "555-0101",
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let owner = body_json(resp).await;
    let id = owner["id"].as_i64().unwrap();
    assert_eq!(owner["phone"], "555-0101");
    assert!(owner["address"].is_null());

    let resp = put_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/owners/{id}"),
        &admin,
        serde_json::json!({
            "name": "Lisa M.",
            "email": "lisa@example.com",
            "address": "12 Oak Lane",
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["name"], "Lisa M.");
    assert_eq!(updated["address"], "12 Oak Lane");
    // Full replacement: phone was omitted, so it is gone.
    assert!(updated["phone"].is_null());

    let resp = delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/owners/{id}"),
        &admin,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/owners/{id}"),
        &admin,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_owner_email_conflicts(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    seed_owner(&pool, &admin, "lisa@example.com").await;

    let resp = post_json(
        build_test_app(pool.clone()),
        "/api/v1/owners",
        &admin,
        serde_json::json!({"name": "Other Lisa", "email": "lisa@example.com"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(resp).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_pets_subresource(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    let owner_id = seed_owner(&pool, &admin, "lisa@example.com").await;
    seed_pet(&pool, &admin, owner_id).await;
    seed_pet(&pool, &admin, owner_id).await;

    let resp = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/owners/{owner_id}/pets"),
        &admin,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 2);

    // An unknown owner yields 404, not an empty list.
    let resp = get(
        build_test_app(pool.clone()),
        "/api/v1/owners/999999/pets",
        &admin,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_owner_cascades_to_pets(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    let owner_id = seed_owner(&pool, &admin, "lisa@example.com").await;
    let pet_id = seed_pet(&pool, &admin, owner_id).await;

    let resp = delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/owners/{owner_id}"),
        &admin,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/pets/{pet_id}"),
        &admin,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn pet_create_requires_existing_owner(pool: PgPool) {
    let admin = seed_admin(&pool).await;

    let resp = post_json(
        build_test_app(pool.clone()),
        "/api/v1/pets",
        &admin,
        serde_json::json!({"name": "Ghost", "species": "Cat", "owner_id": 999999}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn pets_filter_by_species_is_case_insensitive(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    let owner_id = seed_owner(&pool, &admin, "lisa@example.com").await;
    seed_pet(&pool, &admin, owner_id).await; // species "Cat"

    post_json(
        build_test_app(pool.clone()),
        "/api/v1/pets",
        &admin,
        serde_json::json!({"name": "Rex", "species": "Dog", "age": 5, "owner_id": owner_id}),
    )
    .await;

    let resp = get(
        build_test_app(pool.clone()),
        "/api/v1/pets?species=cat",
        &admin,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let pets = body_json(resp).await;
    let pets = pets.as_array().unwrap().clone();
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0]["species"], "Cat");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn photographer_availability_filter(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    seed_photographer(&pool, &admin, true).await;
    let busy = seed_photographer(&pool, &admin, false).await;

    let resp = get(
        build_test_app(pool.clone()),
        "/api/v1/photographers",
        &admin,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 2);

    let resp = get(
        build_test_app(pool.clone()),
        "/api/v1/photographers?available=true",
        &admin,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let available = body_json(resp).await;
    let available = available.as_array().unwrap().clone();
    assert_eq!(available.len(), 1);
    assert_ne!(available[0]["id"].as_i64(), Some(busy));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn photographer_with_bookings_cannot_be_deleted(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    let owner_id = seed_owner(&pool, &admin, "lisa@example.com").await;
    let pet_id = seed_pet(&pool, &admin, owner_id).await;
    let photographer_id = seed_photographer(&pool, &admin, true).await;
    common::seed_booking(&pool, &admin, owner_id, pet_id, photographer_id, &[]).await;

    let resp = delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/photographers/{photographer_id}"),
        &admin,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}
