//! Handlers for the `/owners` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pawshot_core::error::CoreError;
use pawshot_core::types::DbId;
use pawshot_db::models::owner::{CreateOwner, Owner, UpdateOwner};
use pawshot_db::models::pet::Pet;
use pawshot_db::repositories::{OwnerRepo, PetRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// POST /api/v1/owners (admin)
pub async fn create(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateOwner>,
) -> AppResult<(StatusCode, Json<Owner>)> {
    let owner = OwnerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(owner)))
}

/// GET /api/v1/owners
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Owner>>> {
    let owners = OwnerRepo::list(&state.pool).await?;
    Ok(Json(owners))
}

/// GET /api/v1/owners/{id}
pub async fn get_by_id(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Owner>> {
    let owner = OwnerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Owner", id }))?;
    Ok(Json(owner))
}

/// GET /api/v1/owners/{id}/pets
pub async fn list_pets(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Pet>>> {
    if !OwnerRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Owner", id }));
    }
    let pets = PetRepo::list_by_owner(&state.pool, id).await?;
    Ok(Json(pets))
}

/// PUT /api/v1/owners/{id} (admin)
pub async fn update(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOwner>,
) -> AppResult<Json<Owner>> {
    let owner = OwnerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Owner", id }))?;
    Ok(Json(owner))
}

/// DELETE /api/v1/owners/{id} (admin)
///
/// Cascades to the owner's pets, bookings, and notifications.
pub async fn delete(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if OwnerRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Owner", id }))
    }
}
