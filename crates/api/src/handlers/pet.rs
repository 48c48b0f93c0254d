//! Handlers for the `/pets` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pawshot_core::error::CoreError;
use pawshot_core::types::DbId;
use pawshot_db::models::pet::{CreatePet, Pet, UpdatePet};
use pawshot_db::repositories::{OwnerRepo, PetRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// Query parameters for `GET /pets`.
#[derive(Debug, Deserialize)]
pub struct PetListParams {
    /// Restrict to one species (case-insensitive).
    pub species: Option<String>,
}

/// POST /api/v1/pets (admin)
pub async fn create(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreatePet>,
) -> AppResult<(StatusCode, Json<Pet>)> {
    if !OwnerRepo::exists(&state.pool, input.owner_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Owner",
            id: input.owner_id,
        }));
    }
    let pet = PetRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(pet)))
}

/// GET /api/v1/pets?species=
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<PetListParams>,
) -> AppResult<Json<Vec<Pet>>> {
    let pets = match params.species.as_deref() {
        Some(species) => PetRepo::list_by_species(&state.pool, species).await?,
        None => PetRepo::list(&state.pool).await?,
    };
    Ok(Json(pets))
}

/// GET /api/v1/pets/{id}
pub async fn get_by_id(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Pet>> {
    let pet = PetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pet", id }))?;
    Ok(Json(pet))
}

/// PUT /api/v1/pets/{id} (admin)
pub async fn update(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePet>,
) -> AppResult<Json<Pet>> {
    if !OwnerRepo::exists(&state.pool, input.owner_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Owner",
            id: input.owner_id,
        }));
    }
    let pet = PetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pet", id }))?;
    Ok(Json(pet))
}

/// DELETE /api/v1/pets/{id} (admin)
pub async fn delete(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PetRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Pet", id }))
    }
}
