//! Handlers for the `/photographers` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pawshot_core::error::CoreError;
use pawshot_core::types::DbId;
use pawshot_db::models::photographer::{CreatePhotographer, Photographer, UpdatePhotographer};
use pawshot_db::repositories::PhotographerRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// Query parameters for `GET /photographers`.
#[derive(Debug, Deserialize)]
pub struct PhotographerListParams {
    /// When true, return only photographers currently accepting bookings.
    #[serde(default)]
    pub available: bool,
}

/// POST /api/v1/photographers (admin)
pub async fn create(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreatePhotographer>,
) -> AppResult<(StatusCode, Json<Photographer>)> {
    let photographer = PhotographerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(photographer)))
}

/// GET /api/v1/photographers?available=true
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<PhotographerListParams>,
) -> AppResult<Json<Vec<Photographer>>> {
    let photographers = PhotographerRepo::list(&state.pool, params.available).await?;
    Ok(Json(photographers))
}

/// GET /api/v1/photographers/{id}
pub async fn get_by_id(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Photographer>> {
    let photographer = PhotographerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Photographer",
            id,
        }))?;
    Ok(Json(photographer))
}

/// PUT /api/v1/photographers/{id} (admin)
pub async fn update(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePhotographer>,
) -> AppResult<Json<Photographer>> {
    let photographer = PhotographerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Photographer",
            id,
        }))?;
    Ok(Json(photographer))
}

/// DELETE /api/v1/photographers/{id} (admin)
///
/// Returns 409 while bookings still reference the photographer (FK RESTRICT).
pub async fn delete(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PhotographerRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Photographer",
            id,
        }))
    }
}
