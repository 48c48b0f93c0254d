//! Handlers for the `/services` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pawshot_core::error::CoreError;
use pawshot_core::types::DbId;
use pawshot_db::models::service::{CreateService, Service, ServiceDeleteOutcome, UpdateService};
use pawshot_db::repositories::ServiceRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// Query parameters for `GET /services`.
#[derive(Debug, Deserialize)]
pub struct ServiceListParams {
    pub min_price_cents: Option<i64>,
    pub max_price_cents: Option<i64>,
}

/// POST /api/v1/services (admin)
pub async fn create(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateService>,
) -> AppResult<(StatusCode, Json<Service>)> {
    if input.price_cents < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "price_cents must not be negative".into(),
        )));
    }
    let service = ServiceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// GET /api/v1/services?min_price_cents=&max_price_cents=
///
/// Only active services are listed; inactive (soft-deleted) ones stay
/// reachable by id for bookings that already reference them.
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<ServiceListParams>,
) -> AppResult<Json<Vec<Service>>> {
    let services = match (params.min_price_cents, params.max_price_cents) {
        (None, None) => ServiceRepo::list_active(&state.pool).await?,
        (min, max) => {
            let min = min.unwrap_or(0);
            let max = max.unwrap_or(i64::MAX);
            if min > max {
                return Err(AppError::Core(CoreError::Validation(
                    "min_price_cents must not exceed max_price_cents".into(),
                )));
            }
            ServiceRepo::list_by_price_range(&state.pool, min, max).await?
        }
    };
    Ok(Json(services))
}

/// GET /api/v1/services/{id}
pub async fn get_by_id(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Service>> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;
    Ok(Json(service))
}

/// PUT /api/v1/services/{id} (admin)
pub async fn update(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<Json<Service>> {
    if input.price_cents < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "price_cents must not be negative".into(),
        )));
    }
    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;
    Ok(Json(service))
}

/// DELETE /api/v1/services/{id} (admin)
///
/// Hard-deletes (204) when nothing references the service; deactivates and
/// returns the row (200) when a non-cancelled booking still uses it.
pub async fn delete(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    match ServiceRepo::delete(&state.pool, id).await? {
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        })),
        Some(ServiceDeleteOutcome::Deleted) => Ok(StatusCode::NO_CONTENT.into_response()),
        Some(ServiceDeleteOutcome::Deactivated(service)) => {
            Ok((StatusCode::OK, Json(service)).into_response())
        }
    }
}
