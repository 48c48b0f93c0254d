//! Handlers for the `/notifications` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pawshot_core::error::CoreError;
use pawshot_core::types::DbId;
use pawshot_db::models::notification::{CreateNotification, Notification};
use pawshot_db::repositories::{NotificationRepo, OwnerRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationListParams {
    pub owner_id: Option<DbId>,
    #[serde(default)]
    pub unread_only: bool,
}

/// POST /api/v1/notifications (admin)
pub async fn create(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateNotification>,
) -> AppResult<(StatusCode, Json<Notification>)> {
    // The column is VARCHAR(500), which counts characters, not bytes.
    if input.message.is_empty() || input.message.chars().count() > 500 {
        return Err(AppError::Core(CoreError::Validation(
            "message must be between 1 and 500 characters".into(),
        )));
    }
    if !OwnerRepo::exists(&state.pool, input.owner_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Owner",
            id: input.owner_id,
        }));
    }
    let notification = NotificationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

/// GET /api/v1/notifications?owner_id=&unread_only=
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<NotificationListParams>,
) -> AppResult<Json<Vec<Notification>>> {
    if let Some(owner_id) = params.owner_id {
        if !OwnerRepo::exists(&state.pool, owner_id).await? {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Owner",
                id: owner_id,
            }));
        }
    }
    let notifications =
        NotificationRepo::list(&state.pool, params.owner_id, params.unread_only).await?;
    Ok(Json(notifications))
}

/// GET /api/v1/notifications/{id}
pub async fn get_by_id(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Notification>> {
    let notification = NotificationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }))?;
    Ok(Json(notification))
}

/// POST /api/v1/notifications/{id}/read
pub async fn mark_read(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if NotificationRepo::mark_read(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }))
    }
}

/// DELETE /api/v1/notifications/{id} (admin)
pub async fn delete(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if NotificationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }))
    }
}
