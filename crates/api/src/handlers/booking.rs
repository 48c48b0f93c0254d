//! Handlers for the `/bookings` resource and the filtered booking lists
//! nested under owners, photographers, and services.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pawshot_core::error::CoreError;
use pawshot_core::types::DbId;
use pawshot_db::models::booking::{
    BookingDetail, BookingServiceLine, BookingSummary, CreateBooking, UpdateBooking,
};
use pawshot_db::repositories::{BookingRepo, OwnerRepo, PhotographerRepo, ServiceRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// POST /api/v1/bookings
///
/// Any logged-in user may book; the repository validates every referenced
/// entity and rolls the whole write back on failure.
pub async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<BookingDetail>)> {
    let detail = BookingRepo::create(&state.pool, &input).await?;
    tracing::info!(
        booking_id = detail.id,
        user_id = user.user_id,
        services = detail.services.len(),
        "Booking created"
    );
    Ok((StatusCode::CREATED, Json(detail)))
}

/// GET /api/v1/bookings
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BookingSummary>>> {
    let bookings = BookingRepo::list(&state.pool).await?;
    Ok(Json(bookings))
}

/// GET /api/v1/bookings/{id}
pub async fn get_by_id(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BookingDetail>> {
    let detail = BookingRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    Ok(Json(detail))
}

/// PUT /api/v1/bookings/{id} (admin)
///
/// Replaces the booking's fields and its whole service selection.
pub async fn update(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBooking>,
) -> AppResult<Json<BookingDetail>> {
    let detail = BookingRepo::update(&state.pool, id, &input).await?;
    Ok(Json(detail))
}

/// DELETE /api/v1/bookings/{id} (admin)
pub async fn delete(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if BookingRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))
    }
}

/// GET /api/v1/bookings/{id}/services
pub async fn list_services(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<BookingServiceLine>>> {
    let lines = BookingRepo::services_for_booking(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    Ok(Json(lines))
}

/// GET /api/v1/owners/{id}/bookings
///
/// 404 when the owner does not exist, and again when the owner simply has
/// no bookings; the messages differ so clients can tell which happened.
pub async fn list_by_owner(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<BookingSummary>>> {
    if !OwnerRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Owner", id }));
    }
    let bookings = BookingRepo::list_by_owner(&state.pool, id).await?;
    if bookings.is_empty() {
        return Err(AppError::NotFound(format!(
            "No bookings found for owner {id}"
        )));
    }
    Ok(Json(bookings))
}

/// GET /api/v1/photographers/{id}/bookings
pub async fn list_by_photographer(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<BookingSummary>>> {
    if PhotographerRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Photographer",
            id,
        }));
    }
    let bookings = BookingRepo::list_by_photographer(&state.pool, id).await?;
    if bookings.is_empty() {
        return Err(AppError::NotFound(format!(
            "No bookings found for photographer {id}"
        )));
    }
    Ok(Json(bookings))
}

/// GET /api/v1/services/{id}/bookings
pub async fn list_by_service(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<BookingSummary>>> {
    if !ServiceRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }));
    }
    let bookings = BookingRepo::list_by_service(&state.pool, id).await?;
    if bookings.is_empty() {
        return Err(AppError::NotFound(format!(
            "No bookings found for service {id}"
        )));
    }
    Ok(Json(bookings))
}
