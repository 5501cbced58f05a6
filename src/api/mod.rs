//! API Routing Module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`bookings`] - booking management endpoints

pub mod bookings;
pub mod health;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;

/// Assemble the full application router
///
/// CORS is open for the booking API, mirroring the public-facing
/// reservation form it serves.
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(bookings::router().layer(CorsLayer::permissive()))
}
