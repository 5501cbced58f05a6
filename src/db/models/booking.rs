//! Booking Model

use serde::{Deserialize, Serialize};

/// Booking entity — a reservation for a date/time slot
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: i64,
    pub name: String,
    /// Opaque comparison key, not parsed as a calendar date
    pub date: String,
    /// Opaque comparison key, not parsed as a clock time
    pub time: String,
    pub people: i32,
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub name: String,
    pub date: String,
    pub time: String,
    pub people: i32,
}

/// Update booking payload
///
/// `date` is only consulted for the slot conflict check; the stored
/// booking keeps its original name and date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingUpdate {
    pub date: String,
    pub time: String,
    pub people: i32,
}
