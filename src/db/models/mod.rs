//! Database Models

pub mod booking;

pub use booking::{Booking, BookingCreate, BookingUpdate};
