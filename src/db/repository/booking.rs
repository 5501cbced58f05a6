//! Booking Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Booking, BookingCreate};
use sqlx::SqlitePool;

/// Find all bookings in insertion order
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Booking>> {
    let bookings = sqlx::query_as::<_, Booking>(
        "SELECT id, name, date, time, people FROM bookings ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(bookings)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Booking>> {
    let booking = sqlx::query_as::<_, Booking>(
        "SELECT id, name, date, time, people FROM bookings WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(booking)
}

/// Find the booking holding a (date, time) slot, if any
pub async fn find_by_slot(
    pool: &SqlitePool,
    date: &str,
    time: &str,
) -> RepoResult<Option<Booking>> {
    let booking = sqlx::query_as::<_, Booking>(
        "SELECT id, name, date, time, people FROM bookings WHERE date = ? AND time = ? LIMIT 1",
    )
    .bind(date)
    .bind(time)
    .fetch_optional(pool)
    .await?;
    Ok(booking)
}

/// Insert a new booking, returning it with its assigned id
///
/// A concurrent insert into the same slot loses against the unique index
/// on (date, time) and surfaces as [`RepoError::Duplicate`].
pub async fn create(pool: &SqlitePool, data: BookingCreate) -> RepoResult<Booking> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO bookings (name, date, time, people) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.date)
    .bind(&data.time)
    .bind(data.people)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create booking".into()))
}

/// Overwrite time and people of an existing booking
///
/// Name and date are immutable after creation.
pub async fn update(pool: &SqlitePool, id: i64, time: &str, people: i32) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE bookings SET time = ?, people = ? WHERE id = ?")
        .bind(time)
        .bind(people)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Booking {id} not found")));
    }
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    sqlx::query("DELETE FROM bookings WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
