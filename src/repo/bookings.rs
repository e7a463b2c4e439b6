use uuid::Uuid;

use sqlx::{Executor, PgExecutor};

use crate::model::NewBooking;

/// Booking repository trait, same seam as [`crate::repo::SubmissionRepo`]
#[async_trait::async_trait]
pub trait BookingRepo {
    type DB: sqlx::Database;

    /// Insert a new booking, returning the database-assigned id
    async fn insert<'con>(
        executor: impl Executor<'con, Database = Self::DB>,
        new_booking: &NewBooking,
    ) -> sqlx::Result<Uuid>;
}

/// Postgres Booking Repository
#[derive(Debug)]
pub struct PgBookingRepo;

#[async_trait::async_trait]
impl BookingRepo for PgBookingRepo {
    type DB = sqlx::Postgres;

    #[tracing::instrument(name = "Insert booking", skip(executor))]
    async fn insert<'con>(
        executor: impl PgExecutor<'con>,
        new_booking: &NewBooking,
    ) -> sqlx::Result<Uuid> {
        let message: Option<&str> = new_booking.message.as_ref().map(AsRef::as_ref);

        let row: (Uuid,) = sqlx::query_as(
            "insert into bookings(name, email, tattoo_type, preferred_date, preferred_time, \
             message, source_address) \
             values ($1, $2, $3, $4, $5, $6, $7) returning id",
        )
        .bind(new_booking.name.as_ref())
        .bind(new_booking.email.as_ref())
        .bind(new_booking.tattoo_type.as_ref())
        .bind(new_booking.preferred_date.as_ref())
        .bind(new_booking.preferred_time.as_ref())
        .bind(message)
        .bind(new_booking.source_address.as_str())
        .fetch_one(executor)
        .await?;

        Ok(row.0)
    }
}
