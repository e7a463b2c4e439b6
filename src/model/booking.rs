use chrono::{DateTime, Utc};

use serde::Serialize;

use uuid::Uuid;

use crate::domain::{
    ClientName, EmailAddress, MessageBody, PreferredDate, PreferredTime, TattooType,
};

/// Validated, normalized booking request ready to persist
#[derive(Debug)]
pub struct NewBooking {
    pub name: ClientName,
    pub email: EmailAddress,
    pub tattoo_type: TattooType,
    pub preferred_date: PreferredDate,
    pub preferred_time: PreferredTime,
    pub message: Option<MessageBody>,
    pub source_address: String,
}

/// Stored booking record
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub tattoo_type: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub message: Option<String>,
    pub source_address: String,
    pub status: BookingStatus,
    /// NOTE: Auto-set and updated by database triggers
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
pub enum BookingStatus {
    New,
    Confirmed,
    Cancelled,
}
