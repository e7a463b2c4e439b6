use chrono::{DateTime, Utc};

use serde::Serialize;

use uuid::Uuid;

use crate::domain::{ClientName, EmailAddress, MessageBody, PhoneNumber, ServiceKind};

/// Validated, normalized contact submission ready to persist
#[derive(Debug)]
pub struct NewSubmission {
    pub name: ClientName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub service: ServiceKind,
    pub message: MessageBody,
    /// Best-effort client network address, empty when unavailable
    pub source_address: String,
}

/// Stored contact submission record
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// ID of the submission, returned to the caller as a confirmation token
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub source_address: String,
    /// Lifecycle state. Always `new` at creation; only the admin surface
    /// advances it
    pub status: SubmissionStatus,
    /// Creation and update timestamps.
    /// NOTE: Auto-set and updated by database triggers
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle state of a contact submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "submission_status", rename_all = "lowercase")]
pub enum SubmissionStatus {
    New,
    Read,
    Replied,
    Archived,
}
