mod bookings;
mod submissions;

pub use bookings::{BookingRepo, PgBookingRepo};
pub use submissions::{PgSubmissionRepo, SubmissionRepo};
