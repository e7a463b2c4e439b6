/// Admin listing endpoints
pub mod admin;
/// Booking intake endpoint
pub mod booking;
/// Contact intake endpoint
pub mod contact;
