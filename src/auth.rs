mod admin_guard;
mod bearer;

pub use admin_guard::Administrator;
pub use bearer::{AdminToken, BearerToken};
