mod email_client;
mod notifier;

pub use email_client::{Email, EmailClient};
pub use notifier::Notifier;
