mod booking_slot;
mod client_name;
mod email_address;
mod message_body;
mod phone_number;
mod service_kind;

pub use booking_slot::{PreferredDate, PreferredTime, TattooType};
pub use client_name::ClientName;
pub use email_address::EmailAddress;
pub use message_body::MessageBody;
pub use phone_number::PhoneNumber;
pub use service_kind::ServiceKind;
