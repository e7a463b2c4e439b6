mod booking;
mod submission;

pub use booking::{Booking, BookingStatus, NewBooking};
pub use submission::{NewSubmission, Submission, SubmissionStatus};
