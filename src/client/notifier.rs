use chrono::Utc;

use uuid::Uuid;

use crate::client::{Email, EmailClient};
use crate::domain::EmailAddress;
use crate::model::{NewBooking, NewSubmission};

/// Best-effort email notices for newly persisted records.
///
/// By the time a notice is rendered the record is already durable, so callers
/// dispatch these from a detached task and drop the outcome after logging it.
#[derive(Debug)]
pub struct Notifier {
    client: EmailClient,
    recipient: EmailAddress,
}

impl Notifier {
    pub fn new(client: EmailClient, recipient: EmailAddress) -> Self {
        Self { client, recipient }
    }

    /// Render and send the notice for a contact submission
    #[tracing::instrument(name = "Send submission notice", skip(self, submission))]
    pub async fn submission_notice(
        &self,
        submission: &NewSubmission,
        id: Uuid,
    ) -> anyhow::Result<()> {
        let email = render_submission_notice(submission, id);
        self.client.send(&self.recipient, &email).await
    }

    /// Render and send the notice for a booking request
    #[tracing::instrument(name = "Send booking notice", skip(self, booking))]
    pub async fn booking_notice(&self, booking: &NewBooking, id: Uuid) -> anyhow::Result<()> {
        let email = render_booking_notice(booking, id);
        self.client.send(&self.recipient, &email).await
    }
}

fn render_submission_notice(submission: &NewSubmission, id: Uuid) -> Email {
    let submitted_at = Utc::now().to_rfc2822();
    let service = match submission.service.as_str() {
        "" => "Not specified",
        service => service,
    };

    let text_body = format!(
        "New contact form submission\n\n\
         Name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         Service: {service}\n\
         Message:\n{message}\n\n\
         Submission ID: {id}\n\
         Submitted: {submitted_at}\n",
        name = submission.name.as_ref(),
        email = submission.email.as_ref(),
        phone = submission.phone.as_ref(),
        message = submission.message.as_ref(),
    );

    let html_body = format!(
        "<h1>New contact form submission</h1>\
         <p><strong>Name:</strong> {name}</p>\
         <p><strong>Email:</strong> {email}</p>\
         <p><strong>Phone:</strong> {phone}</p>\
         <p><strong>Service:</strong> {service}</p>\
         <p><strong>Message:</strong><br>{message}</p>\
         <p><strong>Submission ID:</strong> {id}</p>\
         <p><strong>Submitted:</strong> {submitted_at}</p>",
        name = submission.name.as_ref(),
        email = submission.email.as_ref(),
        phone = submission.phone.as_ref(),
        message = submission.message.as_ref().replace('\n', "<br>"),
    );

    Email {
        subject: "New Contact Form Submission - SM Tattoo Studio".into(),
        html_body,
        text_body,
    }
}

fn render_booking_notice(booking: &NewBooking, id: Uuid) -> Email {
    let submitted_at = Utc::now().to_rfc2822();
    let message = booking
        .message
        .as_ref()
        .map(|m| m.as_ref().to_string())
        .unwrap_or_else(|| "Not provided".into());

    let text_body = format!(
        "New booking request\n\n\
         Name: {name}\n\
         Email: {email}\n\
         Tattoo type: {tattoo_type}\n\
         Date: {date}\n\
         Time: {time}\n\
         Message:\n{message}\n\n\
         Booking ID: {id}\n\
         Submitted: {submitted_at}\n",
        name = booking.name.as_ref(),
        email = booking.email.as_ref(),
        tattoo_type = booking.tattoo_type.as_ref(),
        date = booking.preferred_date.as_ref(),
        time = booking.preferred_time.as_ref(),
    );

    let html_body = format!(
        "<h1>New booking request</h1>\
         <p><strong>Name:</strong> {name}</p>\
         <p><strong>Email:</strong> {email}</p>\
         <p><strong>Tattoo type:</strong> {tattoo_type}</p>\
         <p><strong>Date:</strong> {date}</p>\
         <p><strong>Time:</strong> {time}</p>\
         <p><strong>Message:</strong><br>{message}</p>\
         <p><strong>Booking ID:</strong> {id}</p>\
         <p><strong>Submitted:</strong> {submitted_at}</p>",
        name = booking.name.as_ref(),
        email = booking.email.as_ref(),
        tattoo_type = booking.tattoo_type.as_ref(),
        date = booking.preferred_date.as_ref(),
        time = booking.preferred_time.as_ref(),
        message = message.replace('\n', "<br>"),
    );

    Email {
        subject: "New Booking Request - SM Tattoo Studio".into(),
        html_body,
        text_body,
    }
}
