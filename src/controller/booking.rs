use actix_web::dev::HttpServiceFactory;
use actix_web::{post, web, HttpResponse, Responder};

use serde::{Deserialize, Serialize};

use sqlx::PgPool;

use tracing::Instrument;

use uuid::Uuid;

use crate::client::Notifier;
use crate::controller::contact::parse_field;
use crate::error::{RestError, RestResult};
use crate::model::NewBooking;
use crate::rate_limit::Throttled;
use crate::repo::{BookingRepo, PgBookingRepo};

#[derive(Debug, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default, rename = "tattooType")]
    tattoo_type: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    message: Option<String>,
    /// Honeypot, same contract as on the contact form
    #[serde(default)]
    website: Option<String>,
}

impl BookingForm {
    fn validate(self, source_address: String) -> Result<NewBooking, Vec<String>> {
        if self
            .website
            .as_deref()
            .map_or(false, |website| !website.is_empty())
        {
            return Err(vec!["Invalid submission.".into()]);
        }

        let mut violations = Vec::new();

        let name = parse_field(self.name.as_deref(), "Name is required", &mut violations);
        let email = parse_field(self.email.as_deref(), "Email is required", &mut violations);
        let tattoo_type = parse_field(
            self.tattoo_type.as_deref(),
            "Tattoo type is required",
            &mut violations,
        );
        let preferred_date = parse_field(
            self.date.as_deref(),
            "Preferred date is required",
            &mut violations,
        );
        let preferred_time = parse_field(
            self.time.as_deref(),
            "Preferred time is required",
            &mut violations,
        );

        // The booking message is optional; only a present, non-blank value is
        // length-checked
        let mut message = None;
        if let Some(value) = self.message.as_deref().filter(|m| !m.trim().is_empty()) {
            match value.parse() {
                Ok(body) => message = Some(body),
                Err(violation) => violations.push(violation),
            }
        }

        match (name, email, tattoo_type, preferred_date, preferred_time) {
            (Some(name), Some(email), Some(tattoo_type), Some(preferred_date), Some(preferred_time))
                if violations.is_empty() =>
            {
                Ok(NewBooking {
                    name,
                    email,
                    tattoo_type,
                    preferred_date,
                    preferred_time,
                    message,
                    source_address,
                })
            }
            _ => Err(violations),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BookingResponse {
    success: bool,
    message: String,
    booking_id: Uuid,
}

#[tracing::instrument(name = "Accept a booking request", skip(body, pool, notifier))]
#[post("")]
async fn submit(
    throttled: Throttled,
    body: web::Json<BookingForm>,
    pool: web::Data<PgPool>,
    notifier: web::Data<Notifier>,
) -> RestResult<impl Responder> {
    let new_booking = body
        .into_inner()
        .validate(throttled.into_addr())
        .map_err(RestError::Validation)?;

    let id = PgBookingRepo::insert(pool.get_ref(), &new_booking).await?;

    let notifier = notifier.clone();
    tokio::spawn(
        async move {
            if let Err(error) = notifier.booking_notice(&new_booking, id).await {
                tracing::error!(error.cause_chain = ?error, "Failed to send booking notice");
            }
        }
        .in_current_span(),
    );

    Ok(HttpResponse::Ok().json(BookingResponse {
        success: true,
        message: "Thank you for your booking request! We will confirm your slot soon.".into(),
        booking_id: id,
    }))
}

/// Booking intake endpoint
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/booking").service(submit)
}
