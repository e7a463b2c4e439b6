use actix_web::dev::HttpServiceFactory;
use actix_web::{post, web, HttpResponse, Responder};

use serde::{Deserialize, Serialize};

use sqlx::PgPool;

use tracing::Instrument;

use uuid::Uuid;

use crate::client::Notifier;
use crate::error::{RestError, RestResult};
use crate::model::NewSubmission;
use crate::rate_limit::Throttled;
use crate::repo::{PgSubmissionRepo, SubmissionRepo};

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    service: Option<String>,
    #[serde(default)]
    message: Option<String>,
    /// Honeypot. Hidden on the real form; humans leave it empty
    #[serde(default)]
    website: Option<String>,
}

impl ContactForm {
    /// Run every validation rule and collect all violations.
    ///
    /// A filled honeypot short-circuits: the submission is automated and gets
    /// no detail about the other fields.
    fn validate(self, source_address: String) -> Result<NewSubmission, Vec<String>> {
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
        let phone = parse_field(self.phone.as_deref(), "Phone is required", &mut violations);
        let message = parse_field(
            self.message.as_deref(),
            "Message is required",
            &mut violations,
        );

        // An absent selection is a valid, unspecified service
        let service = match self.service.as_deref().unwrap_or("").parse() {
            Ok(service) => Some(service),
            Err(violation) => {
                violations.push(violation);
                None
            }
        };

        match (name, email, phone, service, message) {
            (Some(name), Some(email), Some(phone), Some(service), Some(message)) => {
                Ok(NewSubmission {
                    name,
                    email,
                    phone,
                    service,
                    message,
                    source_address,
                })
            }
            _ => Err(violations),
        }
    }
}

/// Parse one required field, recording its violation instead of stopping at it
pub(super) fn parse_field<T: std::str::FromStr<Err = String>>(
    value: Option<&str>,
    missing: &str,
    violations: &mut Vec<String>,
) -> Option<T> {
    let Some(value) = value else {
        violations.push(missing.into());
        return None;
    };

    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(violation) => {
            violations.push(violation);
            None
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactResponse {
    success: bool,
    message: String,
    submission_id: Uuid,
}

#[tracing::instrument(name = "Accept a contact submission", skip(body, pool, notifier))]
#[post("")]
async fn submit(
    throttled: Throttled,
    body: web::Json<ContactForm>,
    pool: web::Data<PgPool>,
    notifier: web::Data<Notifier>,
) -> RestResult<impl Responder> {
    let new_submission = body
        .into_inner()
        .validate(throttled.into_addr())
        .map_err(RestError::Validation)?;

    let id = PgSubmissionRepo::insert(pool.get_ref(), &new_submission).await?;

    // The record is durable from here on; the notice is dispatched detached
    // and its outcome only logged
    let notifier = notifier.clone();
    tokio::spawn(
        async move {
            if let Err(error) = notifier.submission_notice(&new_submission, id).await {
                tracing::error!(error.cause_chain = ?error, "Failed to send submission notice");
            }
        }
        .in_current_span(),
    );

    Ok(HttpResponse::Ok().json(ContactResponse {
        success: true,
        message: "Thank you for your message! We will get back to you soon.".into(),
        submission_id: id,
    }))
}

/// Contact intake endpoint
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/contact").service(submit)
}
