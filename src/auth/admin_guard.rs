use std::future::{ready, Ready};

use actix_web::{dev, web, FromRequest, HttpRequest};

use crate::auth::{AdminToken, BearerToken};
use crate::error::RestError;

/// Guard for admin endpoints.
///
/// Extraction succeeds only when the request carries a bearer token equal to
/// the configured admin secret; anything else is reported as a plain 401
/// without distinguishing missing, malformed and wrong tokens.
#[derive(Debug)]
pub struct Administrator;

impl FromRequest for Administrator {
    type Error = RestError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        // NOTE: Must be registered with the application at startup
        let admin_token = req
            .app_data::<web::Data<AdminToken>>()
            .expect("AdminToken not registered for application");

        let result = BearerToken::from_headers(req.headers())
            .ok()
            .filter(|presented| admin_token.matches(presented))
            .map(|_| Administrator)
            .ok_or(RestError::Unauthorized);

        ready(result)
    }
}
