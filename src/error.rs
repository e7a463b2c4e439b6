use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use serde::Serialize;

use thiserror::Error;

pub type RestResult<T> = Result<T, RestError>;

#[derive(Debug, Error)]
pub enum RestError {
    /// Every violation found in the request, joined for the response body
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Too many requests. Please try again later.")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Sorry, there was an error processing your request. Please try again later.")]
    Database(#[from] sqlx::Error),

    #[error("Sorry, there was an error processing your request. Please try again later.")]
    Other(#[from] anyhow::Error),
}

/// Standard envelope for failed requests
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl ResponseError for RestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Database(_) | Self::Other(_) = self {
            // Full detail stays server-side; the caller gets the generic message
            tracing::error!(error.cause_chain = ?self, "Request failed");
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            message: self.to_string(),
        })
    }
}
