use actix_web::http::header::{self, HeaderMap};

use anyhow::Context;

use secrecy::Secret;

const BEARER_AUTH_PREFIX: &str = "Bearer ";

/// Token presented by a client on an admin request
#[derive(Debug)]
pub struct BearerToken(String);

impl BearerToken {
    /// Extract a bearer token from the headers of a request
    pub fn from_headers(headers: &HeaderMap) -> anyhow::Result<Self> {
        // Get the authorization header value from the map
        let header_value = headers
            .get(header::AUTHORIZATION)
            .context("Missing authorization in header")?
            .to_str()?;

        Self::from_bearer(header_value)
    }

    /// Extract a token from a string formatted as 'Bearer <token>'
    pub fn from_bearer(header_value: &str) -> anyhow::Result<Self> {
        let token = header_value
            .strip_prefix(BEARER_AUTH_PREFIX)
            .context("Authorization scheme not bearer")?;

        if token.is_empty() {
            anyhow::bail!("Empty bearer token");
        }

        Ok(Self(token.to_string()))
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Configured admin secret that presented tokens are checked against
#[derive(Debug, Clone)]
pub struct AdminToken(Secret<String>);

impl AdminToken {
    pub fn new(secret: Secret<String>) -> Self {
        Self(secret)
    }

    pub fn matches(&self, presented: &BearerToken) -> bool {
        use secrecy::ExposeSecret;

        self.0.expose_secret() == presented.as_ref()
    }
}

impl From<Secret<String>> for AdminToken {
    fn from(secret: Secret<String>) -> Self {
        Self(secret)
    }
}
