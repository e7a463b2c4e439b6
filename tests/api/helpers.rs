use std::net::TcpListener;
use std::time::Duration;

use reqwest::{Client, Method, Response};

use secrecy::Secret;

use serde::Serialize;

use serde_json::Value;

use sqlx::PgPool;

use url::Url;

use wiremock::MockServer;

use studio_backend::app;
use studio_backend::auth::AdminToken;
use studio_backend::client::{EmailClient, Notifier};
use studio_backend::rate_limit::RateLimiter;

#[derive(Debug, Default, Serialize)]
pub struct ContactBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl ContactBody {
    pub fn valid() -> Self {
        Self {
            name: Some("Asha Rao".into()),
            email: Some("asha@example.com".into()),
            phone: Some("+91 98765 43210".into()),
            message: Some("Interested in a cover-up".into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct BookingBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "tattooType", skip_serializing_if = "Option::is_none")]
    pub tattoo_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl BookingBody {
    pub fn valid() -> Self {
        Self {
            name: Some("Asha Rao".into()),
            email: Some("asha@example.com".into()),
            tattoo_type: Some("blackwork".into()),
            date: Some("2026-09-14".into()),
            time: Some("15:30".into()),
            ..Self::default()
        }
    }
}

pub struct TestApp {
    addr: String,

    pub admin_token: String,
    pub client: Client,
    pub email_server: MockServer,
}

impl TestApp {
    pub async fn spawn(pool: &PgPool) -> Self {
        use rand::{distributions::Alphanumeric, Rng};

        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to listen on random port");
        let port = listener.local_addr().unwrap().port();

        let addr = format!("http://127.0.0.1:{}", port);

        let email_server = MockServer::start().await;

        let email_client = {
            let sender = "noreply@test.com"
                .parse()
                .expect("Failed to parse sender email address");
            let api_base_url =
                Url::parse(&email_server.uri()).expect("Failed to parse mock server uri");
            let api_auth_token = Secret::new("TestAuthorization".into());
            let api_timeout = Duration::from_secs(2);

            EmailClient::new(sender, api_timeout, api_base_url, api_auth_token)
                .expect("Failed to create email client")
        };
        let recipient = "owner@test.com"
            .parse()
            .expect("Failed to parse recipient email address");
        let notifier = Notifier::new(email_client, recipient);

        let admin_token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();

        let server = app::run(
            listener,
            pool.clone(),
            RateLimiter::new(),
            AdminToken::new(Secret::new(admin_token.clone())),
            notifier,
        )
        .expect("Failed to spawn app instance");
        let _ = tokio::spawn(server);

        let client = Client::new();

        Self {
            addr,
            admin_token,
            client,
            email_server,
        }
    }

    pub fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/api/{}", &self.addr, url);
        self.client.request(method, url)
    }

    pub async fn health_check(&self) -> reqwest::Result<Response> {
        self.request(Method::GET, "health").send().await
    }

    pub async fn contact_create(&self, body: &ContactBody) -> reqwest::Result<Response> {
        self.request(Method::POST, "contact")
            .json(body)
            .send()
            .await
    }

    pub async fn booking_create(&self, body: &BookingBody) -> reqwest::Result<Response> {
        self.request(Method::POST, "booking")
            .json(body)
            .send()
            .await
    }

    pub async fn admin_submissions(&self, token: Option<&str>) -> reqwest::Result<Response> {
        let req = self.request(Method::GET, "admin/submissions");
        let req = match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        req.send().await
    }

    /// Wait for the mock mail server to receive at least `count` requests.
    /// Notices are dispatched from a detached task, so the response can land
    /// before the email does.
    pub async fn wait_for_emails(&self, count: usize) -> bool {
        for _ in 0..50 {
            let received = self
                .email_server
                .received_requests()
                .await
                .unwrap_or_default();
            if received.len() >= count {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        false
    }
}

pub async fn json_body(res: Response) -> Value {
    res.json().await.expect("Failed to parse response body")
}
