use std::net::TcpListener;

use anyhow::Context;

use sqlx::PgPool;

use studio_backend::app;
use studio_backend::client::{EmailClient, Notifier};
use studio_backend::rate_limit::RateLimiter;
use studio_backend::settings::Settings;
use studio_backend::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::create_subscriber("info", std::io::stdout);
    telemetry::set_subscriber(subscriber)?;

    let settings = Settings::load().expect("Failed to load settings");

    let pool = PgPool::connect_with(settings.database.with_db()).await?;

    let email_client = EmailClient::new(
        settings.email.sender(),
        settings.email.api_timeout(),
        settings.email.api_base_url(),
        settings.email.api_auth_token(),
    )?;
    let notifier = Notifier::new(email_client, settings.email.recipient());

    let rate_limiter = RateLimiter::new();
    let admin_token = settings.admin.api_token();

    let listener = TcpListener::bind(settings.app.addr())?;

    app::run(listener, pool, rate_limiter, admin_token, notifier)?
        .await
        .context("Failed to run app")
}
