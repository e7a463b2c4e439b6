use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};

use chrono::Utc;

use serde::Serialize;

use sqlx::PgPool;

use tracing_actix_web::TracingLogger;

use crate::auth::AdminToken;
use crate::client::Notifier;
use crate::controller::{admin, booking, contact};
use crate::error::RestError;
use crate::rate_limit::RateLimiter;

#[derive(Debug, Serialize)]
struct HealthBody {
    success: bool,
    message: String,
    database: &'static str,
    timestamp: String,
}

/// Health-check endpoint, pings the database
#[tracing::instrument(name = "Health check", skip(pool))]
#[get("/health")]
async fn health_check(pool: web::Data<PgPool>) -> impl Responder {
    let timestamp = Utc::now().to_rfc3339();

    match sqlx::query("select 1").execute(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(HealthBody {
            success: true,
            message: "Server is healthy".into(),
            database: "connected",
            timestamp,
        }),
        Err(error) => {
            tracing::error!(error.cause_chain = ?error, "Health check failed to reach database");
            HttpResponse::InternalServerError().json(HealthBody {
                success: false,
                message: "Server health check failed".into(),
                database: "disconnected",
                timestamp,
            })
        }
    }
}

/// Run the application on a specified TCP listener
pub fn run(
    listener: TcpListener,
    pool: PgPool,
    rate_limiter: RateLimiter,
    admin_token: AdminToken,
    notifier: Notifier,
) -> anyhow::Result<Server> {
    // Wrap application data
    let pool = web::Data::new(pool);
    let rate_limiter = web::Data::new(rate_limiter);
    let admin_token = web::Data::new(admin_token);
    let notifier = web::Data::new(notifier);

    // Start the server
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(pool.clone())
            .app_data(rate_limiter.clone())
            .app_data(admin_token.clone())
            .app_data(notifier.clone())
            .app_data(json_config())
            .service(
                web::scope("/api")
                    .service(health_check)
                    .service(contact::scope())
                    .service(booking::scope())
                    .service(admin::scope()),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Map body deserialization failures onto the standard error envelope
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|error, _| RestError::Validation(vec![error.to_string()]).into())
}
