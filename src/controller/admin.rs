use actix_web::dev::HttpServiceFactory;
use actix_web::{get, web, HttpResponse, Responder};

use serde::Serialize;

use sqlx::PgPool;

use crate::auth::Administrator;
use crate::error::RestResult;
use crate::model::Submission;
use crate::repo::{PgSubmissionRepo, SubmissionRepo};

/// Cap on the admin listing
const RECENT_LIMIT: i64 = 100;

#[derive(Debug, Serialize)]
struct SubmissionList {
    success: bool,
    data: Vec<Submission>,
    count: usize,
}

#[tracing::instrument(name = "List recent submissions", skip(pool))]
#[get("/submissions")]
async fn submissions(
    _admin: Administrator, // Administrator guard
    pool: web::Data<PgPool>,
) -> RestResult<impl Responder> {
    let data = PgSubmissionRepo::fetch_recent(pool.get_ref(), RECENT_LIMIT).await?;
    let count = data.len();

    Ok(HttpResponse::Ok().json(SubmissionList {
        success: true,
        data,
        count,
    }))
}

/// Admin API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/admin").service(submissions)
}
