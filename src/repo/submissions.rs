use uuid::Uuid;

use sqlx::{Executor, PgExecutor};

use crate::model::{NewSubmission, Submission};

/// Submission repository trait, must be implemented for each database used.
/// NOTE: Intended to facilitate easier testing/mocking
/// TODO: Swap async-trait for std async traits when those become stable
/// https://github.com/orgs/rust-lang/projects/28/views/2?pane=issue&itemId=21990165
#[async_trait::async_trait]
pub trait SubmissionRepo {
    type DB: sqlx::Database;

    /// Insert a new submission, returning the database-assigned id.
    /// The database sets `status = new` and both timestamps
    async fn insert<'con>(
        executor: impl Executor<'con, Database = Self::DB>,
        new_submission: &NewSubmission,
    ) -> sqlx::Result<Uuid>;

    /// Fetch the most recent submissions, newest first
    async fn fetch_recent<'con>(
        executor: impl Executor<'con, Database = Self::DB>,
        limit: i64,
    ) -> sqlx::Result<Vec<Submission>>;
}

/// Postgres Submission Repository
#[derive(Debug)]
pub struct PgSubmissionRepo;

#[async_trait::async_trait]
impl SubmissionRepo for PgSubmissionRepo {
    type DB = sqlx::Postgres;

    #[tracing::instrument(name = "Insert submission", skip(executor))]
    async fn insert<'con>(
        executor: impl PgExecutor<'con>,
        new_submission: &NewSubmission,
    ) -> sqlx::Result<Uuid> {
        let row: (Uuid,) = sqlx::query_as(
            "insert into submissions(name, email, phone, service, message, source_address) \
             values ($1, $2, $3, $4, $5, $6) returning id",
        )
        .bind(new_submission.name.as_ref())
        .bind(new_submission.email.as_ref())
        .bind(new_submission.phone.as_ref())
        .bind(new_submission.service.as_str())
        .bind(new_submission.message.as_ref())
        .bind(new_submission.source_address.as_str())
        .fetch_one(executor)
        .await?;

        Ok(row.0)
    }

    #[tracing::instrument(name = "Fetch recent submissions", skip(executor))]
    async fn fetch_recent<'con>(
        executor: impl PgExecutor<'con>,
        limit: i64,
    ) -> sqlx::Result<Vec<Submission>> {
        sqlx::query_as::<_, Submission>(
            "select id, name, email, phone, service, message, source_address, status, \
             created_at, updated_at \
             from submissions order by created_at desc limit $1",
        )
        .bind(limit)
        .fetch_all(executor)
        .await
    }
}
