//! Document store seam.
//!
//! Every operation maps to exactly one store statement: insert-one, find-many or
//! delete-by-id. Records reference each other only through `job_code` values, so
//! nothing here enforces or cascades across record kinds.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::job::Job;
use crate::models::resume::Resume;
use crate::models::shortlist::Shortlist;

pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait RecruitStore: Send + Sync {
    async fn insert_job(&self, job: &Job) -> StoreResult<()>;

    /// All jobs, newest `created_at` first.
    async fn list_jobs(&self) -> StoreResult<Vec<Job>>;

    /// Removes the job if present. Returns whether a record was removed.
    async fn delete_job(&self, id: Uuid) -> StoreResult<bool>;

    async fn insert_resume(&self, resume: &Resume) -> StoreResult<()>;

    /// Resumes whose `job_code` equals `job_code`, or every resume when `None`.
    async fn list_resumes(&self, job_code: Option<&str>) -> StoreResult<Vec<Resume>>;

    async fn find_resume(&self, id: Uuid) -> StoreResult<Option<Resume>>;

    async fn insert_shortlist(&self, shortlist: &Shortlist) -> StoreResult<()>;

    /// Shortlists whose `job_code` equals `job_code`, or every record when `None`.
    async fn list_shortlists(&self, job_code: Option<&str>) -> StoreResult<Vec<Shortlist>>;

    /// Releases pooled connections. Called once during shutdown.
    async fn close(&self) {}
}
