use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{Job, NewJob};
use crate::store::RecruitStore;

/// Returns every job, newest first. No pagination.
pub async fn list_jobs(store: &dyn RecruitStore) -> Result<Vec<Job>, AppError> {
    Ok(store.list_jobs().await?)
}

/// Persists a new job with a server-assigned id and creation timestamp.
pub async fn create_job(store: &dyn RecruitStore, new: NewJob) -> Result<Job, AppError> {
    let job = Job::from_new(new);
    store.insert_job(&job).await?;
    info!("Created job {} (jobCode {})", job.id, job.job_code);
    Ok(job)
}

/// Deletes a job by id. Unknown ids are a no-op; associated resumes and
/// shortlists are left in place.
pub async fn delete_job(store: &dyn RecruitStore, id: Uuid) -> Result<(), AppError> {
    if store.delete_job(id).await? {
        info!("Deleted job {id}");
    } else {
        info!("Delete requested for unknown job {id}; nothing removed");
    }
    Ok(())
}
