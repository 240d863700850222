use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::registry::{create_job, delete_job, list_jobs};
use crate::models::job::{Job, NewJob};
use crate::routes::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobCreatedResponse {
    pub message: &'static str,
    pub job: Job,
}

/// GET /api/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, AppError> {
    Ok(Json(list_jobs(state.store.as_ref()).await?))
}

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    payload: Result<Json<NewJob>, JsonRejection>,
) -> Result<Json<JobCreatedResponse>, AppError> {
    let Json(new) = payload?;
    let job = create_job(state.store.as_ref(), new).await?;
    Ok(Json(JobCreatedResponse {
        message: "Job added",
        job,
    }))
}

/// DELETE /api/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    // A malformed id is caller input, not a store failure: 400, never 500.
    let Path(id) = id?;
    delete_job(state.store.as_ref(), id).await?;
    Ok(Json(MessageResponse::new("Job deleted")))
}
