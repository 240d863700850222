pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir};

use crate::jobs::handlers as jobs;
use crate::resumes::handlers as resumes;
use crate::shortlists::handlers as shortlists;
use crate::state::AppState;

/// `?code=` filter shared by the resume and shortlist listings.
#[derive(Debug, Default, Deserialize)]
pub struct JobCodeQuery {
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

pub fn build_router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.uploads_dir);
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route("/api/jobs/:id", delete(jobs::handle_delete_job))
        .route("/api/resumes", get(resumes::handle_list_resumes))
        .route(
            "/api/resumes/uploadResume",
            post(resumes::handle_upload_resume),
        )
        .route("/api/resumes/upload", post(resumes::handle_upload_files))
        .route(
            "/api/resumes/:id/file",
            get(resumes::handle_download_resume),
        )
        .route(
            "/api/shortlists",
            get(shortlists::handle_list_shortlists).post(shortlists::handle_create_shortlist),
        )
        .route("/api/match/:code", post(shortlists::handle_smart_match))
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}
