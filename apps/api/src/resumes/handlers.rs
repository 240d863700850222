use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Multipart, Path, Query, State,
    },
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::resumes::intake::{
    get_resume, list_resumes, upload_files, upload_resume, UploadResumeRequest, UploadedFile,
};
use crate::routes::{JobCodeQuery, MessageResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BatchUploadResponse {
    pub message: String,
    pub count: usize,
}

/// POST /api/resumes/uploadResume
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    payload: Result<Json<UploadResumeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Json(request) = payload?;
    upload_resume(state.store.as_ref(), request).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Resume saved successfully")),
    ))
}

/// POST /api/resumes/upload
///
/// Multipart form with a `code` text field and one or more `files` parts.
/// All parts are read before anything is stored.
pub async fn handle_upload_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<BatchUploadResponse>), AppError> {
    let mut job_code = None;
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("code") => job_code = Some(field.text().await?),
            Some("files") => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::Validation("File name not provided".to_string()))?;
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                files.push(UploadedFile {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            other => debug!("Ignoring multipart field {other:?}"),
        }
    }

    let stored = upload_files(state.store.as_ref(), job_code, files).await?;
    Ok((
        StatusCode::CREATED,
        Json(BatchUploadResponse {
            message: format!("Uploaded {} resumes", stored.len()),
            count: stored.len(),
        }),
    ))
}

/// GET /api/resumes?code=X
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<JobCodeQuery>,
) -> Result<Json<Vec<Resume>>, AppError> {
    debug!("Listing resumes for jobCode {:?}", params.code);
    Ok(Json(
        list_resumes(state.store.as_ref(), params.code.as_deref()).await?,
    ))
}

/// GET /api/resumes/:id/file
pub async fn handle_download_resume(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let resume = get_resume(state.store.as_ref(), id).await?;

    let content_type = HeaderValue::from_str(&resume.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));
    let disposition = HeaderValue::from_str(&format!(
        "inline; filename=\"{}\"",
        resume.filename.replace(['"', '\\'], "_")
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("inline"));

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        resume.file_data,
    )
        .into_response())
}
