use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{NewResume, Resume};
use crate::resumes::envelope::{decode_envelope, PDF_CONTENT_TYPE};
use crate::store::RecruitStore;

/// JSON upload body. `file_data` is kept as raw JSON so an absent envelope and a
/// malformed one both surface as validation errors instead of body rejections.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResumeRequest {
    pub filename: Option<String>,
    pub job_code: Option<String>,
    pub file_data: Option<Value>,
}

/// One file taken from a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{field} is required"))),
    }
}

/// Decodes the base64 envelope and stores the resume as a PDF.
/// Nothing is persisted when validation fails.
pub async fn upload_resume(
    store: &dyn RecruitStore,
    request: UploadResumeRequest,
) -> Result<Resume, AppError> {
    let file_data = decode_envelope(request.file_data.as_ref())
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let filename = required("filename", request.filename)?;
    let job_code = required("jobCode", request.job_code)?;

    let resume = Resume::from_new(NewResume {
        filename,
        job_code,
        file_data,
        content_type: PDF_CONTENT_TYPE.to_string(),
    });
    store.insert_resume(&resume).await?;

    info!(
        "Stored resume {} '{}' ({} bytes) for jobCode {}",
        resume.id,
        resume.filename,
        resume.file_data.len(),
        resume.job_code
    );
    Ok(resume)
}

/// Stores each uploaded file as its own resume under `job_code`.
pub async fn upload_files(
    store: &dyn RecruitStore,
    job_code: Option<String>,
    files: Vec<UploadedFile>,
) -> Result<Vec<Resume>, AppError> {
    let job_code = required("code", job_code)?;
    if files.is_empty() {
        return Err(AppError::Validation("At least one file is required".to_string()));
    }

    let mut stored = Vec::with_capacity(files.len());
    for file in files {
        let resume = Resume::from_new(NewResume {
            filename: file.filename,
            job_code: job_code.clone(),
            file_data: file.bytes,
            content_type: file
                .content_type
                .unwrap_or_else(|| PDF_CONTENT_TYPE.to_string()),
        });
        store.insert_resume(&resume).await?;
        stored.push(resume);
    }

    info!("Stored {} resumes for jobCode {job_code}", stored.len());
    Ok(stored)
}

/// Resumes for `job_code`; every resume when no code is given. Never errors on
/// an unknown code.
pub async fn list_resumes(
    store: &dyn RecruitStore,
    job_code: Option<&str>,
) -> Result<Vec<Resume>, AppError> {
    Ok(store.list_resumes(job_code).await?)
}

pub async fn get_resume(store: &dyn RecruitStore, id: Uuid) -> Result<Resume, AppError> {
    store
        .find_resume(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}
