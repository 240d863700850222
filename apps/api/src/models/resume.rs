use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::now_micros;

/// An uploaded candidate document. Linked to a job by `job_code` value only.
///
/// The raw bytes live in `file_data`; on the wire they travel inside the same
/// `{"$binary": {"base64": ...}}` envelope the upload endpoint accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub filename: String,
    pub job_code: String,
    #[serde(with = "crate::resumes::envelope::binary")]
    pub file_data: Vec<u8>,
    pub content_type: String,
    pub upload_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewResume {
    pub filename: String,
    pub job_code: String,
    pub file_data: Vec<u8>,
    pub content_type: String,
}

impl Resume {
    pub fn from_new(new: NewResume) -> Self {
        Resume {
            id: Uuid::new_v4(),
            filename: new.filename,
            job_code: new.job_code,
            file_data: new.file_data,
            content_type: new.content_type,
            upload_date: now_micros(),
        }
    }
}
