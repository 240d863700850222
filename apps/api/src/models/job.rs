use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::now_micros;

/// A job posting. `job_code` is a free-text correlation key; it is not unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub job_code: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller when posting a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub job_code: String,
}

impl Job {
    pub fn from_new(new: NewJob) -> Self {
        Job {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            job_code: new.job_code,
            created_at: now_micros(),
        }
    }
}
