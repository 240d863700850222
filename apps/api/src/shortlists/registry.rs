use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::now_micros;
use crate::models::shortlist::{lenient_timestamp, NewShortlist, Shortlist, EMAIL_SENTINEL};
use crate::store::RecruitStore;

/// A shortlist record as submitted by the matcher or a manual client.
/// Unknown fields are ignored.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlistSubmission {
    pub candidate_name: Option<String>,
    pub job_code: Option<String>,
    pub score: Option<f64>,
    pub matched_skills: Option<Vec<String>>,
    pub missing_skills: Option<Vec<String>>,
    pub summary: Option<String>,
    pub email: Option<String>,
    pub shortlist: Option<bool>,
    #[serde(default, deserialize_with = "lenient_timestamp::deserialize")]
    pub date_shortlisted: Option<DateTime<Utc>>,
}

fn required_text(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{field} is required"))),
    }
}

impl ShortlistSubmission {
    /// Checks required fields and fills defaults.
    pub fn validate(self) -> Result<NewShortlist, AppError> {
        let candidate_name = required_text("candidateName", self.candidate_name)?;
        let job_code = required_text("jobCode", self.job_code)?;
        let score = match self.score {
            Some(score) if score.is_finite() => score,
            Some(_) => return Err(AppError::Validation("score must be a finite number".to_string())),
            None => return Err(AppError::Validation("score is required".to_string())),
        };
        let email = self
            .email
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| EMAIL_SENTINEL.to_string());

        Ok(NewShortlist {
            candidate_name,
            job_code,
            score,
            matched_skills: self.matched_skills.unwrap_or_default(),
            missing_skills: self.missing_skills.unwrap_or_default(),
            summary: self.summary.unwrap_or_default(),
            email,
            shortlisted: self.shortlist.unwrap_or(false),
            date_shortlisted: self.date_shortlisted.unwrap_or_else(now_micros),
        })
    }
}

pub async fn create_shortlist(
    store: &dyn RecruitStore,
    submission: ShortlistSubmission,
) -> Result<Shortlist, AppError> {
    let shortlist = Shortlist::from_new(submission.validate()?);
    store.insert_shortlist(&shortlist).await?;
    info!(
        "Saved shortlist {} for '{}' on jobCode {} (score {})",
        shortlist.id, shortlist.candidate_name, shortlist.job_code, shortlist.score
    );
    Ok(shortlist)
}

/// Shortlists for `job_code`; every record when no code is given.
pub async fn list_shortlists(
    store: &dyn RecruitStore,
    job_code: Option<&str>,
) -> Result<Vec<Shortlist>, AppError> {
    Ok(store.list_shortlists(job_code).await?)
}
