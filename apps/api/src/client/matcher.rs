use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::client::{check, endpoint, ClientError};
use crate::models::shortlist::lenient_timestamp;
use crate::shortlists::registry::ShortlistSubmission;

/// One scored candidate as reported by the matcher. The matcher keeps its own
/// identifiers, so `id` stays an opaque string here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub candidate_name: String,
    pub job_code: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(rename = "shortlist", default)]
    pub shortlisted: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp::deserialize")]
    pub date_shortlisted: Option<DateTime<Utc>>,
}

impl MatchResult {
    /// Converts into a body accepted by `POST /api/shortlists`.
    pub fn into_submission(self) -> ShortlistSubmission {
        ShortlistSubmission {
            candidate_name: Some(self.candidate_name),
            job_code: Some(self.job_code),
            score: Some(self.score),
            matched_skills: Some(self.matched_skills),
            missing_skills: Some(self.missing_skills),
            summary: Some(self.summary),
            email: self.email,
            shortlist: Some(self.shortlisted),
            date_shortlisted: self.date_shortlisted,
        }
    }
}

#[derive(Deserialize)]
struct MatchRun {
    #[serde(default)]
    results: Vec<MatchResult>,
}

/// Client for the external matcher (`POST /match/:code`, `GET /shortlist/:code`).
#[derive(Clone)]
pub struct MatcherClient {
    client: Client,
    base_url: String,
}

impl MatcherClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.matcher_url.clone())
    }

    /// Asks the matcher to score every resume filed under `job_code`.
    pub async fn trigger_match(&self, job_code: &str) -> Result<Vec<MatchResult>, ClientError> {
        let url = endpoint(&self.base_url, &["match", job_code])?;
        let response = check(self.client.post(url).send().await?).await?;

        // The matcher reports an unknown job as a 200 with an `error` field.
        let body: Value = response.json().await?;
        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return Err(ClientError::Matcher(message.to_string()));
        }
        let run: MatchRun = serde_json::from_value(body)
            .map_err(|e| ClientError::Matcher(format!("unexpected match response: {e}")))?;

        info!("Matcher scored {} resumes for jobCode {job_code}", run.results.len());
        Ok(run.results)
    }

    pub async fn fetch_shortlist(&self, job_code: &str) -> Result<Vec<MatchResult>, ClientError> {
        let url = endpoint(&self.base_url, &["shortlist", job_code])?;
        let response = check(self.client.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Triggers a match run, then reads back the matcher's shortlist for the code.
    pub async fn smart_match(&self, job_code: &str) -> Result<Vec<MatchResult>, ClientError> {
        self.trigger_match(job_code).await?;
        self.fetch_shortlist(job_code).await
    }
}
