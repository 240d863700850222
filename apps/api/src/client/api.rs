use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::client::{check, endpoint, ClientError};
use crate::models::job::{Job, NewJob};
use crate::models::resume::Resume;
use crate::models::shortlist::Shortlist;
use crate::resumes::envelope::BinaryEnvelope;
use crate::shortlists::registry::ShortlistSubmission;

#[derive(Deserialize)]
struct JobCreated {
    job: Job,
}

#[derive(Deserialize)]
struct ShortlistSaved {
    data: Shortlist,
}

/// Client for the recruiter REST API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn list_jobs(&self) -> Result<Vec<Job>, ClientError> {
        let url = endpoint(&self.base_url, &["api", "jobs"])?;
        let response = check(self.client.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn create_job(&self, job: &NewJob) -> Result<Job, ClientError> {
        let url = endpoint(&self.base_url, &["api", "jobs"])?;
        let response = check(self.client.post(url).json(job).send().await?).await?;
        Ok(response.json::<JobCreated>().await?.job)
    }

    pub async fn delete_job(&self, id: Uuid) -> Result<(), ClientError> {
        let url = endpoint(&self.base_url, &["api", "jobs", &id.to_string()])?;
        check(self.client.delete(url).send().await?).await?;
        Ok(())
    }

    /// Uploads raw resume bytes, base64-wrapping them in the binary envelope.
    pub async fn upload_resume(
        &self,
        filename: &str,
        job_code: &str,
        bytes: &[u8],
    ) -> Result<(), ClientError> {
        let url = endpoint(&self.base_url, &["api", "resumes", "uploadResume"])?;
        let body = json!({
            "filename": filename,
            "jobCode": job_code,
            "fileData": BinaryEnvelope::wrap(bytes),
        });
        check(self.client.post(url).json(&body).send().await?).await?;
        Ok(())
    }

    pub async fn list_resumes(&self, job_code: &str) -> Result<Vec<Resume>, ClientError> {
        let url = endpoint(&self.base_url, &["api", "resumes"])?;
        let response = check(
            self.client
                .get(url)
                .query(&[("code", job_code)])
                .send()
                .await?,
        )
        .await?;
        Ok(response.json().await?)
    }

    pub async fn create_shortlist(
        &self,
        submission: &ShortlistSubmission,
    ) -> Result<Shortlist, ClientError> {
        let url = endpoint(&self.base_url, &["api", "shortlists"])?;
        let response = check(self.client.post(url).json(submission).send().await?).await?;
        Ok(response.json::<ShortlistSaved>().await?.data)
    }

    pub async fn list_shortlists(&self, job_code: &str) -> Result<Vec<Shortlist>, ClientError> {
        let url = endpoint(&self.base_url, &["api", "shortlists"])?;
        let response = check(
            self.client
                .get(url)
                .query(&[("code", job_code)])
                .send()
                .await?,
        )
        .await?;
        Ok(response.json().await?)
    }
}
