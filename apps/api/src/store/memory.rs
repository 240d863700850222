//! In-process store used by the test suite.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::job::Job;
use crate::models::resume::Resume;
use crate::models::shortlist::Shortlist;
use crate::store::{RecruitStore, StoreError, StoreResult};

#[derive(Default)]
pub struct MemoryStore {
    jobs: Mutex<Vec<Job>>,
    resumes: Mutex<Vec<Resume>>,
    shortlists: Mutex<Vec<Shortlist>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resume_count(&self) -> usize {
        self.resumes.lock().map(|r| r.len()).unwrap_or_default()
    }

    pub fn shortlist_count(&self) -> usize {
        self.shortlists.lock().map(|s| s.len()).unwrap_or_default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".to_string())
}

#[async_trait]
impl RecruitStore for MemoryStore {
    async fn insert_job(&self, job: &Job) -> StoreResult<()> {
        self.jobs.lock().map_err(poisoned)?.push(job.clone());
        Ok(())
    }

    async fn list_jobs(&self) -> StoreResult<Vec<Job>> {
        // Newest insert first, then a stable sort keeps that order for equal timestamps.
        let mut jobs: Vec<Job> = self.jobs.lock().map_err(poisoned)?.iter().rev().cloned().collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn delete_job(&self, id: Uuid) -> StoreResult<bool> {
        let mut jobs = self.jobs.lock().map_err(poisoned)?;
        let before = jobs.len();
        jobs.retain(|j| j.id != id);
        Ok(jobs.len() != before)
    }

    async fn insert_resume(&self, resume: &Resume) -> StoreResult<()> {
        self.resumes.lock().map_err(poisoned)?.push(resume.clone());
        Ok(())
    }

    async fn list_resumes(&self, job_code: Option<&str>) -> StoreResult<Vec<Resume>> {
        Ok(self
            .resumes
            .lock()
            .map_err(poisoned)?
            .iter()
            .filter(|r| job_code.map_or(true, |code| r.job_code == code))
            .cloned()
            .collect())
    }

    async fn find_resume(&self, id: Uuid) -> StoreResult<Option<Resume>> {
        Ok(self
            .resumes
            .lock()
            .map_err(poisoned)?
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn insert_shortlist(&self, shortlist: &Shortlist) -> StoreResult<()> {
        self.shortlists.lock().map_err(poisoned)?.push(shortlist.clone());
        Ok(())
    }

    async fn list_shortlists(&self, job_code: Option<&str>) -> StoreResult<Vec<Shortlist>> {
        Ok(self
            .shortlists
            .lock()
            .map_err(poisoned)?
            .iter()
            .filter(|s| job_code.map_or(true, |code| s.job_code == code))
            .cloned()
            .collect())
    }
}

/// Store whose every operation fails, for exercising 5xx paths.
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl RecruitStore for FailingStore {
    async fn insert_job(&self, _job: &Job) -> StoreResult<()> {
        Err(unavailable())
    }

    async fn list_jobs(&self) -> StoreResult<Vec<Job>> {
        Err(unavailable())
    }

    async fn delete_job(&self, _id: Uuid) -> StoreResult<bool> {
        Err(unavailable())
    }

    async fn insert_resume(&self, _resume: &Resume) -> StoreResult<()> {
        Err(unavailable())
    }

    async fn list_resumes(&self, _job_code: Option<&str>) -> StoreResult<Vec<Resume>> {
        Err(unavailable())
    }

    async fn find_resume(&self, _id: Uuid) -> StoreResult<Option<Resume>> {
        Err(unavailable())
    }

    async fn insert_shortlist(&self, _shortlist: &Shortlist) -> StoreResult<()> {
        Err(unavailable())
    }

    async fn list_shortlists(&self, _job_code: Option<&str>) -> StoreResult<Vec<Shortlist>> {
        Err(unavailable())
    }
}
