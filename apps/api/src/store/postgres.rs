use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::job::Job;
use crate::models::resume::Resume;
use crate::models::shortlist::Shortlist;
use crate::store::{RecruitStore, StoreResult};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// PostgreSQL-backed store. One table per record kind, no foreign keys.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Opens a connection pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> StoreResult<()> {
        MIGRATOR.run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }
}

#[async_trait]
impl RecruitStore for PgStore {
    async fn insert_job(&self, job: &Job) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO jobs (id, title, description, job_code, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.job_code)
        .bind(job.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_jobs(&self) -> StoreResult<Vec<Job>> {
        Ok(sqlx::query_as::<_, Job>(
            "SELECT id, title, description, job_code, created_at FROM jobs ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn delete_job(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_resume(&self, resume: &Resume) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO resumes (id, filename, job_code, file_data, content_type, upload_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(resume.id)
        .bind(&resume.filename)
        .bind(&resume.job_code)
        .bind(&resume.file_data)
        .bind(&resume.content_type)
        .bind(resume.upload_date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_resumes(&self, job_code: Option<&str>) -> StoreResult<Vec<Resume>> {
        // A NULL filter matches every row.
        Ok(sqlx::query_as::<_, Resume>(
            r#"
            SELECT id, filename, job_code, file_data, content_type, upload_date
            FROM resumes
            WHERE $1::TEXT IS NULL OR job_code = $1
            "#,
        )
        .bind(job_code)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn find_resume(&self, id: Uuid) -> StoreResult<Option<Resume>> {
        Ok(sqlx::query_as::<_, Resume>(
            "SELECT id, filename, job_code, file_data, content_type, upload_date FROM resumes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert_shortlist(&self, shortlist: &Shortlist) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO shortlists
                (id, candidate_name, job_code, score, matched_skills, missing_skills,
                 summary, email, shortlisted, date_shortlisted)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(shortlist.id)
        .bind(&shortlist.candidate_name)
        .bind(&shortlist.job_code)
        .bind(shortlist.score)
        .bind(&shortlist.matched_skills)
        .bind(&shortlist.missing_skills)
        .bind(&shortlist.summary)
        .bind(&shortlist.email)
        .bind(shortlist.shortlisted)
        .bind(shortlist.date_shortlisted)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_shortlists(&self, job_code: Option<&str>) -> StoreResult<Vec<Shortlist>> {
        Ok(sqlx::query_as::<_, Shortlist>(
            r#"
            SELECT id, candidate_name, job_code, score, matched_skills, missing_skills,
                   summary, email, shortlisted, date_shortlisted
            FROM shortlists
            WHERE $1::TEXT IS NULL OR job_code = $1
            "#,
        )
        .bind(job_code)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL connection pool closed");
    }
}
