use async_trait::async_trait;
use sqlx::types::Json;

use crate::{
    entities::resume::{Resume, ResumeRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxResumeRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn get_resume(&self) -> Result<Option<Resume>, AppError>;
    async fn upsert_resume(&self, resume: &ResumeRequest) -> Result<Resume, AppError>;
}

impl SqlxResumeRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxResumeRepo { pool }
    }
}

#[async_trait]
impl ResumeRepository for SqlxResumeRepo {
    async fn get_resume(&self) -> Result<Option<Resume>, AppError> {
        let resume = sqlx::query_as::<_, Resume>(
            r#"SELECT * FROM resume ORDER BY id LIMIT 1"#
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(resume)
    }

    async fn upsert_resume(&self, resume: &ResumeRequest) -> Result<Resume, AppError> {
        let saved = sqlx::query_as::<_, Resume>(
            r#"
            INSERT INTO resume (id, full_name, title, summary, experiences, education, skills, updated_at)
            VALUES (1, $1, $2, $3, $4, $5, $6, NOW())
            ON CONFLICT (id) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                title = EXCLUDED.title,
                summary = EXCLUDED.summary,
                experiences = EXCLUDED.experiences,
                education = EXCLUDED.education,
                skills = EXCLUDED.skills,
                updated_at = NOW()
            RETURNING *
            "#
        )
        .bind(&resume.full_name)
        .bind(&resume.title)
        .bind(&resume.summary)
        .bind(Json(&resume.experiences))
        .bind(Json(&resume.education))
        .bind(&resume.skills)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }
}
