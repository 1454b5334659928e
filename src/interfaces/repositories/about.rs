use async_trait::async_trait;

use crate::{
    entities::about::{About, AboutRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxAboutRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AboutRepository: Send + Sync {
    /// The single about row, if one has been written.
    async fn get_about(&self) -> Result<Option<About>, AppError>;

    /// Inserts the row or overwrites it in one statement.
    async fn upsert_about(&self, about: &AboutRequest) -> Result<About, AppError>;
}

impl SqlxAboutRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxAboutRepo { pool }
    }
}

#[async_trait]
impl AboutRepository for SqlxAboutRepo {
    async fn get_about(&self) -> Result<Option<About>, AppError> {
        let about = sqlx::query_as::<_, About>(
            r#"SELECT * FROM about ORDER BY id LIMIT 1"#
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(about)
    }

    async fn upsert_about(&self, about: &AboutRequest) -> Result<About, AppError> {
        let saved = sqlx::query_as::<_, About>(
            r#"
            INSERT INTO about (id, bio, philosophy, skills, profile_image, updated_at)
            VALUES (1, $1, $2, $3, $4, NOW())
            ON CONFLICT (id) DO UPDATE SET
                bio = EXCLUDED.bio,
                philosophy = EXCLUDED.philosophy,
                skills = EXCLUDED.skills,
                profile_image = EXCLUDED.profile_image,
                updated_at = NOW()
            RETURNING *
            "#
        )
        .bind(&about.bio)
        .bind(&about.philosophy)
        .bind(&about.skills)
        .bind(&about.profile_image)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }
}
