use async_trait::async_trait;

use crate::{
    entities::contact::{Contact, ContactRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn get_contact(&self) -> Result<Option<Contact>, AppError>;
    async fn upsert_contact(&self, contact: &ContactRequest) -> Result<Contact, AppError>;
}

impl SqlxContactRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxContactRepo { pool }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn get_contact(&self) -> Result<Option<Contact>, AppError> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"SELECT * FROM contact ORDER BY id LIMIT 1"#
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }

    async fn upsert_contact(&self, contact: &ContactRequest) -> Result<Contact, AppError> {
        let saved = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contact (id, email, phone, location, github, instagram, linkedin, updated_at)
            VALUES (1, $1, $2, $3, $4, $5, $6, NOW())
            ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                location = EXCLUDED.location,
                github = EXCLUDED.github,
                instagram = EXCLUDED.instagram,
                linkedin = EXCLUDED.linkedin,
                updated_at = NOW()
            RETURNING *
            "#
        )
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.location)
        .bind(&contact.github)
        .bind(&contact.instagram)
        .bind(&contact.linkedin)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }
}
