use async_trait::async_trait;

use crate::{
    entities::message::{Message, MessageInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxMessageRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create_message(&self, msg: &MessageInsert) -> Result<i32, AppError>;
    /// Newest first.
    async fn list_messages(&self) -> Result<Vec<Message>, AppError>;
    /// Sets the read flag; a message that is already read stays read.
    async fn mark_message_read(&self, id: i32) -> Result<(), AppError>;
}

impl SqlxMessageRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxMessageRepo { pool }
    }
}

#[async_trait]
impl MessageRepository for SqlxMessageRepo {
    async fn create_message(&self, msg: &MessageInsert) -> Result<i32, AppError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list_messages(&self) -> Result<Vec<Message>, AppError> {
        let messages = sqlx::query_as::<_, Message>(
            r#"SELECT * FROM messages ORDER BY created_at DESC, id DESC"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn mark_message_read(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"UPDATE messages SET read = TRUE WHERE id = $1"#
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Message not found".into()));
        }

        Ok(())
    }
}
