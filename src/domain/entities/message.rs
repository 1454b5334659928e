use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Contact form submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewMessageRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"), length(max = 255))]
    pub email: String,

    #[validate(length(max = 255))]
    pub subject: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageInsert {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl NewMessageRequest {
    /// Trims every field and lower-cases the email. Validation runs on the result.
    pub fn normalized(self) -> Self {
        NewMessageRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            subject: self.subject
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            message: self.message.trim().to_string(),
        }
    }

    pub fn prepare_for_insert(&self) -> MessageInsert {
        MessageInsert {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}
