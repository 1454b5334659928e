use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i32,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ContactRequest {
    #[validate(email(message = "Invalid email format"), length(max = 255))]
    pub email: String,

    #[validate(length(max = 50))]
    pub phone: Option<String>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[validate(url(message = "GitHub must be a valid URL"), length(max = 255))]
    pub github: Option<String>,

    #[validate(url(message = "Instagram must be a valid URL"), length(max = 255))]
    pub instagram: Option<String>,

    #[validate(url(message = "LinkedIn must be a valid URL"), length(max = 255))]
    pub linkedin: Option<String>,
}
