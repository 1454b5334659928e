use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct About {
    pub id: i32,
    pub bio: String,
    pub philosophy: Option<String>,
    pub skills: Vec<String>,
    pub profile_image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

// ───── Input & Validation ───────────────────────────────────────────

/// Full replacement of the about content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AboutRequest {
    #[validate(length(min = 1, message = "Bio cannot be empty"))]
    pub bio: String,

    pub philosophy: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[validate(length(max = 255))]
    pub profile_image: Option<String>,
}
