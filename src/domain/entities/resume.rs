use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use validator::Validate;

use crate::entities::{education::EducationEntry, experience::ExperienceEntry};

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Resume {
    pub id: i32,
    pub full_name: String,
    pub title: String,
    pub summary: Option<String>,
    pub experiences: Json<Vec<ExperienceEntry>>,
    pub education: Json<Vec<EducationEntry>>,
    pub skills: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ResumeRequest {
    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: String,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    pub summary: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub experiences: Vec<ExperienceEntry>,

    #[serde(default)]
    #[validate(nested)]
    pub education: Vec<EducationEntry>,

    #[serde(default)]
    pub skills: Vec<String>,
}
