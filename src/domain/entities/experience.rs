use serde::{Deserialize, Serialize};
use validator::Validate;

/// One job on the resume. Dates are free-form ("2021", "Mar 2022", "Present").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ExperienceEntry {
    #[validate(length(min = 1, message = "Experience title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Company cannot be empty"))]
    pub company: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub start_date: String,

    #[serde(default)]
    pub end_date: String,

    #[serde(default)]
    pub description: String,
}
