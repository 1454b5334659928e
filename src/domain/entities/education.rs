use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EducationEntry {
    #[validate(length(min = 1, message = "Institution cannot be empty"))]
    pub institution: String,

    #[serde(default)]
    pub degree: String,

    #[serde(default)]
    pub field: String,

    #[serde(default)]
    pub start_date: String,

    #[serde(default)]
    pub end_date: String,
}
