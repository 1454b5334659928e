use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidateUrl};

use crate::errors::AppError;

// ───── Constants ──────────────────────────────────────────────────────
const MAX_SLUG_LENGTH: usize = 255;
const MAX_TITLE_LENGTH: u64 = 255;
const MAX_LINK_LENGTH: u64 = 255;
// `/projects/featured` is the featured list, so no project may own that slug.
const RESERVED_SLUGS: &[&str] = &["featured"];

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub full_description: Option<String>,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub tech_stack: Vec<String>,
    pub live_link: Option<String>,
    pub github_link: Option<String>,
    pub purpose: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInsert {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub full_description: Option<String>,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub tech_stack: Vec<String>,
    pub live_link: Option<String>,
    pub github_link: Option<String>,
    pub purpose: Option<String>,
    pub featured: bool,
}

/// A project after an update, with the slug it had before.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UpdatedProject {
    #[sqlx(flatten)]
    pub project: Project,
    pub previous_slug: String,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewProjectRequest {
    pub slug: Option<String>,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,

    pub full_description: Option<String>,

    #[validate(length(max = MAX_LINK_LENGTH))]
    pub image: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub tech_stack: Vec<String>,

    #[validate(url(message = "Live link must be a valid URL"), length(max = MAX_LINK_LENGTH))]
    pub live_link: Option<String>,

    #[validate(url(message = "GitHub link must be a valid URL"), length(max = MAX_LINK_LENGTH))]
    pub github_link: Option<String>,

    pub purpose: Option<String>,

    #[serde(default)]
    pub featured: bool,
}

/// Absent fields keep the stored value. On the nullable columns an explicit
/// `null` or an empty string clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateProjectRequest {
    pub slug: Option<String>,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "present")]
    pub full_description: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub image: Option<Option<String>>,

    pub images: Option<Vec<String>>,

    pub tech_stack: Option<Vec<String>>,

    #[serde(default, deserialize_with = "present")]
    pub live_link: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub github_link: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub purpose: Option<Option<String>>,

    pub featured: Option<bool>,
}

// ───── Helper Functions ─────────────────────────────────────────────

/// Maps a field that is present in the body to `Some`, including `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Slugs are lower-case ASCII words joined by single hyphens.
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    if RESERVED_SLUGS.contains(&slug) {
        return Err(AppError::invalid_field("slug", &format!("Slug '{}' is reserved", slug)));
    }

    let well_formed = !slug.is_empty()
        && slug.len() <= MAX_SLUG_LENGTH
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if well_formed {
        Ok(())
    } else {
        Err(AppError::invalid_field(
            "slug",
            "Slug must contain only lowercase letters, digits and single hyphens",
        ))
    }
}

fn check_link(field: &str, value: Option<&str>, message: &str) -> Result<(), AppError> {
    match value {
        Some(link) if !link.validate_url() => Err(AppError::invalid_field(field, message)),
        Some(link) if link.chars().count() > MAX_LINK_LENGTH as usize => {
            Err(AppError::invalid_field(field, "Must be at most 255 characters"))
        }
        _ => Ok(()),
    }
}

fn trimmed_opt(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ───── Insert Preparation Logic ─────────────────────────────────────

impl NewProjectRequest {
    fn normalized(&self) -> Self {
        NewProjectRequest {
            slug: trimmed_opt(self.slug.as_deref()),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            full_description: trimmed_opt(self.full_description.as_deref()),
            image: trimmed_opt(self.image.as_deref()),
            images: clean_list(&self.images),
            tech_stack: clean_list(&self.tech_stack),
            live_link: trimmed_opt(self.live_link.as_deref()),
            github_link: trimmed_opt(self.github_link.as_deref()),
            purpose: trimmed_opt(self.purpose.as_deref()),
            featured: self.featured,
        }
    }

    pub fn prepare_for_insert(&self) -> Result<ProjectInsert, AppError> {
        let request = self.normalized();
        request.validate()?;

        let slug = request.slug.unwrap_or_else(|| slug::slugify(&request.title));
        validate_slug(&slug)?;

        Ok(ProjectInsert {
            slug,
            title: request.title,
            description: request.description,
            full_description: request.full_description,
            image: request.image,
            images: request.images,
            tech_stack: request.tech_stack,
            live_link: request.live_link,
            github_link: request.github_link,
            purpose: request.purpose,
            featured: request.featured,
        })
    }
}

impl UpdateProjectRequest {
    /// Trims the supplied fields and validates what is left.
    pub fn prepare(self) -> Result<Self, AppError> {
        let clear_blank = |field: Option<Option<String>>| field.map(|v| trimmed_opt(v.as_deref()));

        let request = UpdateProjectRequest {
            slug: self.slug.map(|s| s.trim().to_string()),
            title: self.title.map(|s| s.trim().to_string()),
            description: self.description.map(|s| s.trim().to_string()),
            full_description: clear_blank(self.full_description),
            image: clear_blank(self.image),
            images: self.images.as_deref().map(clean_list),
            tech_stack: self.tech_stack.as_deref().map(clean_list),
            live_link: clear_blank(self.live_link),
            github_link: clear_blank(self.github_link),
            purpose: clear_blank(self.purpose),
            featured: self.featured,
        };

        request.validate()?;
        if let Some(slug) = &request.slug {
            validate_slug(slug)?;
        }
        if let Some(Some(image)) = &request.image {
            if image.chars().count() > MAX_LINK_LENGTH as usize {
                return Err(AppError::invalid_field("image", "Must be at most 255 characters"));
            }
        }
        check_link("live_link", request.live_link.clone().flatten().as_deref(), "Live link must be a valid URL")?;
        check_link("github_link", request.github_link.clone().flatten().as_deref(), "GitHub link must be a valid URL")?;

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str) -> NewProjectRequest {
        NewProjectRequest {
            title: title.to_string(),
            description: "A thing I built".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_slug_is_derived_from_title() {
        let insert = request("Realtime Chat App").prepare_for_insert().unwrap();
        assert_eq!(insert.slug, "realtime-chat-app");
    }

    #[test]
    fn explicit_slug_is_kept() {
        let mut req = request("Realtime Chat App");
        req.slug = Some("chat".into());

        assert_eq!(req.prepare_for_insert().unwrap().slug, "chat");
    }

    #[test]
    fn malformed_slug_is_rejected() {
        let mut req = request("Realtime Chat App");
        req.slug = Some("Chat App!".into());

        assert!(matches!(req.prepare_for_insert(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn empty_title_is_rejected() {
        assert!(matches!(request("").prepare_for_insert(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn blank_tech_stack_entries_are_dropped() {
        let mut req = request("Dashboard");
        req.tech_stack = vec!["Rust".into(), "  ".into(), " Postgres ".into()];

        assert_eq!(req.prepare_for_insert().unwrap().tech_stack, vec!["Rust", "Postgres"]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let body = serde_json::json!({
            "title": "Dashboard",
            "description": "Charts",
            "owner": "someone"
        });

        assert!(serde_json::from_value::<NewProjectRequest>(body).is_err());
    }

    #[test]
    fn invalid_link_fails_update_check() {
        let update = UpdateProjectRequest {
            live_link: Some(Some("not a url".into())),
            ..Default::default()
        };

        assert!(update.prepare().is_err());
    }

    #[test]
    fn featured_slug_is_reserved() {
        let mut req = request("Highlights");
        req.slug = Some("featured".into());
        assert!(matches!(req.prepare_for_insert(), Err(AppError::ValidationError(_))));

        assert!(matches!(request("Featured").prepare_for_insert(), Err(AppError::ValidationError(_))));

        let update = UpdateProjectRequest {
            slug: Some("featured".into()),
            ..Default::default()
        };
        assert!(update.prepare().is_err());
    }

    #[test]
    fn blank_title_is_rejected_after_trimming() {
        assert!(matches!(request("   ").prepare_for_insert(), Err(AppError::ValidationError(_))));

        let update = UpdateProjectRequest {
            title: Some("  ".into()),
            ..Default::default()
        };
        assert!(update.prepare().is_err());
    }

    #[test]
    fn update_tells_null_apart_from_absent() {
        let body = serde_json::json!({"title": "Chat v2", "live_link": null});
        let update: UpdateProjectRequest = serde_json::from_value(body).unwrap();

        assert_eq!(update.live_link, Some(None));
        assert_eq!(update.github_link, None);
    }

    #[test]
    fn empty_link_on_update_clears_it() {
        let update = UpdateProjectRequest {
            github_link: Some(Some("".into())),
            purpose: Some(Some("  ".into())),
            ..Default::default()
        };

        let prepared = update.prepare().unwrap();
        assert_eq!(prepared.github_link, Some(None));
        assert_eq!(prepared.purpose, Some(None));
    }
}
