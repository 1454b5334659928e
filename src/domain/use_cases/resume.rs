use std::sync::Arc;

use validator::Validate;

use super::write_failure;
use crate::{
    entities::{
        outcome::WriteOutcome,
        resume::{Resume, ResumeRequest},
    },
    errors::AppError,
    repositories::resume::ResumeRepository,
    revalidation::{ViewRegistry, DASHBOARD_VIEW, RESUME_VIEW},
};

pub struct ResumeHandler<R>
where
    R: ResumeRepository,
{
    pub resume_repo: R,
    views: Arc<ViewRegistry>,
}

impl<R> ResumeHandler<R>
where
    R: ResumeRepository,
{
    pub fn new(resume_repo: R, views: Arc<ViewRegistry>) -> Self {
        ResumeHandler { resume_repo, views }
    }

    pub async fn get_resume(&self) -> Option<Resume> {
        self.resume_repo.get_resume().await.unwrap_or_else(|e| {
            tracing::error!(operation = "get_resume", error = %e, "Failed to fetch resume data");
            None
        })
    }

    pub async fn save_resume(&self, request: ResumeRequest) -> WriteOutcome {
        let result = async {
            request.validate().map_err(AppError::from)?;
            self.resume_repo.upsert_resume(&request).await
        }
        .await;

        match result {
            Ok(resume) => {
                tracing::info!(
                    experiences = resume.experiences.len(),
                    education = resume.education.len(),
                    "Resume saved"
                );
                WriteOutcome::succeeded(self.views.mark_stale([RESUME_VIEW, DASHBOARD_VIEW]))
            }
            Err(e) => write_failure("save_resume", "Failed to update resume data", &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;

    use crate::entities::{experience::ExperienceEntry, outcome::FailureCause};
    use crate::repositories::resume::MockResumeRepository;

    fn request() -> ResumeRequest {
        ResumeRequest {
            full_name: "Ada Lovelace".into(),
            title: "Engineer".into(),
            experiences: vec![ExperienceEntry {
                title: "Analyst".into(),
                company: "Analytical Engines".into(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[actix_rt::test]
    async fn save_marks_resume_and_dashboard_stale() {
        let mut repo = MockResumeRepository::new();
        repo.expect_upsert_resume()
            .times(1)
            .returning(|req| Ok(Resume {
                id: 1,
                full_name: req.full_name.clone(),
                title: req.title.clone(),
                summary: None,
                experiences: Json(req.experiences.clone()),
                education: Json(req.education.clone()),
                skills: vec![],
                updated_at: Utc::now(),
            }));

        let handler = ResumeHandler::new(repo, Arc::new(ViewRegistry::new()));
        let outcome = handler.save_resume(request()).await;

        assert!(outcome.success);
        assert_eq!(outcome.stale_views, vec![RESUME_VIEW, DASHBOARD_VIEW]);
    }

    #[actix_rt::test]
    async fn invalid_nested_entry_is_rejected() {
        let mut repo = MockResumeRepository::new();
        repo.expect_upsert_resume().never();

        let mut bad = request();
        bad.experiences[0].company = String::new();

        let handler = ResumeHandler::new(repo, Arc::new(ViewRegistry::new()));
        let outcome = handler.save_resume(bad).await;

        assert!(!outcome.success);
        assert_eq!(outcome.cause, Some(FailureCause::Validation));
    }

    #[actix_rt::test]
    async fn store_failure_uses_generic_reason() {
        let mut repo = MockResumeRepository::new();
        repo.expect_upsert_resume()
            .times(1)
            .returning(|_| Err(AppError::StoreUnavailable("timed out".into())));

        let handler = ResumeHandler::new(repo, Arc::new(ViewRegistry::new()));
        let outcome = handler.save_resume(request()).await;

        assert_eq!(outcome.error.as_deref(), Some("Failed to update resume data"));
    }
}
