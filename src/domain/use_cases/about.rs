use std::sync::Arc;

use validator::Validate;

use super::write_failure;
use crate::{
    entities::{
        about::{About, AboutRequest},
        outcome::WriteOutcome,
    },
    errors::AppError,
    repositories::about::AboutRepository,
    revalidation::{ViewRegistry, ABOUT_VIEW, DASHBOARD_VIEW},
};

pub struct AboutHandler<R>
where
    R: AboutRepository,
{
    pub about_repo: R,
    views: Arc<ViewRegistry>,
}

impl<R> AboutHandler<R>
where
    R: AboutRepository,
{
    pub fn new(about_repo: R, views: Arc<ViewRegistry>) -> Self {
        AboutHandler { about_repo, views }
    }

    /// The about content, or `None` when nothing has been saved yet or the
    /// store cannot be read.
    pub async fn get_about(&self) -> Option<About> {
        self.about_repo.get_about().await.unwrap_or_else(|e| {
            tracing::error!(operation = "get_about", error = %e, "Failed to fetch about data");
            None
        })
    }

    /// Replaces the about content, creating it on first save.
    pub async fn save_about(&self, request: AboutRequest) -> WriteOutcome {
        let result = async {
            request.validate().map_err(AppError::from)?;
            self.about_repo.upsert_about(&request).await
        }
        .await;

        match result {
            Ok(_) => {
                tracing::info!("About data saved");
                WriteOutcome::succeeded(self.views.mark_stale([ABOUT_VIEW, DASHBOARD_VIEW]))
            }
            Err(e) => write_failure("save_about", "Failed to update about data", &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::entities::outcome::FailureCause;
    use crate::repositories::about::MockAboutRepository;

    fn request(bio: &str) -> AboutRequest {
        AboutRequest {
            bio: bio.to_string(),
            skills: vec!["Rust".into()],
            ..Default::default()
        }
    }

    #[actix_rt::test]
    async fn save_marks_about_and_dashboard_stale() {
        let mut repo = MockAboutRepository::new();
        repo.expect_upsert_about()
            .withf(|req| req.bio == "Backend engineer")
            .times(1)
            .returning(|req| Ok(About {
                id: 1,
                bio: req.bio.clone(),
                philosophy: None,
                skills: req.skills.clone(),
                profile_image: None,
                updated_at: Utc::now(),
            }));

        let handler = AboutHandler::new(repo, Arc::new(ViewRegistry::new()));
        let outcome = handler.save_about(request("Backend engineer")).await;

        assert!(outcome.success);
        assert_eq!(outcome.stale_views, vec![ABOUT_VIEW, DASHBOARD_VIEW]);
    }

    #[actix_rt::test]
    async fn store_failure_uses_generic_reason() {
        let mut repo = MockAboutRepository::new();
        repo.expect_upsert_about()
            .times(1)
            .returning(|_| Err(AppError::StoreUnavailable("connection refused".into())));

        let handler = AboutHandler::new(repo, Arc::new(ViewRegistry::new()));
        let outcome = handler.save_about(request("Backend engineer")).await;

        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("Failed to update about data"));
        assert!(outcome.stale_views.is_empty());
    }

    #[actix_rt::test]
    async fn empty_bio_is_rejected_before_the_store() {
        let mut repo = MockAboutRepository::new();
        repo.expect_upsert_about().never();

        let handler = AboutHandler::new(repo, Arc::new(ViewRegistry::new()));
        let outcome = handler.save_about(request("")).await;

        assert_eq!(outcome.cause, Some(FailureCause::Validation));
    }

    #[actix_rt::test]
    async fn read_failure_is_absent() {
        let mut repo = MockAboutRepository::new();
        repo.expect_get_about()
            .times(1)
            .returning(|| Err(AppError::InternalError("boom".into())));

        let handler = AboutHandler::new(repo, Arc::new(ViewRegistry::new()));

        assert_eq!(handler.get_about().await, None);
    }
}
