use std::sync::Arc;

use validator::Validate;

use super::write_failure;
use crate::{
    entities::{
        contact::{Contact, ContactRequest},
        outcome::WriteOutcome,
    },
    errors::AppError,
    repositories::contact::ContactRepository,
    revalidation::{ViewRegistry, CONTACT_VIEW, DASHBOARD_VIEW},
};

pub struct ContactHandler<R>
where
    R: ContactRepository,
{
    pub contact_repo: R,
    views: Arc<ViewRegistry>,
}

impl<R> ContactHandler<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repo: R, views: Arc<ViewRegistry>) -> Self {
        ContactHandler { contact_repo, views }
    }

    pub async fn get_contact(&self) -> Option<Contact> {
        self.contact_repo.get_contact().await.unwrap_or_else(|e| {
            tracing::error!(operation = "get_contact", error = %e, "Failed to fetch contact data");
            None
        })
    }

    pub async fn save_contact(&self, request: ContactRequest) -> WriteOutcome {
        let result = async {
            request.validate().map_err(AppError::from)?;
            self.contact_repo.upsert_contact(&request).await
        }
        .await;

        match result {
            Ok(_) => {
                tracing::info!("Contact data saved");
                WriteOutcome::succeeded(self.views.mark_stale([CONTACT_VIEW, DASHBOARD_VIEW]))
            }
            Err(e) => write_failure("save_contact", "Failed to update contact data", &e),
        }
    }
}
