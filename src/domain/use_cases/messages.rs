use std::sync::Arc;

use validator::Validate;

use super::write_failure;
use crate::{
    entities::{
        message::{Message, NewMessageRequest},
        outcome::WriteOutcome,
    },
    errors::AppError,
    repositories::message::MessageRepository,
    revalidation::{ViewRegistry, DASHBOARD_VIEW},
};

pub struct MessageHandler<R>
where
    R: MessageRepository,
{
    pub message_repo: R,
    views: Arc<ViewRegistry>,
}

impl<R> MessageHandler<R>
where
    R: MessageRepository,
{
    pub fn new(message_repo: R, views: Arc<ViewRegistry>) -> Self {
        MessageHandler { message_repo, views }
    }

    /// Stores a contact form submission.
    pub async fn submit_message(&self, request: NewMessageRequest) -> WriteOutcome {
        let request = request.normalized();
        let result = async {
            request.validate().map_err(AppError::from)?;
            self.message_repo.create_message(&request.prepare_for_insert()).await
        }
        .await;

        match result {
            Ok(id) => {
                tracing::info!(id, "Message received");
                WriteOutcome::succeeded(self.views.mark_stale([DASHBOARD_VIEW]))
            }
            Err(e) => write_failure("submit_message", "Failed to submit message", &e),
        }
    }

    /// Newest first.
    pub async fn list_messages(&self) -> Vec<Message> {
        self.message_repo.list_messages().await.unwrap_or_else(|e| {
            tracing::error!(operation = "list_messages", error = %e, "Failed to fetch messages");
            Vec::new()
        })
    }

    pub async fn mark_message_read(&self, id: i32) -> WriteOutcome {
        match self.message_repo.mark_message_read(id).await {
            Ok(()) => WriteOutcome::succeeded(self.views.mark_stale([DASHBOARD_VIEW])),
            Err(e) => write_failure("mark_message_read", "Failed to mark message as read", &e),
        }
    }
}
