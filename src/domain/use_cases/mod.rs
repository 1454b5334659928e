use crate::{entities::outcome::WriteOutcome, errors::AppError};

pub mod about;
pub mod auth;
pub mod contact;
pub mod extractors;
pub mod messages;
pub mod projects;
pub mod resume;

/// Logs an absorbed write failure and turns it into the failure outcome.
pub(crate) fn write_failure(operation: &str, generic_reason: &str, err: &AppError) -> WriteOutcome {
    if err.is_store_failure() {
        tracing::error!(operation, error = %err, "{}", generic_reason);
    } else {
        tracing::warn!(operation, error = %err, "Write rejected");
    }
    WriteOutcome::failed(generic_reason, err)
}
