use serde::Serialize;

use crate::errors::AppError;

/// Why a write did not go through. Not serialized, only used to pick the
/// HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    Validation,
    NotFound,
    Conflict,
    StoreUnavailable,
    Store,
}

impl From<&AppError> for FailureCause {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::ValidationError(_) => FailureCause::Validation,
            AppError::NotFound(_) => FailureCause::NotFound,
            AppError::Conflict(_) => FailureCause::Conflict,
            AppError::StoreUnavailable(_) => FailureCause::StoreUnavailable,
            AppError::InternalError(_) => FailureCause::Store,
        }
    }
}

/// Uniform result of every write: `{"success": true, "stale_views": [...]}`
/// or `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WriteOutcome {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stale_views: Vec<String>,

    #[serde(skip)]
    pub cause: Option<FailureCause>,
}

impl WriteOutcome {
    pub fn succeeded(stale_views: Vec<String>) -> Self {
        WriteOutcome {
            success: true,
            error: None,
            stale_views,
            cause: None,
        }
    }

    /// Store failures get the generic per-operation reason; request-level
    /// failures keep their own message.
    pub fn failed(generic_reason: &str, err: &AppError) -> Self {
        let cause = FailureCause::from(err);
        let reason = if err.is_store_failure() || cause == FailureCause::StoreUnavailable {
            generic_reason.to_string()
        } else {
            err.to_string()
        };

        WriteOutcome {
            success: false,
            error: Some(reason),
            stale_views: Vec::new(),
            cause: Some(cause),
        }
    }
}
