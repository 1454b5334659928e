use actix_web::{http::StatusCode, HttpResponse};

use crate::entities::outcome::{FailureCause, WriteOutcome};

/// Renders a write outcome, with `success_status` when it went through.
pub fn outcome_response(outcome: WriteOutcome, success_status: StatusCode) -> HttpResponse {
    let status = match outcome.cause {
        None => success_status,
        Some(FailureCause::Validation) => StatusCode::BAD_REQUEST,
        Some(FailureCause::NotFound) => StatusCode::NOT_FOUND,
        Some(FailureCause::Conflict) => StatusCode::CONFLICT,
        Some(FailureCause::StoreUnavailable) => StatusCode::SERVICE_UNAVAILABLE,
        Some(FailureCause::Store) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    HttpResponse::build(status).json(outcome)
}
