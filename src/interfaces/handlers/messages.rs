use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse, Responder, ResponseError};
use tracing::instrument;

use crate::{
    entities::message::NewMessageRequest,
    errors::AuthError,
    handlers::json_error::outcome_response,
    use_cases::extractors::AdminSession,
    utils::get_client_ip::get_client_ip,
    AppState,
};

/// Public contact form. Limited per client IP.
#[instrument(skip(req, state, data))]
pub async fn submit_message(
    req: HttpRequest,
    state: web::Data<AppState>,
    data: web::Json<NewMessageRequest>,
) -> HttpResponse {
    let client_ip = get_client_ip(&req, state.trust_x_forwarded_for);
    if let Err(retry_after) = state.message_limiter.check(&client_ip) {
        tracing::warn!(client_ip = %client_ip, "Message submission rate limited");
        return AuthError::TooManyAttempts(retry_after).error_response();
    }

    outcome_response(state.message_handler.submit_message(data.into_inner()).await, StatusCode::CREATED)
}

#[instrument(skip(_session, state))]
pub async fn list_messages(
    _session: AdminSession,
    state: web::Data<AppState>,
) -> impl Responder {
    HttpResponse::Ok().json(state.message_handler.list_messages().await)
}

#[instrument(skip(_session, state))]
pub async fn mark_message_read(
    _session: AdminSession,
    message_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> impl Responder {
    let outcome = state.message_handler.mark_message_read(message_id.into_inner()).await;
    outcome_response(outcome, StatusCode::OK)
}
