use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::contact::ContactRequest,
    handlers::json_error::outcome_response,
    use_cases::extractors::AdminSession,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_contact(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.contact_handler.get_contact().await)
}

#[instrument(skip(_session, state, data))]
pub async fn save_contact(
    _session: AdminSession,
    state: web::Data<AppState>,
    data: web::Json<ContactRequest>,
) -> impl Responder {
    outcome_response(state.contact_handler.save_contact(data.into_inner()).await, StatusCode::OK)
}
