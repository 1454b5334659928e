use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::about::AboutRequest,
    handlers::json_error::outcome_response,
    use_cases::extractors::AdminSession,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_about(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.about_handler.get_about().await)
}

#[instrument(skip(_session, state, data))]
pub async fn save_about(
    _session: AdminSession,
    state: web::Data<AppState>,
    data: web::Json<AboutRequest>,
) -> impl Responder {
    outcome_response(state.about_handler.save_about(data.into_inner()).await, StatusCode::OK)
}
