use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::resume::ResumeRequest,
    handlers::json_error::outcome_response,
    use_cases::extractors::AdminSession,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_resume(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.resume_handler.get_resume().await)
}

#[instrument(skip(_session, state, data))]
pub async fn save_resume(
    _session: AdminSession,
    state: web::Data<AppState>,
    data: web::Json<ResumeRequest>,
) -> impl Responder {
    outcome_response(state.resume_handler.save_resume(data.into_inner()).await, StatusCode::OK)
}
