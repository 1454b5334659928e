use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::project::{NewProjectRequest, UpdateProjectRequest},
    handlers::json_error::outcome_response,
    use_cases::extractors::AdminSession,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_projects(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.project_handler.list_projects().await)
}

#[instrument(skip(state))]
pub async fn list_featured_projects(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.project_handler.list_featured_projects().await)
}

/// Answers `null` for an unknown slug.
#[instrument(skip(state))]
pub async fn get_project(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> impl Responder {
    HttpResponse::Ok().json(state.project_handler.get_project_by_slug(&slug).await)
}

#[instrument(skip(_session, state, data))]
pub async fn create_project(
    _session: AdminSession,
    state: web::Data<AppState>,
    data: web::Json<NewProjectRequest>,
) -> impl Responder {
    let outcome = state.project_handler.create_project(data.into_inner()).await;
    outcome_response(outcome, StatusCode::CREATED)
}

#[instrument(skip(_session, state, data))]
pub async fn update_project(
    _session: AdminSession,
    project_id: web::Path<i32>,
    state: web::Data<AppState>,
    data: web::Json<UpdateProjectRequest>,
) -> impl Responder {
    let outcome = state.project_handler
        .update_project(project_id.into_inner(), data.into_inner())
        .await;
    outcome_response(outcome, StatusCode::OK)
}

#[instrument(skip(_session, state))]
pub async fn delete_project(
    _session: AdminSession,
    project_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> impl Responder {
    let outcome = state.project_handler.delete_project(project_id.into_inner()).await;
    outcome_response(outcome, StatusCode::OK)
}
