use actix_web::{web, HttpResponse, Responder};

use crate::AppState;

/// Every view marked stale since start-up, with its generation.
pub async fn list_views(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.views.snapshot())
}
