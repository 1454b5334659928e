use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder, ResponseError};
use tracing::instrument;

use crate::entities::token::SessionResponse;
use crate::entities::user::LoginUser;
use crate::errors::AuthError;
use crate::use_cases::extractors::AdminSession;
use crate::utils::get_client_ip::get_client_ip;
use crate::AppState;

#[post("/login")]
#[instrument(skip(req, state, user))]
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    user: web::Json<LoginUser>
) -> HttpResponse {
    let client_ip = get_client_ip(&req, state.trust_x_forwarded_for);
    if let Err(retry_after) = state.login_limiter.check(&client_ip) {
        tracing::warn!(client_ip = %client_ip, "Login rate limited");
        return AuthError::TooManyAttempts(retry_after).error_response();
    }

    match state.auth_handler.login(user.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            tracing::warn!(client_ip = %client_ip, reason = %e, "Login failed");
            e.error_response()
        }
    }
}

/// The current admin session.
#[get("/session")]
pub async fn session(admin: AdminSession) -> impl Responder {
    HttpResponse::Ok().json(SessionResponse::from(&admin.0))
}

#[post("/logout")]
pub async fn logout(
    admin: AdminSession,
    state: web::Data<AppState>,
) -> impl Responder {
    state.auth_handler.logout(&admin.0);
    HttpResponse::Ok().json(serde_json::json!({"success": true}))
}
