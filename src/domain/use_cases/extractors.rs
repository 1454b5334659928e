use actix_web::{FromRequest, HttpRequest, HttpMessage};
use futures_util::future::{ready, Ready};
use crate::{entities::token::Claims, errors::AuthError};

/// The admin session the auth middleware attached to the request.
/// Returns 401 when the request carries none.
/// Usage: Add `session: AdminSession` as a parameter to your handler function.
#[derive(Debug)]
pub struct AdminSession(pub Claims);

impl FromRequest for AdminSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AdminSession(claims.clone()))),
            None => ready(Err(AuthError::MissingCredentials.into())),
        }
    }
}
