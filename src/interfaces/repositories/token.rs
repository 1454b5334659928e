use jsonwebtoken::TokenData;

use crate::{entities::{token::{Claims, SessionToken}, user::User}, errors::AuthError};

#[cfg_attr(test, mockall::automock)]
pub trait SessionTokenService: Send + Sync {
    /// Issues a signed session token for the user
    fn create_session(&self, user: &User) -> Result<SessionToken, AuthError>;

    /// Verifies signature and expiry, returning the claims
    fn decode_session(&self, token: &str) -> Result<TokenData<Claims>, AuthError>;
}
