use jsonwebtoken::{encode, Header, decode, Validation, TokenData, Algorithm};
use chrono::{Utc, Duration};
use uuid::Uuid;

use crate::entities::token::{Claims, SessionToken};
use crate::entities::user::User;
use crate::repositories::token::SessionTokenService;
use crate::settings::{AppConfig, SessionKeys};
use crate::errors::AuthError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Clone)]
pub struct JwtService {
    keys: SessionKeys,
    session_ttl: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: SessionKeys::from(config),
            session_ttl: Duration::minutes(config.session_ttl_minutes),
        }
    }

    pub fn create_session(&self, user: &User) -> Result<SessionToken, AuthError> {
        let now = Utc::now();
        let expires_at = now + self.session_ttl;
        let session_id = Uuid::new_v4().to_string();

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            jti: session_id.clone(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding)
            .map_err(|e| {
                tracing::warn!("Failed to sign session token: {}", e);
                AuthError::TokenCreation
            })?;

        Ok(SessionToken {
            token,
            session_id,
            expires_at,
        })
    }

    pub fn decode_session(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &self.keys.decoding,
            &validation
        )
        .map_err(AuthError::from)
    }
}

impl SessionTokenService for JwtService {
    fn create_session(&self, user: &User) -> Result<SessionToken, AuthError> {
        self.create_session(user)
    }

    fn decode_session(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        self.decode_session(token)
    }
}
