use chrono::{DateTime, Utc};
use serde::{ Serialize, Deserialize };

use crate::entities::user::UserDescriptor;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserDescriptor,
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl LoginResponse {
    pub fn new(user: UserDescriptor, session: SessionToken) -> Self {
        LoginResponse {
            success: true,
            user,
            access_token: session.token,
            token_type: "Bearer".to_string(),
            expires_at: session.expires_at,
        }
    }
}

/// A signed session token and the instant it stops being accepted.
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub token: String,
    pub session_id: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub name: Option<String>,
    pub jti: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: UserDescriptor,
    pub expires_at: DateTime<Utc>,
}

impl From<&Claims> for SessionResponse {
    fn from(claims: &Claims) -> Self {
        SessionResponse {
            user: UserDescriptor {
                id: claims.user_id().unwrap_or_default(),
                email: claims.email.clone(),
                name: claims.name.clone(),
            },
            expires_at: DateTime::from_timestamp(claims.exp as i64, 0).unwrap_or_default(),
        }
    }
}
