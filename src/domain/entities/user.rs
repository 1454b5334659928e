use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use validator::Validate;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UserInsert {
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
}

/// Minimal description of the signed-in admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDescriptor {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
}

impl From<&User> for UserDescriptor {
    fn from(user: &User) -> Self {
        UserDescriptor {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

#[derive(Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LoginUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

impl std::fmt::Debug for LoginUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginUser")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
