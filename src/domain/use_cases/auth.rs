use std::sync::Arc;

use chrono::DateTime;
use once_cell::sync::Lazy;
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::sessions::SessionRegistry;
use crate::entities::token::{Claims, LoginResponse};
use crate::entities::user::{LoginUser, User, UserDescriptor, UserInsert};
use crate::errors::{AppError, AuthError};
use crate::repositories::{token::SessionTokenService, user::UserRepository};
use crate::settings::AdminCredentials;

// Verified against when the email is unknown, so both failure paths do the same work.
static DUMMY_HASH: Lazy<Option<String>> = Lazy::new(|| hash_password("dummy-password").ok());

pub struct AuthHandler<R, T>
where
    R: UserRepository,
    T: SessionTokenService,
{
    pub user_repo: R,
    pub token_service: T,
    sessions: Arc<SessionRegistry>,
}

impl<R, T> AuthHandler<R, T>
where
    R: UserRepository,
    T: SessionTokenService,
{
    pub fn new(user_repo: R, token_service: T, sessions: Arc<SessionRegistry>) -> Self {
        AuthHandler {
            user_repo,
            token_service,
            sessions,
        }
    }

    /// Checks an email and password pair against the stored hash.
    ///
    /// Unknown email, wrong password and malformed input all fail with
    /// `InvalidCredentials`; only a store failure is reported differently.
    pub async fn authenticate(&self, request: &LoginUser) -> Result<User, AuthError> {
        let request = LoginUser {
            email: request.email.trim().to_lowercase(),
            password: request.password.clone(),
        };
        request.validate()?;

        let user = self.user_repo.get_user_by_email(&request.email)
            .await
            .map_err(|e| {
                tracing::error!(operation = "authenticate", error = %e, "Failed to look up user");
                AuthError::LoginFailed
            })?;

        let Some(user) = user else {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                let _ = verify_password(&request.password, dummy);
            }
            return Err(AuthError::InvalidCredentials);
        };

        let is_password_valid = verify_password(&request.password, &user.password_hash)
            .map_err(|e| {
                tracing::error!(user_id = user.id, error = %e, "Stored password hash is unusable");
                AuthError::LoginFailed
            })?;
        if !is_password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Authenticates and opens a session.
    pub async fn login(&self, request: LoginUser) -> Result<LoginResponse, AuthError> {
        let user = self.authenticate(&request).await?;
        let session = self.token_service.create_session(&user)?;

        tracing::info!(user_id = user.id, session_id = %session.session_id, "Admin logged in");
        Ok(LoginResponse::new(UserDescriptor::from(&user), session))
    }

    /// Decodes a bearer token and rejects sessions ended by logout.
    pub fn verify_session(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = self.token_service.decode_session(token)?.claims;

        if self.sessions.is_revoked(&claims.jti) {
            return Err(AuthError::SessionRevoked);
        }

        Ok(claims)
    }

    pub fn logout(&self, claims: &Claims) {
        let expires_at = DateTime::from_timestamp(claims.exp as i64, 0).unwrap_or_default();
        self.sessions.revoke(&claims.jti, expires_at);
        tracing::info!(session_id = %claims.jti, "Admin logged out");
    }

    /// Creates the admin account, or resets its password and name.
    pub async fn ensure_admin(&self, admin: &AdminCredentials) -> Result<User, AppError> {
        let password_hash = hash_password(&admin.password)?;

        let user = self.user_repo.upsert_user(&UserInsert {
            email: admin.email.clone(),
            password_hash,
            name: Some(admin.name.clone()),
        })
        .await?;

        tracing::info!(user_id = user.id, email = %user.email, "Admin account ready");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{Header, TokenData};
    use mockall::predicate::*;
    use zeroize::Zeroizing;

    use crate::entities::token::SessionToken;
    use crate::repositories::{token::MockSessionTokenService, user::MockUserRepository};

    fn admin_user() -> User {
        User {
            id: 1,
            email: "admin@example.com".into(),
            password_hash: hash_password("password").unwrap(),
            name: Some("Admin".into()),
            created_at: Utc::now(),
        }
    }

    fn login(email: &str, password: &str) -> LoginUser {
        LoginUser {
            email: email.into(),
            password: password.into(),
        }
    }

    fn claims(jti: &str) -> Claims {
        Claims {
            sub: "1".into(),
            email: "admin@example.com".into(),
            name: Some("Admin".into()),
            jti: jti.into(),
            exp: (Utc::now() + Duration::minutes(5)).timestamp() as usize,
            iat: Utc::now().timestamp() as usize,
        }
    }

    fn repo_with_admin() -> MockUserRepository {
        let admin = admin_user();
        let mut repo = MockUserRepository::new();
        repo.expect_get_user_by_email()
            .returning(move |email| {
                Ok((email == "admin@example.com").then(|| admin.clone()))
            });
        repo
    }

    fn handler(
        repo: MockUserRepository,
        tokens: MockSessionTokenService,
    ) -> AuthHandler<MockUserRepository, MockSessionTokenService> {
        AuthHandler::new(repo, tokens, Arc::new(SessionRegistry::new()))
    }

    #[actix_rt::test]
    async fn correct_credentials_open_a_session() {
        let mut tokens = MockSessionTokenService::new();
        tokens.expect_create_session()
            .times(1)
            .returning(|_| Ok(SessionToken {
                token: "signed".into(),
                session_id: "sid".into(),
                expires_at: Utc::now() + Duration::minutes(60),
            }));

        let handler = handler(repo_with_admin(), tokens);
        let response = handler.login(login("Admin@Example.com", "password")).await.unwrap();

        assert!(response.success);
        assert_eq!(response.user.email, "admin@example.com");
        assert_eq!(response.access_token, "signed");
        assert_eq!(response.token_type, "Bearer");
    }

    #[actix_rt::test]
    async fn padded_email_is_trimmed_before_validation() {
        let handler = handler(repo_with_admin(), MockSessionTokenService::new());
        let user = handler.authenticate(&login("  Admin@Example.com ", "password")).await.unwrap();

        assert_eq!(user.id, 1);
    }

    #[actix_rt::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let mut tokens = MockSessionTokenService::new();
        tokens.expect_create_session().never();

        let handler = handler(repo_with_admin(), tokens);

        let wrong_password = handler.authenticate(&login("admin@example.com", "wrong")).await.unwrap_err();
        let unknown_email = handler.authenticate(&login("nobody@x.com", "password")).await.unwrap_err();

        assert_eq!(wrong_password, AuthError::InvalidCredentials);
        assert_eq!(wrong_password, unknown_email);
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[actix_rt::test]
    async fn malformed_email_is_an_invalid_credential() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user_by_email().never();

        let handler = handler(repo, MockSessionTokenService::new());
        let err = handler.authenticate(&login("not-an-email", "password")).await.unwrap_err();

        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[actix_rt::test]
    async fn store_failure_is_login_failed() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user_by_email()
            .times(1)
            .returning(|_| Err(AppError::StoreUnavailable("connection refused".into())));

        let handler = handler(repo, MockSessionTokenService::new());
        let err = handler.authenticate(&login("admin@example.com", "password")).await.unwrap_err();

        assert_eq!(err, AuthError::LoginFailed);
        assert_eq!(err.to_string(), "Failed to log in");
    }

    #[actix_rt::test]
    async fn logged_out_session_is_rejected() {
        let mut tokens = MockSessionTokenService::new();
        tokens.expect_decode_session()
            .with(eq("signed"))
            .times(2)
            .returning(|_| Ok(TokenData {
                header: Header::default(),
                claims: claims("sid"),
            }));

        let handler = handler(MockUserRepository::new(), tokens);

        let claims = handler.verify_session("signed").unwrap();
        handler.logout(&claims);

        assert_eq!(handler.verify_session("signed").unwrap_err(), AuthError::SessionRevoked);
    }

    #[actix_rt::test]
    async fn ensure_admin_stores_a_verifiable_hash() {
        let mut repo = MockUserRepository::new();
        repo.expect_upsert_user()
            .withf(|user| {
                user.email == "admin@example.com"
                    && verify_password("password", &user.password_hash).unwrap_or(false)
            })
            .times(1)
            .returning(|user| Ok(User {
                id: 1,
                email: user.email.clone(),
                password_hash: user.password_hash.clone(),
                name: user.name.clone(),
                created_at: Utc::now(),
            }));

        let handler = handler(repo, MockSessionTokenService::new());
        let admin = AdminCredentials {
            email: "admin@example.com".into(),
            password: Zeroizing::new("password".into()),
            name: "Admin".into(),
        };

        let user = handler.ensure_admin(&admin).await.unwrap();
        assert_eq!(user.name.as_deref(), Some("Admin"));
    }
}
