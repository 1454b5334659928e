use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;
pub mod shared_repos;

pub use domain::{entities, revalidation, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, db, limiter, utils};

use auth::{jwt::JwtService, sessions::SessionRegistry};
use limiter::rate_limiter::RateLimiterStore;
use repositories::sqlx_repo::{
    SqlxAboutRepo, SqlxContactRepo, SqlxMessageRepo, SqlxProjectRepo, SqlxResumeRepo, SqlxUserRepo,
};
use revalidation::ViewRegistry;
use shared_repos::SharedRepositories;
use use_cases::{
    about::AboutHandler, auth::AuthHandler, contact::ContactHandler, messages::MessageHandler,
    projects::ProjectHandler, resume::ResumeHandler,
};

pub type AppAuthHandler = AuthHandler<SqlxUserRepo, JwtService>;

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub project_handler: ProjectHandler<SqlxProjectRepo>,
    pub about_handler: AboutHandler<SqlxAboutRepo>,
    pub resume_handler: ResumeHandler<SqlxResumeRepo>,
    pub contact_handler: ContactHandler<SqlxContactRepo>,
    pub message_handler: MessageHandler<SqlxMessageRepo>,
    pub views: Arc<ViewRegistry>,
    pub sessions: Arc<SessionRegistry>,
    pub login_limiter: RateLimiterStore,
    pub message_limiter: RateLimiterStore,
    pub trust_x_forwarded_for: bool,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let repos = SharedRepositories::new(pool);
        let views = Arc::new(ViewRegistry::new());
        let sessions = Arc::new(SessionRegistry::new());

        AppState {
            auth_handler: AuthHandler::new(repos.user_repo, JwtService::new(config), sessions.clone()),
            project_handler: ProjectHandler::new(repos.project_repo, views.clone()),
            about_handler: AboutHandler::new(repos.about_repo, views.clone()),
            resume_handler: ResumeHandler::new(repos.resume_repo, views.clone()),
            contact_handler: ContactHandler::new(repos.contact_repo, views.clone()),
            message_handler: MessageHandler::new(repos.message_repo, views.clone()),
            views,
            sessions,
            login_limiter: RateLimiterStore::per_minute(config.login_attempts_per_minute),
            message_limiter: RateLimiterStore::per_hour(config.messages_per_hour),
            trust_x_forwarded_for: config.trust_x_forwarded_for,
        }
    }
}
