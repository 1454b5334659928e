use crate::repositories::sqlx_repo::{
    SqlxAboutRepo, SqlxContactRepo, SqlxMessageRepo, SqlxProjectRepo, SqlxResumeRepo, SqlxUserRepo,
};

/// One repository per entity, all over the same pool.
#[derive(Clone)]
pub struct SharedRepositories {
    pub user_repo: SqlxUserRepo,
    pub project_repo: SqlxProjectRepo,
    pub about_repo: SqlxAboutRepo,
    pub resume_repo: SqlxResumeRepo,
    pub contact_repo: SqlxContactRepo,
    pub message_repo: SqlxMessageRepo,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SharedRepositories {
            user_repo: SqlxUserRepo::new(pool.clone()),
            project_repo: SqlxProjectRepo::new(pool.clone()),
            about_repo: SqlxAboutRepo::new(pool.clone()),
            resume_repo: SqlxResumeRepo::new(pool.clone()),
            contact_repo: SqlxContactRepo::new(pool.clone()),
            message_repo: SqlxMessageRepo::new(pool),
        }
    }
}
