pub mod about;
pub mod contact;
pub mod message;
pub mod project;
pub mod resume;
pub mod sqlx_repo;
pub mod token;
pub mod user;
