pub mod about;
pub mod auth;
pub mod contact;
pub mod home;
pub mod json_error;
pub mod messages;
pub mod projects;
pub mod resume;
pub mod system;
pub mod views;
