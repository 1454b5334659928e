pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod message;
pub mod outcome;
pub mod project;
pub mod resume;
pub mod token;
pub mod user;
