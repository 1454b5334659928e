pub mod entities;
pub mod password;
pub mod revalidation;
pub mod use_cases;
