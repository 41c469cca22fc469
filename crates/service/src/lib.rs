pub mod auth;
pub mod blog;
