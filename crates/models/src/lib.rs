pub mod comment;
pub mod db;
pub mod errors;
pub mod like;
pub mod post;
pub mod user;
pub mod user_credentials;

#[cfg(test)]
mod tests;
