use thiserror::Error;

/// Business errors for the blog CRUD workflows.
///
/// `NotFound` and `MissingRelation` both mean an entity is absent; they are
/// kept apart because transports report a missing mutation target differently
/// from a missing referenced entity on create.
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("referenced {0} does not exist")]
    MissingRelation(String),
    #[error("owner id differs from caller")]
    OwnerMismatch,
    #[error("repository error: {0}")]
    Repository(String),
}

impl BlogError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(entity.to_string())
    }

    pub fn missing(entity: &str) -> Self {
        Self::MissingRelation(entity.to_string())
    }
}

impl From<models::errors::ModelError> for BlogError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(msg) => Self::Validation(msg),
            models::errors::ModelError::Db(msg) => Self::Repository(msg),
        }
    }
}
