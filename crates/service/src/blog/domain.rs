use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::BlogError;

/// Post transfer object. The id is server-assigned and ignored on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDto {
    #[serde(skip_deserializing)]
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentDto {
    #[serde(skip_deserializing)]
    pub id: i32,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeDto {
    #[serde(skip_deserializing)]
    pub id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub phone: Option<String>,
}

/// Create/update input for posts; ids and owner come from elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostDraft {
    pub fn validate(&self) -> Result<(), BlogError> {
        if let Some(title) = &self.title {
            if title.chars().count() > models::post::MAX_TITLE_LEN {
                return Err(BlogError::Validation(format!(
                    "title longer than {} characters",
                    models::post::MAX_TITLE_LEN
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDraft {
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeDraft {
    pub created_at: DateTime<Utc>,
}

impl From<models::post::Model> for PostDto {
    fn from(m: models::post::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            content: m.content,
            created_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<models::comment::Model> for CommentDto {
    fn from(m: models::comment::Model) -> Self {
        Self {
            id: m.id,
            content: m.content,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

impl From<models::like::Model> for LikeDto {
    fn from(m: models::like::Model) -> Self {
        Self { id: m.id, created_at: m.created_at.with_timezone(&Utc) }
    }
}

impl From<models::user::Model> for UserDto {
    fn from(m: models::user::Model) -> Self {
        Self { id: m.id, email: m.email, username: m.username, phone: m.phone }
    }
}
