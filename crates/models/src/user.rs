use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;
use crate::{comment, like, post};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Post,
    Comment,
    Like,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Post => Entity::has_many(post::Entity).into(),
            Relation::Comment => Entity::has_many(comment::Entity).into(),
            Relation::Like => Entity::has_many(like::Entity).into(),
        }
    }
}

impl Related<post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Like.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    if !email.contains('@') {
        return Err(errors::ModelError::Validation("invalid email".into()));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), errors::ModelError> {
    if username.trim().is_empty() {
        return Err(errors::ModelError::Validation("username required".into()));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    email: &str,
    username: &str,
    phone: Option<&str>,
) -> Result<Model, errors::ModelError> {
    validate_email(email)?;
    validate_username(username)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        username: Set(username.to_string()),
        phone: Set(phone.map(|p| p.to_string())),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
