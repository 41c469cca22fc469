use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use uuid::Uuid;

use crate::blog::domain::{CommentDraft, LikeDraft, PostDraft};
use crate::blog::errors::BlogError;
use crate::blog::repository::BlogRepository;

pub struct SeaOrmBlogRepository {
    pub db: DatabaseConnection,
}

fn repo_err(e: sea_orm::DbErr) -> BlogError {
    BlogError::Repository(e.to_string())
}

#[async_trait::async_trait]
impl BlogRepository for SeaOrmBlogRepository {
    async fn find_user(&self, id: Uuid) -> Result<Option<models::user::Model>, BlogError> {
        models::user::Entity::find_by_id(id).one(&self.db).await.map_err(repo_err)
    }

    async fn find_post(&self, id: i32) -> Result<Option<models::post::Model>, BlogError> {
        models::post::Entity::find_by_id(id).one(&self.db).await.map_err(repo_err)
    }

    async fn find_comment(&self, id: i32) -> Result<Option<models::comment::Model>, BlogError> {
        models::comment::Entity::find_by_id(id).one(&self.db).await.map_err(repo_err)
    }

    async fn find_like(&self, id: i32) -> Result<Option<models::like::Model>, BlogError> {
        models::like::Entity::find_by_id(id).one(&self.db).await.map_err(repo_err)
    }

    async fn insert_post(
        &self,
        owner: Uuid,
        draft: &PostDraft,
    ) -> Result<models::post::Model, BlogError> {
        let am = models::post::ActiveModel {
            user_id: Set(owner),
            title: Set(draft.title.clone()),
            content: Set(draft.content.clone()),
            created_at: Set(draft.created_at.into()),
            updated_at: Set(draft.updated_at.into()),
            ..Default::default()
        };
        am.insert(&self.db).await.map_err(repo_err)
    }

    async fn insert_comment(
        &self,
        owner: Uuid,
        post_id: i32,
        draft: &CommentDraft,
    ) -> Result<models::comment::Model, BlogError> {
        let am = models::comment::ActiveModel {
            user_id: Set(owner),
            post_id: Set(post_id),
            content: Set(draft.content.clone()),
            created_at: Set(draft.created_at.into()),
            ..Default::default()
        };
        am.insert(&self.db).await.map_err(repo_err)
    }

    async fn insert_like(
        &self,
        owner: Uuid,
        post_id: i32,
        draft: &LikeDraft,
    ) -> Result<models::like::Model, BlogError> {
        let am = models::like::ActiveModel {
            user_id: Set(owner),
            post_id: Set(post_id),
            created_at: Set(draft.created_at.into()),
            ..Default::default()
        };
        am.insert(&self.db).await.map_err(repo_err)
    }

    async fn update_post(
        &self,
        post: models::post::Model,
        draft: &PostDraft,
    ) -> Result<models::post::Model, BlogError> {
        let mut am: models::post::ActiveModel = post.into();
        am.title = Set(draft.title.clone());
        am.content = Set(draft.content.clone());
        am.updated_at = Set(draft.updated_at.into());
        am.update(&self.db).await.map_err(repo_err)
    }

    async fn update_comment(
        &self,
        comment: models::comment::Model,
        draft: &CommentDraft,
    ) -> Result<models::comment::Model, BlogError> {
        let mut am: models::comment::ActiveModel = comment.into();
        am.content = Set(draft.content.clone());
        am.update(&self.db).await.map_err(repo_err)
    }

    async fn delete_post(&self, id: i32) -> Result<(), BlogError> {
        models::post::Entity::delete_by_id(id).exec(&self.db).await.map_err(repo_err)?;
        Ok(())
    }

    async fn delete_comment(&self, id: i32) -> Result<(), BlogError> {
        models::comment::Entity::delete_by_id(id).exec(&self.db).await.map_err(repo_err)?;
        Ok(())
    }

    async fn delete_like(&self, id: i32) -> Result<(), BlogError> {
        models::like::Entity::delete_by_id(id).exec(&self.db).await.map_err(repo_err)?;
        Ok(())
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), BlogError> {
        models::user::hard_delete(&self.db, id).await?;
        Ok(())
    }

    async fn comments_of_post(
        &self,
        post: &models::post::Model,
    ) -> Result<Vec<models::comment::Model>, BlogError> {
        post.find_related(models::comment::Entity).all(&self.db).await.map_err(repo_err)
    }

    async fn likes_of_post(
        &self,
        post: &models::post::Model,
    ) -> Result<Vec<models::like::Model>, BlogError> {
        post.find_related(models::like::Entity).all(&self.db).await.map_err(repo_err)
    }
}
