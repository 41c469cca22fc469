use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::{CommentDraft, CommentDto, LikeDraft, LikeDto, PostDraft, PostDto, UserDto};
use super::errors::BlogError;
use super::repository::BlogRepository;

/// Blog business service independent of web framework.
///
/// Every mutating operation resolves the caller and target rows first, then
/// applies the ownership rule: the stored owner id must equal the caller id
/// before an update or delete goes through.
pub struct BlogService<R: BlogRepository> {
    repo: Arc<R>,
}

impl<R: BlogRepository> BlogService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, draft), fields(user_id = %user_id))]
    pub async fn create_post(
        &self,
        user_id: Uuid,
        draft: PostDraft,
    ) -> Result<PostDto, BlogError> {
        draft.validate()?;
        if self.repo.find_user(user_id).await?.is_none() {
            debug!("cannot create post: user does not exist");
            return Err(BlogError::missing("user"));
        }
        let created = self.repo.insert_post(user_id, &draft).await?;
        info!(post_id = created.id, "post_created");
        Ok(created.into())
    }

    #[instrument(skip(self, draft), fields(user_id = %user_id, post_id))]
    pub async fn create_comment(
        &self,
        user_id: Uuid,
        post_id: i32,
        draft: CommentDraft,
    ) -> Result<CommentDto, BlogError> {
        if self.repo.find_user(user_id).await?.is_none() {
            debug!("cannot create comment: user does not exist");
            return Err(BlogError::missing("user"));
        }
        if self.repo.find_post(post_id).await?.is_none() {
            debug!("cannot create comment: post does not exist");
            return Err(BlogError::missing("post"));
        }
        let created = self.repo.insert_comment(user_id, post_id, &draft).await?;
        info!(comment_id = created.id, "comment_created");
        Ok(created.into())
    }

    #[instrument(skip(self, draft), fields(user_id = %user_id, post_id))]
    pub async fn create_like(
        &self,
        user_id: Uuid,
        post_id: i32,
        draft: LikeDraft,
    ) -> Result<LikeDto, BlogError> {
        if self.repo.find_user(user_id).await?.is_none() {
            debug!("cannot create like: user does not exist");
            return Err(BlogError::missing("user"));
        }
        if self.repo.find_post(post_id).await?.is_none() {
            debug!("cannot create like: post does not exist");
            return Err(BlogError::missing("post"));
        }
        let created = self.repo.insert_like(user_id, post_id, &draft).await?;
        info!(like_id = created.id, "like_created");
        Ok(created.into())
    }

    pub async fn get_post(&self, id: i32) -> Result<PostDto, BlogError> {
        self.repo
            .find_post(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| BlogError::not_found("post"))
    }

    pub async fn get_comment(&self, id: i32) -> Result<CommentDto, BlogError> {
        self.repo
            .find_comment(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| BlogError::not_found("comment"))
    }

    pub async fn get_like(&self, id: i32) -> Result<LikeDto, BlogError> {
        self.repo
            .find_like(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| BlogError::not_found("like"))
    }

    pub async fn get_user(&self, id: Uuid) -> Result<UserDto, BlogError> {
        self.repo
            .find_user(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| BlogError::not_found("user"))
    }

    pub async fn comments_of_post(&self, post_id: i32) -> Result<Vec<CommentDto>, BlogError> {
        let post = self
            .repo
            .find_post(post_id)
            .await?
            .ok_or_else(|| BlogError::not_found("post"))?;
        let comments = self.repo.comments_of_post(&post).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    pub async fn likes_of_post(&self, post_id: i32) -> Result<Vec<LikeDto>, BlogError> {
        let post = self
            .repo
            .find_post(post_id)
            .await?
            .ok_or_else(|| BlogError::not_found("post"))?;
        let likes = self.repo.likes_of_post(&post).await?;
        Ok(likes.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, draft), fields(user_id = %user_id, post_id))]
    pub async fn update_post(
        &self,
        user_id: Uuid,
        post_id: i32,
        draft: PostDraft,
    ) -> Result<(), BlogError> {
        draft.validate()?;
        let post = self
            .repo
            .find_post(post_id)
            .await?
            .ok_or_else(|| BlogError::not_found("post"))?;
        if post.user_id != user_id {
            debug!(owner = %post.user_id, "post owner differs from caller");
            return Err(BlogError::OwnerMismatch);
        }
        self.repo.update_post(post, &draft).await?;
        info!(post_id, "post_updated");
        Ok(())
    }

    #[instrument(skip(self, draft), fields(user_id = %user_id, comment_id))]
    pub async fn update_comment(
        &self,
        user_id: Uuid,
        comment_id: i32,
        draft: CommentDraft,
    ) -> Result<(), BlogError> {
        let comment = self
            .repo
            .find_comment(comment_id)
            .await?
            .ok_or_else(|| BlogError::not_found("comment"))?;
        if comment.user_id != user_id {
            debug!(owner = %comment.user_id, "comment owner differs from caller");
            return Err(BlogError::OwnerMismatch);
        }
        self.repo.update_comment(comment, &draft).await?;
        info!(comment_id, "comment_updated");
        Ok(())
    }

    #[instrument(skip(self), fields(user_id = %user_id, post_id))]
    pub async fn delete_post(&self, user_id: Uuid, post_id: i32) -> Result<(), BlogError> {
        let post = self
            .repo
            .find_post(post_id)
            .await?
            .ok_or_else(|| BlogError::not_found("post"))?;
        if post.user_id != user_id {
            debug!(owner = %post.user_id, "post owner differs from caller");
            return Err(BlogError::OwnerMismatch);
        }
        self.repo.delete_post(post_id).await?;
        info!(post_id, "post_deleted");
        Ok(())
    }

    #[instrument(skip(self), fields(user_id = %user_id, comment_id))]
    pub async fn delete_comment(&self, user_id: Uuid, comment_id: i32) -> Result<(), BlogError> {
        let comment = self
            .repo
            .find_comment(comment_id)
            .await?
            .ok_or_else(|| BlogError::not_found("comment"))?;
        if comment.user_id != user_id {
            debug!(owner = %comment.user_id, "comment owner differs from caller");
            return Err(BlogError::OwnerMismatch);
        }
        self.repo.delete_comment(comment_id).await?;
        info!(comment_id, "comment_deleted");
        Ok(())
    }

    #[instrument(skip(self), fields(user_id = %user_id, like_id))]
    pub async fn delete_like(&self, user_id: Uuid, like_id: i32) -> Result<(), BlogError> {
        let like = self
            .repo
            .find_like(like_id)
            .await?
            .ok_or_else(|| BlogError::not_found("like"))?;
        if like.user_id != user_id {
            debug!(owner = %like.user_id, "like owner differs from caller");
            return Err(BlogError::OwnerMismatch);
        }
        self.repo.delete_like(like_id).await?;
        info!(like_id, "like_deleted");
        Ok(())
    }

    /// Callers can only delete themselves; the transport derives `user_id`
    /// from the authenticated identity.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn delete_user(&self, user_id: Uuid) -> Result<(), BlogError> {
        if self.repo.find_user(user_id).await?.is_none() {
            return Err(BlogError::not_found("user"));
        }
        self.repo.delete_user(user_id).await?;
        info!("user_deleted");
        Ok(())
    }
}
