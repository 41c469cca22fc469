use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{CommentDraft, LikeDraft, PostDraft};
use super::errors::BlogError;

/// Repository abstraction over the relational store.
///
/// One `find_*` per entity serves both the read and the mutation path; the
/// relationship fetches take the already-resolved post row so they can be
/// issued as a single join query.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn find_user(&self, id: Uuid) -> Result<Option<models::user::Model>, BlogError>;
    async fn find_post(&self, id: i32) -> Result<Option<models::post::Model>, BlogError>;
    async fn find_comment(&self, id: i32) -> Result<Option<models::comment::Model>, BlogError>;
    async fn find_like(&self, id: i32) -> Result<Option<models::like::Model>, BlogError>;

    async fn insert_post(
        &self,
        owner: Uuid,
        draft: &PostDraft,
    ) -> Result<models::post::Model, BlogError>;
    async fn insert_comment(
        &self,
        owner: Uuid,
        post_id: i32,
        draft: &CommentDraft,
    ) -> Result<models::comment::Model, BlogError>;
    async fn insert_like(
        &self,
        owner: Uuid,
        post_id: i32,
        draft: &LikeDraft,
    ) -> Result<models::like::Model, BlogError>;

    /// Writes the mutable fields (title, content, updated_at) of an already
    /// resolved post row.
    async fn update_post(
        &self,
        post: models::post::Model,
        draft: &PostDraft,
    ) -> Result<models::post::Model, BlogError>;
    /// Writes the single mutable field (content) of a resolved comment row.
    async fn update_comment(
        &self,
        comment: models::comment::Model,
        draft: &CommentDraft,
    ) -> Result<models::comment::Model, BlogError>;

    async fn delete_post(&self, id: i32) -> Result<(), BlogError>;
    async fn delete_comment(&self, id: i32) -> Result<(), BlogError>;
    async fn delete_like(&self, id: i32) -> Result<(), BlogError>;
    async fn delete_user(&self, id: Uuid) -> Result<(), BlogError>;

    async fn comments_of_post(
        &self,
        post: &models::post::Model,
    ) -> Result<Vec<models::comment::Model>, BlogError>;
    async fn likes_of_post(
        &self,
        post: &models::post::Model,
    ) -> Result<Vec<models::like::Model>, BlogError>;
}

/// Simple in-memory mock repository for unit tests
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockBlogRepository {
        users: Mutex<HashMap<Uuid, models::user::Model>>,
        posts: Mutex<HashMap<i32, models::post::Model>>,
        comments: Mutex<HashMap<i32, models::comment::Model>>,
        likes: Mutex<HashMap<i32, models::like::Model>>,
        next_id: AtomicI32,
    }

    impl MockBlogRepository {
        pub fn add_user(&self, email: &str, username: &str) -> models::user::Model {
            let user = models::user::Model {
                id: Uuid::new_v4(),
                email: email.to_string(),
                username: username.to_string(),
                phone: None,
            };
            self.users.lock().unwrap().insert(user.id, user.clone());
            user
        }

        fn fresh_id(&self) -> i32 {
            self.next_id.fetch_add(1, Ordering::SeqCst) + 1
        }
    }

    #[async_trait]
    impl BlogRepository for MockBlogRepository {
        async fn find_user(&self, id: Uuid) -> Result<Option<models::user::Model>, BlogError> {
            Ok(self.users.lock().unwrap().get(&id).cloned())
        }

        async fn find_post(&self, id: i32) -> Result<Option<models::post::Model>, BlogError> {
            Ok(self.posts.lock().unwrap().get(&id).cloned())
        }

        async fn find_comment(
            &self,
            id: i32,
        ) -> Result<Option<models::comment::Model>, BlogError> {
            Ok(self.comments.lock().unwrap().get(&id).cloned())
        }

        async fn find_like(&self, id: i32) -> Result<Option<models::like::Model>, BlogError> {
            Ok(self.likes.lock().unwrap().get(&id).cloned())
        }

        async fn insert_post(
            &self,
            owner: Uuid,
            draft: &PostDraft,
        ) -> Result<models::post::Model, BlogError> {
            let post = models::post::Model {
                id: self.fresh_id(),
                user_id: owner,
                title: draft.title.clone(),
                content: draft.content.clone(),
                created_at: draft.created_at.into(),
                updated_at: draft.updated_at.into(),
            };
            self.posts.lock().unwrap().insert(post.id, post.clone());
            Ok(post)
        }

        async fn insert_comment(
            &self,
            owner: Uuid,
            post_id: i32,
            draft: &CommentDraft,
        ) -> Result<models::comment::Model, BlogError> {
            let comment = models::comment::Model {
                id: self.fresh_id(),
                user_id: owner,
                post_id,
                content: draft.content.clone(),
                created_at: draft.created_at.into(),
            };
            self.comments.lock().unwrap().insert(comment.id, comment.clone());
            Ok(comment)
        }

        async fn insert_like(
            &self,
            owner: Uuid,
            post_id: i32,
            draft: &LikeDraft,
        ) -> Result<models::like::Model, BlogError> {
            let like = models::like::Model {
                id: self.fresh_id(),
                user_id: owner,
                post_id,
                created_at: draft.created_at.into(),
            };
            self.likes.lock().unwrap().insert(like.id, like.clone());
            Ok(like)
        }

        async fn update_post(
            &self,
            post: models::post::Model,
            draft: &PostDraft,
        ) -> Result<models::post::Model, BlogError> {
            let mut posts = self.posts.lock().unwrap();
            let stored = posts
                .get_mut(&post.id)
                .ok_or_else(|| BlogError::not_found("post"))?;
            stored.title = draft.title.clone();
            stored.content = draft.content.clone();
            stored.updated_at = draft.updated_at.into();
            Ok(stored.clone())
        }

        async fn update_comment(
            &self,
            comment: models::comment::Model,
            draft: &CommentDraft,
        ) -> Result<models::comment::Model, BlogError> {
            let mut comments = self.comments.lock().unwrap();
            let stored = comments
                .get_mut(&comment.id)
                .ok_or_else(|| BlogError::not_found("comment"))?;
            stored.content = draft.content.clone();
            Ok(stored.clone())
        }

        async fn delete_post(&self, id: i32) -> Result<(), BlogError> {
            self.posts.lock().unwrap().remove(&id);
            Ok(())
        }

        async fn delete_comment(&self, id: i32) -> Result<(), BlogError> {
            self.comments.lock().unwrap().remove(&id);
            Ok(())
        }

        async fn delete_like(&self, id: i32) -> Result<(), BlogError> {
            self.likes.lock().unwrap().remove(&id);
            Ok(())
        }

        async fn delete_user(&self, id: Uuid) -> Result<(), BlogError> {
            self.users.lock().unwrap().remove(&id);
            Ok(())
        }

        async fn comments_of_post(
            &self,
            post: &models::post::Model,
        ) -> Result<Vec<models::comment::Model>, BlogError> {
            let comments = self.comments.lock().unwrap();
            Ok(comments.values().filter(|c| c.post_id == post.id).cloned().collect())
        }

        async fn likes_of_post(
            &self,
            post: &models::post::Model,
        ) -> Result<Vec<models::like::Model>, BlogError> {
            let likes = self.likes.lock().unwrap();
            Ok(likes.values().filter(|l| l.post_id == post.id).cloned().collect())
        }
    }
}
