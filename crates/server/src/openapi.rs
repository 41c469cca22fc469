use chrono::{DateTime, Utc};
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct RegisterRequest { pub email: String, pub username: String, pub phone: Option<String>, pub password: String }

#[derive(utoipa::ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(utoipa::ToSchema)]
pub struct PostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(utoipa::ToSchema)]
pub struct PostResponse {
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(utoipa::ToSchema)]
pub struct CommentInput {
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(utoipa::ToSchema)]
pub struct CommentResponse {
    pub id: i32,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(utoipa::ToSchema)]
pub struct LikeInput {
    pub created_at: DateTime<Utc>,
}

#[derive(utoipa::ToSchema)]
pub struct LikeResponse {
    pub id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(utoipa::ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub phone: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::auth::register,
        crate::auth::login,
        crate::auth::logout,
        crate::routes::posts::create_post,
        crate::routes::posts::get_post,
        crate::routes::posts::update_post,
        crate::routes::posts::delete_post,
        crate::routes::comments::create_comment,
        crate::routes::comments::get_comment,
        crate::routes::comments::comments_of_post,
        crate::routes::comments::update_comment,
        crate::routes::comments::delete_comment,
        crate::routes::likes::create_like,
        crate::routes::likes::get_like,
        crate::routes::likes::likes_of_post,
        crate::routes::likes::delete_like,
        crate::routes::users::get_user,
        crate::routes::users::delete_self,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            PostInput,
            PostResponse,
            CommentInput,
            CommentResponse,
            LikeInput,
            LikeResponse,
            UserResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "post"),
        (name = "comment"),
        (name = "like"),
        (name = "user")
    )
)]
pub struct ApiDoc;
