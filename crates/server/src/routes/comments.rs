use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use service::blog::domain::{CommentDraft, CommentDto};

use crate::auth::{blog_service, CurrentUser, ServerState};
use crate::errors::JsonApiError;

#[utoipa::path(
    post,
    path = "/api/post/{id}/comment",
    tag = "comment",
    params(("id" = i32, Path, description = "Post id")),
    request_body = crate::openapi::CommentInput,
    responses(
        (status = 201, description = "Comment created", body = crate::openapi::CommentResponse,
         headers(("Location" = String, description = "URL of the created comment"))),
        (status = 400, description = "Owner or post does not exist"),
        (status = 401, description = "Not authenticated"),
    )
)]
pub async fn create_comment(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(post_id): Path<i32>,
    Json(draft): Json<CommentDraft>,
) -> Result<Response, JsonApiError> {
    let dto = blog_service(&state).create_comment(user.0, post_id, draft).await?;
    info!(comment_id = dto.id, post_id, "comment created");
    let location = format!("/api/comment/{}", dto.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(dto)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/comment/{id}",
    tag = "comment",
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment found", body = crate::openapi::CommentResponse),
        (status = 404, description = "Comment does not exist"),
    )
)]
pub async fn get_comment(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<CommentDto>, JsonApiError> {
    let dto = blog_service(&state).get_comment(id).await?;
    Ok(Json(dto))
}

#[utoipa::path(
    get,
    path = "/api/post/{id}/comments",
    tag = "comment",
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Comments of the post", body = [crate::openapi::CommentResponse]),
        (status = 404, description = "Post does not exist"),
    )
)]
pub async fn comments_of_post(
    State(state): State<ServerState>,
    Path(post_id): Path<i32>,
) -> Result<Json<Vec<CommentDto>>, JsonApiError> {
    let dtos = blog_service(&state).comments_of_post(post_id).await?;
    Ok(Json(dtos))
}

#[utoipa::path(
    put,
    path = "/api/comment/{id}",
    tag = "comment",
    params(("id" = i32, Path, description = "Comment id")),
    request_body = crate::openapi::CommentInput,
    responses(
        (status = 204, description = "Comment updated"),
        (status = 400, description = "Caller does not own the comment"),
        (status = 404, description = "Comment does not exist"),
    )
)]
pub async fn update_comment(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(draft): Json<CommentDraft>,
) -> Result<StatusCode, JsonApiError> {
    blog_service(&state).update_comment(user.0, id, draft).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/comment/{id}",
    tag = "comment",
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 400, description = "Caller does not own the comment"),
        (status = 404, description = "Comment does not exist"),
    )
)]
pub async fn delete_comment(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    blog_service(&state).delete_comment(user.0, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
