use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use service::blog::domain::{LikeDraft, LikeDto};

use crate::auth::{blog_service, CurrentUser, ServerState};
use crate::errors::JsonApiError;

#[utoipa::path(
    post,
    path = "/api/post/{id}/like",
    tag = "like",
    params(("id" = i32, Path, description = "Post id")),
    request_body = crate::openapi::LikeInput,
    responses(
        (status = 201, description = "Like created", body = crate::openapi::LikeResponse,
         headers(("Location" = String, description = "URL of the created like"))),
        (status = 400, description = "Owner or post does not exist"),
        (status = 401, description = "Not authenticated"),
    )
)]
pub async fn create_like(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(post_id): Path<i32>,
    Json(draft): Json<LikeDraft>,
) -> Result<Response, JsonApiError> {
    let dto = blog_service(&state).create_like(user.0, post_id, draft).await?;
    info!(like_id = dto.id, post_id, "like created");
    let location = format!("/api/like/{}", dto.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(dto)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/like/{id}",
    tag = "like",
    params(("id" = i32, Path, description = "Like id")),
    responses(
        (status = 200, description = "Like found", body = crate::openapi::LikeResponse),
        (status = 404, description = "Like does not exist"),
    )
)]
pub async fn get_like(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<LikeDto>, JsonApiError> {
    let dto = blog_service(&state).get_like(id).await?;
    Ok(Json(dto))
}

#[utoipa::path(
    get,
    path = "/api/post/{id}/likes",
    tag = "like",
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Likes of the post", body = [crate::openapi::LikeResponse]),
        (status = 404, description = "Post does not exist"),
    )
)]
pub async fn likes_of_post(
    State(state): State<ServerState>,
    Path(post_id): Path<i32>,
) -> Result<Json<Vec<LikeDto>>, JsonApiError> {
    let dtos = blog_service(&state).likes_of_post(post_id).await?;
    Ok(Json(dtos))
}

#[utoipa::path(
    delete,
    path = "/api/like/{id}",
    tag = "like",
    params(("id" = i32, Path, description = "Like id")),
    responses(
        (status = 204, description = "Like deleted"),
        (status = 400, description = "Caller does not own the like"),
        (status = 404, description = "Like does not exist"),
    )
)]
pub async fn delete_like(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    blog_service(&state).delete_like(user.0, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
