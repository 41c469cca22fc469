use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{info, warn};

use service::blog::domain::{PostDraft, PostDto};

use crate::auth::{blog_service, CurrentUser, ServerState};
use crate::errors::JsonApiError;

#[utoipa::path(
    post,
    path = "/api/post",
    tag = "post",
    request_body = crate::openapi::PostInput,
    responses(
        (status = 201, description = "Post created", body = crate::openapi::PostResponse,
         headers(("Location" = String, description = "URL of the created post"))),
        (status = 400, description = "Owner does not exist or title too long"),
        (status = 401, description = "Not authenticated"),
    )
)]
pub async fn create_post(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(draft): Json<PostDraft>,
) -> Result<Response, JsonApiError> {
    let dto = blog_service(&state).create_post(user.0, draft).await?;
    info!(post_id = dto.id, "post created");
    let location = format!("/api/post/{}", dto.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(dto)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/post/{id}",
    tag = "post",
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post found", body = crate::openapi::PostResponse),
        (status = 404, description = "Post does not exist"),
    )
)]
pub async fn get_post(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<PostDto>, JsonApiError> {
    let dto = blog_service(&state).get_post(id).await.map_err(|e| {
        warn!(post_id = id, "post lookup failed: {e}");
        JsonApiError::from(e)
    })?;
    Ok(Json(dto))
}

#[utoipa::path(
    put,
    path = "/api/post/{id}",
    tag = "post",
    params(("id" = i32, Path, description = "Post id")),
    request_body = crate::openapi::PostInput,
    responses(
        (status = 204, description = "Post updated"),
        (status = 400, description = "Caller does not own the post"),
        (status = 404, description = "Post does not exist"),
    )
)]
pub async fn update_post(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(draft): Json<PostDraft>,
) -> Result<StatusCode, JsonApiError> {
    blog_service(&state).update_post(user.0, id, draft).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/post/{id}",
    tag = "post",
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 400, description = "Caller does not own the post"),
        (status = 404, description = "Post does not exist"),
    )
)]
pub async fn delete_post(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    blog_service(&state).delete_post(user.0, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
