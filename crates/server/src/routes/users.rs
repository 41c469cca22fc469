use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;
use uuid::Uuid;

use service::blog::domain::UserDto;

use crate::auth::{blog_service, CurrentUser, ServerState};
use crate::errors::JsonApiError;

#[utoipa::path(
    get,
    path = "/api/user/{id}",
    tag = "user",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = crate::openapi::UserResponse),
        (status = 404, description = "User does not exist"),
    )
)]
pub async fn get_user(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserDto>, JsonApiError> {
    let dto = blog_service(&state).get_user(id).await?;
    Ok(Json(dto))
}

#[utoipa::path(
    delete,
    path = "/api/user",
    tag = "user",
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User does not exist"),
        (status = 500, description = "Account still owns posts, comments or likes"),
    )
)]
pub async fn delete_self(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> Result<StatusCode, JsonApiError> {
    blog_service(&state).delete_user(user.0).await?;
    info!(user_id = %user.0, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}
