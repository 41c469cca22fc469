use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::auth::{self, ServerState};

pub mod comments;
pub mod likes;
pub mod posts;
pub mod users;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, auth, entity CRUD and docs.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let auth_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout));

    // Entity routes; reads are public, mutations resolve the caller
    // identity through the CurrentUser extractor.
    let api = Router::new()
        .route("/api/post", post(posts::create_post))
        .route(
            "/api/post/:id",
            get(posts::get_post).put(posts::update_post).delete(posts::delete_post),
        )
        .route("/api/post/:id/comment", post(comments::create_comment))
        .route("/api/post/:id/comments", get(comments::comments_of_post))
        .route("/api/post/:id/like", post(likes::create_like))
        .route("/api/post/:id/likes", get(likes::likes_of_post))
        .route(
            "/api/comment/:id",
            get(comments::get_comment)
                .put(comments::update_comment)
                .delete(comments::delete_comment),
        )
        .route("/api/like/:id", get(likes::get_like).delete(likes::delete_like))
        .route("/api/user/:id", get(users::get_user))
        .route("/api/user", delete(users::delete_self));

    Router::new()
        .route("/health", get(health))
        .merge(auth_routes)
        .merge(api)
        .merge(
            SwaggerUi::new("/docs")
                .url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
