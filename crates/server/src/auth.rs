use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::{request::Parts, StatusCode},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{decode, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use uuid::Uuid;

use service::auth::domain::{Claims, LoginInput, RegisterInput};
use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::service::{AuthConfig, AuthService};
use service::blog::repo::seaorm::SeaOrmBlogRepository;
use service::blog::service::BlogService;

use crate::errors::JsonApiError;

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub jwt_secret: String,
}

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: ServerAuthConfig,
}

pub fn blog_service(state: &ServerState) -> BlogService<SeaOrmBlogRepository> {
    BlogService::new(Arc::new(SeaOrmBlogRepository { db: state.db.clone() }))
}

fn auth_service(state: &ServerState) -> AuthService<SeaOrmAuthRepository> {
    AuthService::new(
        Arc::new(SeaOrmAuthRepository { db: state.db.clone() }),
        AuthConfig {
            jwt_secret: Some(state.auth.jwt_secret.clone()),
            password_algorithm: "argon2".into(),
        },
    )
}

/// Caller identity, resolved from the `auth_token` session cookie.
pub struct CurrentUser(pub Uuid);

#[async_trait]
impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = JsonApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(AUTH_COOKIE).map(|c| c.value().to_string()).ok_or_else(|| {
            JsonApiError::new(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                Some("missing auth cookie".into()),
            )
        })?;
        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(state.auth.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| {
            JsonApiError::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(e.to_string()))
        })?;
        let uid = Uuid::parse_str(&data.claims.uid).map_err(|e| {
            JsonApiError::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(e.to_string()))
        })?;
        Ok(CurrentUser(uid))
    }
}

#[derive(Serialize)]
pub struct RegisterOutput {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct MeOutput {
    pub user_id: Uuid,
    pub email: String,
    pub username: String,
}

#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = crate::openapi::RegisterRequest,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Invalid email, username or password"),
        (status = 409, description = "Email already registered"),
    )
)]
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterInput>,
) -> Result<(StatusCode, Json<RegisterOutput>), JsonApiError> {
    let created = auth_service(&state).register(input).await?;
    Ok((StatusCode::CREATED, Json(RegisterOutput { user_id: created.id })))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = crate::openapi::LoginRequest,
    responses(
        (status = 200, description = "Session cookie set"),
        (status = 401, description = "Invalid credentials"),
    )
)]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> Result<(CookieJar, Json<MeOutput>), JsonApiError> {
    let session = auth_service(&state).login(input).await?;
    let user = session.user;
    let token = session.token.ok_or_else(|| {
        JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            Some("token generation failed".into()),
        )
    })?;

    let mut cookie = Cookie::new(AUTH_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(false);
    cookie.set_same_site(SameSite::Lax);
    let jar = jar.add(cookie);

    let me = MeOutput { user_id: user.id, email: user.email, username: user.username };
    Ok((jar, Json(me)))
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    responses((status = 204, description = "Session cookie cleared"))
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.remove(Cookie::from(AUTH_COOKIE));
    (jar, StatusCode::NO_CONTENT)
}
