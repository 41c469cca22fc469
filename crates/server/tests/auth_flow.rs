use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use serde_json::json;
use tower::Service;
use uuid::Uuid;

use server::auth::{ServerAuthConfig, ServerState};
use server::routes;

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

async fn build_app() -> anyhow::Result<Router> {
    std::env::set_var("CONFIG_PATH", "/nonexistent-config-for-tests.toml");
    let db = models::db::connect().await?;
    if let Err(e) = migration::Migrator::up(&db, None).await {
        let msg = format!("{}", e);
        if msg.contains("duplicate key value violates unique constraint") {
            eprintln!("migrations already applied, continue: {}", msg);
        } else {
            return Err(e.into());
        }
    }
    let state = ServerState {
        db,
        auth: ServerAuthConfig { jwt_secret: "test-secret".into() },
    };
    Ok(routes::build_router(cors(), state))
}

fn register_body(email: &str, username: &str, password: &str) -> serde_json::Value {
    json!({"email": email, "username": username, "phone": null, "password": password})
}

#[tokio::test]
async fn test_register_and_login_flow() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    if std::env::var("DATABASE_URL").is_err() { return Ok(()); }
    let mut app = build_app().await?;

    let email = format!("user_{}@example.com", Uuid::new_v4());
    let username = format!("tester_{}", Uuid::new_v4().simple());
    let password = "S3curePass!";

    // Register
    let req = Request::builder()
        .method("POST")
        .uri("/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&register_body(&email, &username, password))?))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Login
    let req = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&json!({"email": email, "password": password}))?))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    // Must set cookie
    let cookie = resp.headers().get("set-cookie");
    assert!(cookie.is_some());
    Ok(())
}

#[tokio::test]
async fn test_login_wrong_password() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    if std::env::var("DATABASE_URL").is_err() { return Ok(()); }
    let mut app = build_app().await?;

    let email = format!("user_{}@example.com", Uuid::new_v4());
    let username = format!("tester_{}", Uuid::new_v4().simple());

    let req = Request::builder().method("POST").uri("/auth/register").header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&register_body(&email, &username, "StrongPass123"))?))?;
    let _ = app.call(req).await?;

    let req = Request::builder().method("POST").uri("/auth/login").header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&json!({"email": email, "password": "wrong"}))?))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_register_short_password_rejected() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    if std::env::var("DATABASE_URL").is_err() { return Ok(()); }
    let mut app = build_app().await?;

    let req = Request::builder().method("POST").uri("/auth/register").header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&register_body("a@b.com", "A", "short"))?))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_conflict() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    if std::env::var("DATABASE_URL").is_err() { return Ok(()); }
    let mut app = build_app().await?;

    let email = format!("user_{}@example.com", Uuid::new_v4());
    let username = format!("tester_{}", Uuid::new_v4().simple());

    let req = Request::builder().method("POST").uri("/auth/register").header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&register_body(&email, &username, "StrongPass123"))?))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = Request::builder().method("POST").uri("/auth/register").header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&register_body(&email, "other", "StrongPass123"))?))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    Ok(())
}
