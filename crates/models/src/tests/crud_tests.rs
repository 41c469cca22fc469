use crate::db::connect;
use crate::{comment, like, post, user};
use anyhow::Result;
use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use uuid::Uuid;

/// Setup test database with migrations, or None when no database is reachable.
async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

async fn create_test_user(db: &DatabaseConnection) -> Result<user::Model> {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    Ok(user::create(db, &email, "Test User", Some("+4912345678")).await?)
}

#[tokio::test]
async fn test_user_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let created = create_test_user(&db).await?;
    assert_eq!(created.username, "Test User");

    let found = user::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref().map(|u| u.id), Some(created.id));
    assert_eq!(found.unwrap().email, created.email);

    user::hard_delete(&db, created.id).await?;
    let gone = user::Entity::find_by_id(created.id).one(&db).await?;
    assert!(gone.is_none());
    Ok(())
}

#[tokio::test]
async fn test_user_validation() {
    assert!(user::validate_email("no-at-sign").is_err());
    assert!(user::validate_email("a@b.com").is_ok());
    assert!(user::validate_username("  ").is_err());
    assert!(user::validate_username("alice").is_ok());
}

#[tokio::test]
async fn test_post_crud_and_relations() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let owner = create_test_user(&db).await?;
    let now = Utc::now();

    let post = post::ActiveModel {
        user_id: Set(owner.id),
        title: Set(Some("Hello".into())),
        content: Set(Some("First post".into())),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert!(post.id > 0);

    let c = comment::ActiveModel {
        user_id: Set(owner.id),
        post_id: Set(post.id),
        content: Set(Some("Nice".into())),
        created_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let l = like::ActiveModel {
        user_id: Set(owner.id),
        post_id: Set(post.id),
        created_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    // Relationship fetches off the post row
    let comments = post.find_related(comment::Entity).all(&db).await?;
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, c.id);

    let likes = post.find_related(like::Entity).all(&db).await?;
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].id, l.id);

    // Cleanup in dependency order; FKs are NO ACTION so the owner row
    // cannot go first.
    comment::Entity::delete_by_id(c.id).exec(&db).await?;
    like::Entity::delete_by_id(l.id).exec(&db).await?;
    post::Entity::delete_by_id(post.id).exec(&db).await?;
    user::hard_delete(&db, owner.id).await?;
    Ok(())
}

#[tokio::test]
async fn test_user_delete_does_not_cascade() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let owner = create_test_user(&db).await?;
    let now = Utc::now();
    let post = post::ActiveModel {
        user_id: Set(owner.id),
        title: Set(Some("kept".into())),
        content: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    // With ON DELETE NO ACTION the user row is pinned by its post
    assert!(user::hard_delete(&db, owner.id).await.is_err());
    let still_there = post::Entity::find_by_id(post.id).one(&db).await?;
    assert!(still_there.is_some());

    post::Entity::delete_by_id(post.id).exec(&db).await?;
    user::hard_delete(&db, owner.id).await?;
    Ok(())
}
