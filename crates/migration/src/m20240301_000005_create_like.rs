//! Create `like` table with owner FK to `user` and target FK to `post`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Like::Table)
                    .if_not_exists()
                    .col(integer(Like::Id).auto_increment().primary_key())
                    .col(uuid(Like::UserId).not_null())
                    .col(integer(Like::PostId).not_null())
                    .col(timestamp_with_time_zone(Like::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_like_user")
                            .from(Like::Table, Like::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_like_post")
                            .from(Like::Table, Like::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Like::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Like { Table, Id, UserId, PostId, CreatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Post { Table, Id }
