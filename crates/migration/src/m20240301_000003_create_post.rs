//! Create `post` table with owner FK to `user`.
//!
//! The owner FK is deliberately `NO ACTION`: deleting a user does not
//! cascade into their posts, orphan cleanup is the caller's concern.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(integer(Post::Id).auto_increment().primary_key())
                    .col(uuid(Post::UserId).not_null())
                    .col(ColumnDef::new(Post::Title).string_len(100).null())
                    .col(ColumnDef::new(Post::Content).text().null())
                    .col(timestamp_with_time_zone(Post::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Post::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_user")
                            .from(Post::Table, Post::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Post::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Post { Table, Id, UserId, Title, Content, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }
