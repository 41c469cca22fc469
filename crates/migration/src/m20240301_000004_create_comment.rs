//! Create `comment` table with owner FK to `user` and target FK to `post`.
//! Both FKs are `NO ACTION`, matching the post table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(integer(Comment::Id).auto_increment().primary_key())
                    .col(uuid(Comment::UserId).not_null())
                    .col(integer(Comment::PostId).not_null())
                    .col(ColumnDef::new(Comment::Content).text().null())
                    .col(timestamp_with_time_zone(Comment::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_user")
                            .from(Comment::Table, Comment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_post")
                            .from(Comment::Table, Comment::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Comment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Comment { Table, Id, UserId, PostId, Content, CreatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Post { Table, Id }
