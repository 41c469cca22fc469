use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Post: index on owner
        manager
            .create_index(
                Index::create()
                    .name("idx_post_user")
                    .table(Post::Table)
                    .col(Post::UserId)
                    .to_owned(),
            )
            .await?;

        // Comment: index on owner and on target post
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_user")
                    .table(Comment::Table)
                    .col(Comment::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_post")
                    .table(Comment::Table)
                    .col(Comment::PostId)
                    .to_owned(),
            )
            .await?;

        // Like: index on owner and on target post
        manager
            .create_index(
                Index::create()
                    .name("idx_like_user")
                    .table(Like::Table)
                    .col(Like::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_like_post")
                    .table(Like::Table)
                    .col(Like::PostId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_post_user").table(Post::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_comment_user").table(Comment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_comment_post").table(Comment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_like_user").table(Like::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_like_post").table(Like::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Post { Table, UserId }

#[derive(DeriveIden)]
enum Comment { Table, UserId, PostId }

#[derive(DeriveIden)]
enum Like { Table, UserId, PostId }
