use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len_uniq(User::Username, 64))
                    .col(string_len_uniq(User::Email, 120))
                    .col(string_len(User::PasswordHash, 256))
                    .col(string_len_null(User::AboutMe, 140))
                    .col(timestamp_with_time_zone_null(User::LastSeen))
                    .col(string_len_null(User::Token, 32).unique_key())
                    .col(timestamp_with_time_zone_null(User::TokenExpiration))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    AboutMe,
    LastSeen,
    Token,
    TokenExpiration,
}
