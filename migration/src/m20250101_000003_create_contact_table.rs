use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(pk_auto(Contact::Id))
                    .col(integer(Contact::UserId))
                    .col(string_len(Contact::Name, 128))
                    .col(string_len_null(Contact::PhoneNumber, 15))
                    .col(string_len_null(Contact::Email, 128))
                    .col(string_len_null(Contact::Organization, 128))
                    .col(string_len_null(Contact::Department, 128))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_user_id")
                            .from(Contact::Table, Contact::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contact::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Contact {
    Table,
    Id,
    UserId,
    Name,
    PhoneNumber,
    Email,
    Organization,
    Department,
}
