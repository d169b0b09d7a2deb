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
                    .table(Resource::Table)
                    .if_not_exists()
                    .col(pk_auto(Resource::Id))
                    .col(integer(Resource::UserId))
                    .col(string_len(Resource::Title, 128))
                    .col(text_null(Resource::Description))
                    .col(string_len(Resource::ResourceType, 16).default("document"))
                    .col(string_len_null(Resource::ImageId, 36))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resource_user_id")
                            .from(Resource::Table, Resource::UserId)
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
            .drop_table(Table::drop().table(Resource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Resource {
    Table,
    Id,
    UserId,
    Title,
    Description,
    ResourceType,
    ImageId,
}
