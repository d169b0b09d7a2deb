use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000004_create_communication_table::Communication;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attachment::Table)
                    .if_not_exists()
                    .col(pk_auto(Attachment::Id))
                    .col(integer(Attachment::CommunicationId))
                    .col(string_len(Attachment::Filename, 255))
                    .col(string_len(Attachment::Filetype, 50))
                    .col(string_len(Attachment::Filepath, 255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attachment_communication_id")
                            .from(Attachment::Table, Attachment::CommunicationId)
                            .to(Communication::Table, Communication::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attachment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attachment {
    Table,
    Id,
    CommunicationId,
    Filename,
    Filetype,
    Filepath,
}
