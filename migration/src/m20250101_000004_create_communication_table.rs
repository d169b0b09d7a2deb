use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000003_create_contact_table::Contact;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Communication::Table)
                    .if_not_exists()
                    .col(pk_auto(Communication::Id))
                    .col(integer(Communication::ContactId))
                    .col(string_len(Communication::MessageType, 32))
                    .col(text_null(Communication::Content))
                    .col(
                        timestamp_with_time_zone(Communication::Timestamp)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_communication_contact_id")
                            .from(Communication::Table, Communication::ContactId)
                            .to(Contact::Table, Contact::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Communication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Communication {
    Table,
    Id,
    ContactId,
    MessageType,
    Content,
    Timestamp,
}
