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
                    .table(CalendarEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(CalendarEvent::Id))
                    .col(integer(CalendarEvent::UserId))
                    .col(string_len(CalendarEvent::Title, 128))
                    .col(text_null(CalendarEvent::Description))
                    .col(timestamp_with_time_zone(CalendarEvent::StartTime))
                    .col(timestamp_with_time_zone(CalendarEvent::EndTime))
                    .col(boolean(CalendarEvent::IsRecurring).default(false))
                    .col(string_len_null(CalendarEvent::RecurrencePattern, 64))
                    .col(
                        timestamp_with_time_zone(CalendarEvent::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(CalendarEvent::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_event_user_id")
                            .from(CalendarEvent::Table, CalendarEvent::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_calendar_event_user_start")
                    .table(CalendarEvent::Table)
                    .col(CalendarEvent::UserId)
                    .col(CalendarEvent::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CalendarEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CalendarEvent {
    Table,
    Id,
    UserId,
    Title,
    Description,
    StartTime,
    EndTime,
    IsRecurring,
    RecurrencePattern,
    CreatedAt,
    UpdatedAt,
}
