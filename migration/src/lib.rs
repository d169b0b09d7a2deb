pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_user_table;
mod m20250101_000002_create_calendar_event_table;
mod m20250101_000003_create_contact_table;
mod m20250101_000004_create_communication_table;
mod m20250101_000005_create_attachment_table;
mod m20250101_000006_create_resource_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_user_table::Migration),
            Box::new(m20250101_000002_create_calendar_event_table::Migration),
            Box::new(m20250101_000003_create_contact_table::Migration),
            Box::new(m20250101_000004_create_communication_table::Migration),
            Box::new(m20250101_000005_create_attachment_table::Migration),
            Box::new(m20250101_000006_create_resource_table::Migration),
        ]
    }
}
