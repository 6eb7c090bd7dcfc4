//! Create events table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Events::EventName).string().not_null())
                    .col(ColumnDef::new(Events::Category).string().not_null())
                    .col(ColumnDef::new(Events::EventDate).date().not_null())
                    .col(
                        ColumnDef::new(Events::RegistrationStartDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Events::RegistrationEndDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Events::Created).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Index for the availability cascade (category + window scans)
        manager
            .create_index(
                Index::create()
                    .name("idx_events_category")
                    .table(Events::Table)
                    .col(Events::Category)
                    .to_owned(),
            )
            .await?;

        // Index for date-based lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_events_event_date")
                    .table(Events::Table)
                    .col(Events::EventDate)
                    .to_owned(),
            )
            .await?;

        // Index for window-containment queries
        manager
            .create_index(
                Index::create()
                    .name("idx_events_registration_window")
                    .table(Events::Table)
                    .col(Events::RegistrationStartDate)
                    .col(Events::RegistrationEndDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Events {
    Table,
    Id,
    EventName,
    Category,
    EventDate,
    RegistrationStartDate,
    RegistrationEndDate,
    Created,
}
