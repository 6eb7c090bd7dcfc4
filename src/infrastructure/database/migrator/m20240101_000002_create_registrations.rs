//! Create registrations table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_events::Events;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Registrations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Registrations::FullName).string().not_null())
                    .col(ColumnDef::new(Registrations::Email).string().not_null())
                    .col(
                        ColumnDef::new(Registrations::CollegeName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registrations::Department)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Registrations::Category).string().not_null())
                    .col(ColumnDef::new(Registrations::EventId).integer().not_null())
                    .col(
                        ColumnDef::new(Registrations::Created)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registrations_event")
                            .from(Registrations::Table, Registrations::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for per-event listings and counts
        manager
            .create_index(
                Index::create()
                    .name("idx_registrations_event")
                    .table(Registrations::Table)
                    .col(Registrations::EventId)
                    .to_owned(),
            )
            .await?;

        // Concurrent duplicate submissions for the same event are rejected
        // by the database even when both pass the application-level check.
        // The cross-event same-date variant stays application-checked.
        manager
            .create_index(
                Index::create()
                    .name("uq_registrations_email_event")
                    .table(Registrations::Table)
                    .col(Registrations::Email)
                    .col(Registrations::EventId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Registrations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Registrations {
    Table,
    Id,
    FullName,
    Email,
    CollegeName,
    Department,
    Category,
    EventId,
    Created,
}
