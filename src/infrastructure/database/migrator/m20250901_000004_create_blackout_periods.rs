//! Create blackout_periods table
//!
//! Maintenance blackouts per court; rows are the persistent blackout set of
//! the court's interval ledger.

use sea_orm_migration::prelude::*;

use super::m20250901_000003_create_courts::Courts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlackoutPeriods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlackoutPeriods::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BlackoutPeriods::CourtId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlackoutPeriods::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlackoutPeriods::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blackout_periods_court")
                            .from(BlackoutPeriods::Table, BlackoutPeriods::CourtId)
                            .to(Courts::Table, Courts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blackout_periods_court_start")
                    .table(BlackoutPeriods::Table)
                    .col(BlackoutPeriods::CourtId)
                    .col(BlackoutPeriods::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlackoutPeriods::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum BlackoutPeriods {
    Table,
    Id,
    CourtId,
    StartTime,
    EndTime,
}
