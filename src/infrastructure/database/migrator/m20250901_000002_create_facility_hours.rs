//! Create facility_hours table
//!
//! One row per open weekday; a weekday without a row is closed.

use sea_orm_migration::prelude::*;

use super::m20250901_000001_create_facilities::Facilities;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FacilityHours::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FacilityHours::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FacilityHours::FacilityId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FacilityHours::Weekday)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FacilityHours::OpenHour)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FacilityHours::CloseHour)
                            .small_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_facility_hours_facility")
                            .from(FacilityHours::Table, FacilityHours::FacilityId)
                            .to(Facilities::Table, Facilities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_facility_hours_facility")
                    .table(FacilityHours::Table)
                    .col(FacilityHours::FacilityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FacilityHours::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum FacilityHours {
    Table,
    Id,
    FacilityId,
    Weekday,
    OpenHour,
    CloseHour,
}
