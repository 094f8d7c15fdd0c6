//! Create courts table

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
                    .table(Courts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courts::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courts::FacilityId).integer().not_null())
                    .col(ColumnDef::new(Courts::Name).string().not_null())
                    .col(ColumnDef::new(Courts::PricePerHour).string().not_null())
                    .col(
                        ColumnDef::new(Courts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courts_facility")
                            .from(Courts::Table, Courts::FacilityId)
                            .to(Facilities::Table, Facilities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courts_facility")
                    .table(Courts::Table)
                    .col(Courts::FacilityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Courts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Courts {
    Table,
    Id,
    FacilityId,
    Name,
    PricePerHour,
    CreatedAt,
}
