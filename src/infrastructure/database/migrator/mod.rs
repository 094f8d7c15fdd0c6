//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_facilities;
mod m20250901_000002_create_facility_hours;
mod m20250901_000003_create_courts;
mod m20250901_000004_create_blackout_periods;
mod m20250901_000005_create_bookings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_facilities::Migration),
            Box::new(m20250901_000002_create_facility_hours::Migration),
            Box::new(m20250901_000003_create_courts::Migration),
            Box::new(m20250901_000004_create_blackout_periods::Migration),
            Box::new(m20250901_000005_create_bookings::Migration),
        ]
    }
}
