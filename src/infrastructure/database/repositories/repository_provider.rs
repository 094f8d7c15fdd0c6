//! SeaORM repository provider
//!
//! Bundles the per-aggregate repositories over one shared connection and
//! implements the atomic reservation commit.

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, TransactionTrait};

use crate::domain::booking::{Booking, BookingRepository};
use crate::domain::court::{Court, CourtRepository};
use crate::domain::facility::FacilityRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::court;

use super::booking_repository::{booking_to_active_model, SeaOrmBookingRepository};
use super::court_repository::SeaOrmCourtRepository;
use super::facility_repository::SeaOrmFacilityRepository;

pub struct SeaOrmRepositoryProvider {
    db: DatabaseConnection,
    facilities: SeaOrmFacilityRepository,
    courts: SeaOrmCourtRepository,
    bookings: SeaOrmBookingRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            facilities: SeaOrmFacilityRepository::new(db.clone()),
            courts: SeaOrmCourtRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            db,
        }
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

#[async_trait]
impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn facilities(&self) -> &dyn FacilityRepository {
        &self.facilities
    }

    fn courts(&self) -> &dyn CourtRepository {
        &self.courts
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    async fn commit_reservation(&self, court: &Court, booking: Booking) -> DomainResult<Booking> {
        debug!(
            "Committing booking {} on court {}: {}",
            booking.id, court.id, booking.period
        );

        // The bookings table is the persistent form of the confirmed set, so
        // inserting the row is the ledger update. Dropping the transaction on
        // any early return rolls it back.
        let txn = self.db.begin().await.map_err(db_err)?;

        let exists = court::Entity::find_by_id(court.id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .is_some();
        if !exists {
            return Err(DomainError::NotFound {
                entity: "Court",
                field: "id",
                value: court.id.to_string(),
            });
        }

        booking_to_active_model(&booking)
            .insert(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(booking)
    }
}
