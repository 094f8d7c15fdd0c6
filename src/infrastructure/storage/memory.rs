//! In-memory storage implementation
//!
//! Backs the repository traits with concurrent maps for development and
//! testing. Atomicity of `commit_reservation` relies on the reservation
//! coordinator's per-court commit section, which serializes every write
//! path for a given court.

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    Booking, BookingRepository, Court, CourtRepository, DomainError, DomainResult, Facility,
    FacilityRepository, RepositoryProvider, TimePeriod,
};

/// In-memory repository provider for development and testing
pub struct InMemoryRepositoryProvider {
    facilities: DashMap<i32, Facility>,
    courts: DashMap<i32, Court>,
    bookings: DashMap<i32, Booking>,
    booking_counter: AtomicI32,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self {
            facilities: DashMap::new(),
            courts: DashMap::new(),
            bookings: DashMap::new(),
            booking_counter: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FacilityRepository for InMemoryRepositoryProvider {
    async fn save(&self, facility: Facility) -> DomainResult<()> {
        self.facilities.insert(facility.id, facility);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Facility>> {
        Ok(self.facilities.get(&id).map(|f| f.clone()))
    }

    async fn list(&self) -> DomainResult<Vec<Facility>> {
        Ok(self.facilities.iter().map(|e| e.value().clone()).collect())
    }
}

#[async_trait]
impl CourtRepository for InMemoryRepositoryProvider {
    async fn save(&self, court: Court) -> DomainResult<()> {
        // Ledger state flows only through commit_reservation/add_blackout;
        // saving an existing court updates its descriptive fields.
        if let Some(mut existing) = self.courts.get_mut(&court.id) {
            existing.name = court.name;
            existing.price_per_hour = court.price_per_hour;
            existing.facility_id = court.facility_id;
        } else {
            self.courts.insert(court.id, court);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Court>> {
        Ok(self.courts.get(&id).map(|c| c.clone()))
    }

    async fn list_for_facility(&self, facility_id: i32) -> DomainResult<Vec<Court>> {
        Ok(self
            .courts
            .iter()
            .filter(|c| c.facility_id == facility_id)
            .map(|c| c.clone())
            .collect())
    }

    async fn add_blackout(&self, court_id: i32, period: TimePeriod) -> DomainResult<()> {
        let mut court = self
            .courts
            .get_mut(&court_id)
            .ok_or_else(|| DomainError::NotFound {
                entity: "Court",
                field: "id",
                value: court_id.to_string(),
            })?;
        court.ledger.add_blackout(period);
        Ok(())
    }
}

#[async_trait]
impl BookingRepository for InMemoryRepositoryProvider {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>> {
        Ok(self.bookings.get(&id).map(|b| b.clone()))
    }

    async fn list_for_court(&self, court_id: i32) -> DomainResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|b| b.court_id == court_id)
            .map(|b| b.clone())
            .collect();
        bookings.sort_by_key(|b| b.period.start());
        Ok(bookings)
    }

    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .map(|b| b.clone())
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(bookings)
    }

    async fn next_id(&self) -> DomainResult<i32> {
        Ok(self.booking_counter.fetch_add(1, Ordering::SeqCst))
    }
}

#[async_trait]
impl RepositoryProvider for InMemoryRepositoryProvider {
    fn facilities(&self) -> &dyn FacilityRepository {
        self
    }

    fn courts(&self) -> &dyn CourtRepository {
        self
    }

    fn bookings(&self) -> &dyn BookingRepository {
        self
    }

    async fn commit_reservation(&self, court: &Court, booking: Booking) -> DomainResult<Booking> {
        if !self.courts.contains_key(&court.id) {
            return Err(DomainError::NotFound {
                entity: "Court",
                field: "id",
                value: court.id.to_string(),
            });
        }
        // Both writes happen under the caller's per-court commit section, so
        // no reader can observe one without the other.
        self.courts.insert(court.id, court.clone());
        self.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Money;
    use chrono::{TimeZone, Utc};

    fn sample_period() -> TimePeriod {
        TimePeriod::new(
            Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_find_facility() {
        let repos = InMemoryRepositoryProvider::new();
        let facility = Facility::new(1, "Arena One", "1 Main St");
        FacilityRepository::save(&repos, facility).await.unwrap();

        let found = FacilityRepository::find_by_id(&repos, 1).await.unwrap();
        assert_eq!(found.map(|f| f.name), Some("Arena One".to_string()));
        assert!(FacilityRepository::find_by_id(&repos, 2)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn court_save_does_not_clobber_the_ledger() {
        let repos = InMemoryRepositoryProvider::new();
        let court = Court::new(7, 1, "Court 1", Money::from_major(100_000));
        CourtRepository::save(&repos, court.clone()).await.unwrap();
        CourtRepository::add_blackout(&repos, 7, sample_period())
            .await
            .unwrap();

        // Re-save with a new rate; blackout must survive.
        let mut renamed = court;
        renamed.price_per_hour = Money::from_major(120_000);
        CourtRepository::save(&repos, renamed).await.unwrap();

        let stored = CourtRepository::find_by_id(&repos, 7).await.unwrap().unwrap();
        assert_eq!(stored.price_per_hour, Money::from_major(120_000));
        assert_eq!(stored.ledger.blackouts().len(), 1);
    }

    #[tokio::test]
    async fn commit_reservation_persists_ledger_and_booking_together() {
        let repos = InMemoryRepositoryProvider::new();
        let facility = Facility::new(1, "Arena One", "1 Main St");
        FacilityRepository::save(&repos, facility.clone())
            .await
            .unwrap();
        let mut court = Court::new(7, 1, "Court 1", Money::from_major(100_000));
        CourtRepository::save(&repos, court.clone()).await.unwrap();

        let period = sample_period();
        court.ledger.insert(period);
        let booking = Booking::new(1, 7, "user-1", period, Money::from_major(200_000), &facility);
        repos.commit_reservation(&court, booking).await.unwrap();

        let stored_court = CourtRepository::find_by_id(&repos, 7).await.unwrap().unwrap();
        assert_eq!(stored_court.ledger.confirmed(), &[period]);
        let stored_booking = BookingRepository::find_by_id(&repos, 1).await.unwrap().unwrap();
        assert_eq!(stored_booking.period, period);
    }

    #[tokio::test]
    async fn commit_reservation_rejects_unknown_court() {
        let repos = InMemoryRepositoryProvider::new();
        let facility = Facility::new(1, "Arena One", "1 Main St");
        let court = Court::new(7, 1, "Court 1", Money::from_major(100_000));
        let booking = Booking::new(
            1,
            7,
            "user-1",
            sample_period(),
            Money::from_major(200_000),
            &facility,
        );

        let err = repos.commit_reservation(&court, booking).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Court", .. }));
    }

    #[tokio::test]
    async fn booking_ids_are_unique_and_increasing() {
        let repos = InMemoryRepositoryProvider::new();
        let first = BookingRepository::next_id(&repos).await.unwrap();
        let second = BookingRepository::next_id(&repos).await.unwrap();
        assert!(second > first);
    }
}
