//! Reservation coordinator
//!
//! Orchestrates a booking request end to end: resolve the facility's active
//! window for the requested date, validate containment, scan the court ledger
//! for conflicts, price the slot, and commit atomically. The conflict scan
//! and the commit run inside a per-court critical section, so concurrent
//! requests for the same court cannot interleave between check and write —
//! the race that produces double-bookings. Requests for different courts
//! never contend.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use dashmap::DashMap;
use log::{debug, info};
use thiserror::Error;
use tokio::sync::Mutex;

use super::pricing;
use crate::domain::{
    Booking, DomainError, RejectionReason, RepositoryProvider, TimePeriod,
};

/// Default bound on waiting for a court's commit section.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Error surface of the reservation entry points.
#[derive(Debug, Error)]
pub enum ReservationError {
    /// The request was refused for a business reason.
    #[error(transparent)]
    Rejected(#[from] RejectionReason),

    /// The backing storage failed; the ledger was left untouched.
    #[error(transparent)]
    Storage(#[from] DomainError),

    /// Timed out waiting for the court's commit section. Retryable; nothing
    /// was mutated.
    #[error("timed out waiting to commit on court {court_id}")]
    Timeout { court_id: i32 },
}

/// A court's occupancy for one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySchedule {
    /// Operating window, or `None` when the facility is closed that day
    pub window: Option<TimePeriod>,
    /// Confirmed bookings and blackouts touching the date, by start time
    pub busy: Vec<TimePeriod>,
}

/// Coordinates court reservations.
///
/// Collaborators arrive through explicit constructor injection; the service
/// owns the per-court locking discipline and nothing else mutates ledgers.
pub struct ReservationService {
    repos: Arc<dyn RepositoryProvider>,
    court_locks: DashMap<i32, Arc<Mutex<()>>>,
    lock_timeout: Duration,
}

impl ReservationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self::with_lock_timeout(repos, DEFAULT_LOCK_TIMEOUT)
    }

    pub fn with_lock_timeout(repos: Arc<dyn RepositoryProvider>, lock_timeout: Duration) -> Self {
        Self {
            repos,
            court_locks: DashMap::new(),
            lock_timeout,
        }
    }

    /// Reserve `court_id` for `[start, end)` on behalf of `user_id`.
    ///
    /// Validation happens before any lock is acquired: a refused request
    /// never touches the ledger. Only a conflict can newly appear inside the
    /// commit section, when another request for the same court won the race.
    pub async fn reserve(
        &self,
        court_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        user_id: &str,
    ) -> Result<Booking, ReservationError> {
        let court = self
            .repos
            .courts()
            .find_by_id(court_id)
            .await?
            .ok_or(RejectionReason::CourtNotFound(court_id))?;
        let facility = self
            .repos
            .facilities()
            .find_by_id(court.facility_id)
            .await?
            .ok_or(RejectionReason::FacilityNotFound(court.facility_id))?;

        let requested =
            TimePeriod::new(start, end).map_err(|_| RejectionReason::InvalidPeriod)?;

        let date = requested.start().date_naive();
        let window = facility
            .schedule
            .active_window(date)
            .ok_or(RejectionReason::Closed(date.weekday()))?;
        if !window.contains(&requested) {
            return Err(RejectionReason::OutOfHours { window }.into());
        }

        let lock = self.lock_for(court_id);
        let _section = tokio::time::timeout(self.lock_timeout, lock.lock())
            .await
            .map_err(|_| ReservationError::Timeout { court_id })?;

        // Re-read inside the section so the scan sees ledger entries
        // committed while we were waiting.
        let mut court = self
            .repos
            .courts()
            .find_by_id(court_id)
            .await?
            .ok_or(RejectionReason::CourtNotFound(court_id))?;

        if let Some(existing) = court.ledger.find_conflict(&requested) {
            debug!(
                "Reservation refused on court {}: {} conflicts with {}",
                court_id, requested, existing
            );
            return Err(RejectionReason::Conflict { with: existing }.into());
        }

        let price = pricing::price(court.price_per_hour, &requested);
        let booking_id = self.repos.bookings().next_id().await?;
        let booking = Booking::new(booking_id, court_id, user_id, requested, price, &facility);

        // The mutation lives on our own copy until commit_reservation
        // persists it; a storage failure therefore leaves no half-state.
        court.ledger.insert(requested);
        let booking = self.repos.commit_reservation(&court, booking).await?;

        info!(
            "Booking {} committed: court={} period={} price={}",
            booking.id, court_id, requested, booking.price
        );
        Ok(booking)
    }

    /// Block `[start, end)` on a court for maintenance.
    ///
    /// Runs under the same commit section as [`ReservationService::reserve`];
    /// a window overlapping any confirmed booking or existing blackout is
    /// refused with `Conflict`.
    pub async fn schedule_blackout(
        &self,
        court_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<(), ReservationError> {
        let period = TimePeriod::new(start, end).map_err(|_| RejectionReason::InvalidPeriod)?;

        let lock = self.lock_for(court_id);
        let _section = tokio::time::timeout(self.lock_timeout, lock.lock())
            .await
            .map_err(|_| ReservationError::Timeout { court_id })?;

        let court = self
            .repos
            .courts()
            .find_by_id(court_id)
            .await?
            .ok_or(RejectionReason::CourtNotFound(court_id))?;

        if let Some(existing) = court.ledger.find_conflict(&period) {
            return Err(RejectionReason::Conflict { with: existing }.into());
        }

        self.repos.courts().add_blackout(court_id, period).await?;
        info!("Blackout scheduled: court={} period={}", court_id, period);
        Ok(())
    }

    /// All bookings of a user, newest first.
    pub async fn bookings_for_user(&self, user_id: &str) -> Result<Vec<Booking>, ReservationError> {
        Ok(self.repos.bookings().list_for_user(user_id).await?)
    }

    /// Operating window and occupied slots of a court on `date`.
    ///
    /// Read-only; takes no lock. The result is a snapshot and may be stale
    /// by the time a follow-up reservation is attempted.
    pub async fn day_schedule(
        &self,
        court_id: i32,
        date: NaiveDate,
    ) -> Result<DaySchedule, ReservationError> {
        let court = self
            .repos
            .courts()
            .find_by_id(court_id)
            .await?
            .ok_or(RejectionReason::CourtNotFound(court_id))?;
        let facility = self
            .repos
            .facilities()
            .find_by_id(court.facility_id)
            .await?
            .ok_or(RejectionReason::FacilityNotFound(court.facility_id))?;

        let day_start = date.and_time(NaiveTime::MIN).and_utc();
        let day = TimePeriod::new(day_start, day_start + chrono::Duration::days(1))
            .map_err(|_| RejectionReason::InvalidPeriod)?;

        let mut busy: Vec<TimePeriod> = court
            .ledger
            .confirmed()
            .iter()
            .chain(court.ledger.blackouts().iter())
            .filter(|p| p.overlaps(&day))
            .copied()
            .collect();
        busy.sort_by_key(|p| p.start());

        Ok(DaySchedule {
            window: facility.schedule.active_window(date),
            busy,
        })
    }

    fn lock_for(&self, court_id: i32) -> Arc<Mutex<()>> {
        self.court_locks
            .entry(court_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

// ── Tests ──────────────────────────────────────────────────────
