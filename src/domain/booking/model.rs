//! Booking domain entity

use chrono::{DateTime, Utc};

use crate::domain::facility::Facility;
use crate::domain::money::Money;
use crate::domain::time_period::TimePeriod;

/// A confirmed reservation of a court for a time interval.
///
/// Display fields (`facility_name`, `address`, `main_image`) are snapshots
/// taken when the booking is committed: later facility edits never rewrite
/// past bookings. A booking is immutable once created; cancellation (outside
/// this core) removes its period from the court ledger as one atomic step.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    /// Unique booking ID
    pub id: i32,
    /// Reserved court
    pub court_id: i32,
    /// Booking owner, as issued by the identity layer
    pub user_id: String,
    /// Reserved interval
    pub period: TimePeriod,
    /// Price charged for the interval
    pub price: Money,
    /// Facility name at commit time
    pub facility_name: String,
    /// Facility address at commit time
    pub address: String,
    /// Facility main image at commit time
    pub main_image: Option<String>,
    /// When the booking was committed
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Build a booking, snapshotting display fields from the facility.
    pub fn new(
        id: i32,
        court_id: i32,
        user_id: impl Into<String>,
        period: TimePeriod,
        price: Money,
        facility: &Facility,
    ) -> Self {
        Self {
            id,
            court_id,
            user_id: user_id.into(),
            period,
            price,
            facility_name: facility.name.clone(),
            address: facility.address.clone(),
            main_image: facility.main_image.clone(),
            created_at: Utc::now(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_period() -> TimePeriod {
        TimePeriod::new(
            Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn snapshots_facility_display_fields() {
        let facility = Facility::new(10, "Arena One", "1 Main St").with_main_image("arena.jpg");
        let booking = Booking::new(
            1,
            7,
            "user-42",
            sample_period(),
            Money::from_major(200_000),
            &facility,
        );

        assert_eq!(booking.facility_name, "Arena One");
        assert_eq!(booking.address, "1 Main St");
        assert_eq!(booking.main_image.as_deref(), Some("arena.jpg"));
    }

    #[test]
    fn snapshot_survives_later_facility_edits() {
        let mut facility = Facility::new(10, "Arena One", "1 Main St");
        let booking = Booking::new(
            1,
            7,
            "user-42",
            sample_period(),
            Money::from_major(200_000),
            &facility,
        );

        facility.name = "Arena Two".to_string();
        assert_eq!(booking.facility_name, "Arena One");
    }
}
