//! Court domain entity

use chrono::{DateTime, Utc};

use super::ledger::CourtLedger;
use crate::domain::money::Money;

/// A single bookable unit within a facility, with an hourly rate and the
/// interval ledger that guards its slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Court {
    /// Unique court ID
    pub id: i32,
    /// Owning facility
    pub facility_id: i32,
    /// Display name ("Court 1", "Center Court")
    pub name: String,
    /// Hourly rate; fractional hours bill proportionally
    pub price_per_hour: Money,
    /// Confirmed bookings and maintenance blackouts
    pub ledger: CourtLedger,
    /// When the court was registered
    pub created_at: DateTime<Utc>,
}

impl Court {
    pub fn new(id: i32, facility_id: i32, name: impl Into<String>, price_per_hour: Money) -> Self {
        Self {
            id,
            facility_id,
            name: name.into(),
            price_per_hour,
            ledger: CourtLedger::new(),
            created_at: Utc::now(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_court_has_an_empty_ledger() {
        let court = Court::new(1, 10, "Court 1", Money::from_major(100_000));
        assert!(court.ledger.confirmed().is_empty());
        assert!(court.ledger.blackouts().is_empty());
        assert_eq!(court.facility_id, 10);
    }
}
