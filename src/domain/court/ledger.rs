//! Per-court interval ledger.
//!
//! Tracks the two interval sets that make a slot unavailable: confirmed
//! bookings and maintenance blackouts. Both sets are kept sorted by start
//! time and pairwise non-overlapping. The ledger answers conflict queries;
//! it does not re-validate on insert — the reservation coordinator guarantees
//! the check-then-insert sequence runs inside one per-court commit section.

use serde::{Deserialize, Serialize};

use crate::domain::time_period::TimePeriod;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtLedger {
    confirmed: Vec<TimePeriod>,
    blackouts: Vec<TimePeriod>,
}

impl CourtLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// First period in `confirmed ∪ blackouts` overlapping the candidate.
    ///
    /// Returns the earliest-starting conflicting period so rejection
    /// messages are deterministic. Touching periods are not conflicts.
    pub fn find_conflict(&self, candidate: &TimePeriod) -> Option<TimePeriod> {
        let booked = self.confirmed.iter().find(|p| p.overlaps(candidate));
        let blocked = self.blackouts.iter().find(|p| p.overlaps(candidate));
        match (booked, blocked) {
            (Some(a), Some(b)) => Some(if a.start() <= b.start() { *a } else { *b }),
            (Some(a), None) => Some(*a),
            (None, Some(b)) => Some(*b),
            (None, None) => None,
        }
    }

    /// Record a confirmed booking, preserving sort order.
    ///
    /// Precondition: `find_conflict` returned `None` for this period within
    /// the same commit section.
    pub fn insert(&mut self, period: TimePeriod) {
        Self::insert_sorted(&mut self.confirmed, period);
    }

    /// Record a maintenance blackout, preserving sort order.
    ///
    /// Same precondition as [`CourtLedger::insert`].
    pub fn add_blackout(&mut self, period: TimePeriod) {
        Self::insert_sorted(&mut self.blackouts, period);
    }

    /// Remove a confirmed booking by exact period match.
    ///
    /// Cancellation lives outside this core, but whatever mechanism performs
    /// it shrinks the ledger through here so the sorted, non-overlapping
    /// invariant survives.
    pub fn remove(&mut self, period: &TimePeriod) -> bool {
        match self.confirmed.iter().position(|p| p == period) {
            Some(at) => {
                self.confirmed.remove(at);
                true
            }
            None => false,
        }
    }

    pub fn confirmed(&self) -> &[TimePeriod] {
        &self.confirmed
    }

    pub fn blackouts(&self) -> &[TimePeriod] {
        &self.blackouts
    }

    /// Whether both sets are sorted by start and pairwise non-overlapping.
    /// Exercised by tests after every mutation path.
    pub fn is_consistent(&self) -> bool {
        Self::sorted_and_disjoint(&self.confirmed) && Self::sorted_and_disjoint(&self.blackouts)
    }

    fn insert_sorted(set: &mut Vec<TimePeriod>, period: TimePeriod) {
        let at = set.partition_point(|p| p.start() < period.start());
        set.insert(at, period);
    }

    fn sorted_and_disjoint(set: &[TimePeriod]) -> bool {
        set.windows(2)
            .all(|w| w[0].start() <= w[1].start() && !w[0].overlaps(&w[1]))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn period(start_h: u32, end_h: u32) -> TimePeriod {
        TimePeriod::new(
            Utc.with_ymd_and_hms(2026, 3, 2, start_h, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 2, end_h, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn empty_ledger_has_no_conflicts() {
        let ledger = CourtLedger::new();
        assert_eq!(ledger.find_conflict(&period(10, 12)), None);
    }

    #[test]
    fn detects_overlap_with_confirmed_booking() {
        let mut ledger = CourtLedger::new();
        ledger.insert(period(10, 12));
        assert_eq!(ledger.find_conflict(&period(11, 13)), Some(period(10, 12)));
    }

    #[test]
    fn exact_duplicate_is_a_conflict() {
        let mut ledger = CourtLedger::new();
        ledger.insert(period(10, 12));
        assert_eq!(ledger.find_conflict(&period(10, 12)), Some(period(10, 12)));
    }

    #[test]
    fn touching_periods_are_free() {
        let mut ledger = CourtLedger::new();
        ledger.insert(period(10, 12));
        assert_eq!(ledger.find_conflict(&period(12, 14)), None);
        assert_eq!(ledger.find_conflict(&period(8, 10)), None);
    }

    #[test]
    fn blackouts_conflict_like_bookings() {
        let mut ledger = CourtLedger::new();
        ledger.add_blackout(period(14, 16));
        assert_eq!(ledger.find_conflict(&period(15, 17)), Some(period(14, 16)));
    }

    #[test]
    fn reports_earliest_starting_conflict() {
        let mut ledger = CourtLedger::new();
        ledger.add_blackout(period(12, 14));
        ledger.insert(period(10, 12));
        // Candidate overlaps both; the booking starts first.
        assert_eq!(ledger.find_conflict(&period(11, 13)), Some(period(10, 12)));
    }

    #[test]
    fn insert_keeps_sort_order() {
        let mut ledger = CourtLedger::new();
        ledger.insert(period(18, 20));
        ledger.insert(period(8, 10));
        ledger.insert(period(12, 14));

        assert_eq!(
            ledger.confirmed(),
            &[period(8, 10), period(12, 14), period(18, 20)]
        );
        assert!(ledger.is_consistent());
    }

    #[test]
    fn remove_shrinks_without_breaking_invariant() {
        let mut ledger = CourtLedger::new();
        ledger.insert(period(8, 10));
        ledger.insert(period(12, 14));

        assert!(ledger.remove(&period(8, 10)));
        assert!(!ledger.remove(&period(8, 10)));
        assert_eq!(ledger.confirmed(), &[period(12, 14)]);
        assert!(ledger.is_consistent());
    }

    #[test]
    fn inconsistency_is_detectable() {
        // Bypass the coordinator discipline on purpose.
        let mut ledger = CourtLedger::new();
        ledger.insert(period(10, 12));
        ledger.insert(period(11, 13));
        assert!(!ledger.is_consistent());
    }
}
