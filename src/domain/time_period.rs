//! Half-open time interval value type and the two conflict predicates.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a period's start is not strictly before its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid period: start must be strictly before end")]
pub struct InvalidPeriod;

/// Half-open interval `[start, end)` in UTC.
///
/// The invariant `start < end` is established at construction and never
/// re-checked afterwards. Two periods where one's `end` equals the other's
/// `start` are touching, not overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct TimePeriod {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawPeriod {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawPeriod> for TimePeriod {
    type Error = InvalidPeriod;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        TimePeriod::new(raw.start, raw.end)
    }
}

impl TimePeriod {
    /// Create a period covering `[start, end)`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, InvalidPeriod> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(InvalidPeriod)
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether the two periods share any instant.
    ///
    /// Strict inequalities: touching periods (`a.end == b.start`) do NOT
    /// overlap. This is the predicate that detects double-booking.
    pub fn overlaps(&self, other: &TimePeriod) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Whether `inner` lies fully within this period.
    ///
    /// Inclusive bounds: a request equal to the operating window is inside it.
    pub fn contains(&self, inner: &TimePeriod) -> bool {
        self.start <= inner.start && self.end >= inner.end
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} .. {})",
            self.start.format("%Y-%m-%d %H:%M"),
            self.end.format("%Y-%m-%d %H:%M")
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, hour, min, 0).unwrap()
    }

    fn period(start_h: u32, end_h: u32) -> TimePeriod {
        TimePeriod::new(at(start_h, 0), at(end_h, 0)).unwrap()
    }

    #[test]
    fn rejects_degenerate_periods() {
        assert_eq!(TimePeriod::new(at(12, 0), at(12, 0)), Err(InvalidPeriod));
        assert_eq!(TimePeriod::new(at(14, 0), at(12, 0)), Err(InvalidPeriod));
    }

    #[test]
    fn overlap_is_strict() {
        let a = period(10, 12);
        let b = period(11, 13);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_periods_do_not_overlap() {
        let a = period(10, 12);
        let b = period(12, 14);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn identical_periods_overlap() {
        let a = period(10, 12);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn nested_period_overlaps() {
        let outer = period(8, 22);
        let inner = period(10, 12);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn contains_is_inclusive() {
        let window = period(8, 22);
        assert!(window.contains(&period(8, 22)));
        assert!(window.contains(&period(8, 10)));
        assert!(window.contains(&period(20, 22)));
        assert!(!window.contains(&period(7, 9)));
        assert!(!window.contains(&period(21, 23)));
    }

    #[test]
    fn duration_carries_sub_hour_precision() {
        let p = TimePeriod::new(at(12, 0), at(13, 30)).unwrap();
        assert_eq!(p.duration().num_minutes(), 90);
    }

    #[test]
    fn deserialization_enforces_the_invariant() {
        let ok: Result<TimePeriod, _> = serde_json::from_str(
            r#"{"start":"2026-03-02T10:00:00Z","end":"2026-03-02T12:00:00Z"}"#,
        );
        assert!(ok.is_ok());

        let bad: Result<TimePeriod, _> = serde_json::from_str(
            r#"{"start":"2026-03-02T12:00:00Z","end":"2026-03-02T10:00:00Z"}"#,
        );
        assert!(bad.is_err());
    }
}
