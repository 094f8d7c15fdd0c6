//! Booking price calculation

use rust_decimal::Decimal;

use crate::domain::{Money, TimePeriod};

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Price for occupying a court at `rate_per_hour` over `period`.
///
/// Fractional hours bill proportionally at the period's full sub-hour
/// precision; the result is rounded once, per the rule documented on
/// [`Money`]. Pure function — the period was validated at construction.
pub fn price(rate_per_hour: Money, period: &TimePeriod) -> Money {
    let millis = Decimal::from(period.duration().num_milliseconds());
    Money::new(rate_per_hour.amount() * millis / Decimal::from(MILLIS_PER_HOUR)).rounded()
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn slot(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimePeriod {
        TimePeriod::new(
            Utc.with_ymd_and_hms(2026, 3, 2, start_h, start_m, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 2, end_h, end_m, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn whole_hours_multiply_the_rate() {
        let rate = Money::from_major(100_000);
        assert_eq!(price(rate, &slot(12, 0, 14, 0)), Money::from_major(200_000));
    }

    #[test]
    fn fractional_hours_bill_proportionally() {
        let rate = Money::from_major(100_000);
        assert_eq!(price(rate, &slot(12, 0, 13, 30)), Money::from_major(150_000));
    }

    #[test]
    fn sub_hour_slot_is_exact() {
        let rate = Money::from_major(100_000);
        assert_eq!(price(rate, &slot(12, 0, 12, 15)), Money::from_major(25_000));
    }

    #[test]
    fn result_is_rounded_to_cents() {
        // 1 minute at 100/hr = 1.666... → 1.67
        let rate = Money::from_major(100);
        let priced = price(rate, &slot(12, 0, 12, 1));
        assert_eq!(priced, "1.67".parse().unwrap());
    }
}
