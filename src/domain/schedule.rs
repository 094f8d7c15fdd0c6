//! Weekly operating hours and availability resolution.
//!
//! A facility's schedule is a recurring weekly pattern: for each weekday
//! either an operating window expressed as hour-of-day bounds, or closed.
//! All calendar arithmetic happens in UTC; the facility's hours are
//! interpreted as UTC wall-clock hours.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::time_period::TimePeriod;
use crate::domain::{DomainError, DomainResult};

/// Operating window for one weekday, as hour-of-day bounds.
///
/// `close_hour` may be 24, meaning the facility closes at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    open_hour: u8,
    close_hour: u8,
}

impl DayWindow {
    pub fn new(open_hour: u8, close_hour: u8) -> DomainResult<Self> {
        if open_hour >= close_hour || close_hour > 24 {
            return Err(DomainError::Validation(format!(
                "invalid operating window: {}..{}",
                open_hour, close_hour
            )));
        }
        Ok(Self {
            open_hour,
            close_hour,
        })
    }

    pub fn open_hour(&self) -> u8 {
        self.open_hour
    }

    pub fn close_hour(&self) -> u8 {
        self.close_hour
    }
}

/// Recurring weekly operating hours, one optional window per weekday.
///
/// Owned by `Facility` and mutated only through facility management; the
/// reservation core reads it to resolve a concrete day's active window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    // Indexed by Weekday::num_days_from_sunday().
    days: [Option<DayWindow>; 7],
}

impl WeeklySchedule {
    /// A schedule that is closed every day.
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn set(&mut self, weekday: Weekday, window: DayWindow) {
        self.days[weekday.num_days_from_sunday() as usize] = Some(window);
    }

    pub fn clear(&mut self, weekday: Weekday) {
        self.days[weekday.num_days_from_sunday() as usize] = None;
    }

    pub fn window_for(&self, weekday: Weekday) -> Option<DayWindow> {
        self.days[weekday.num_days_from_sunday() as usize]
    }

    pub fn is_open_on(&self, weekday: Weekday) -> bool {
        self.window_for(weekday).is_some()
    }

    /// Resolve the concrete active window for a calendar date.
    ///
    /// `None` means the facility is closed that day.
    pub fn active_window(&self, date: NaiveDate) -> Option<TimePeriod> {
        let window = self.window_for(date.weekday())?;
        let midnight = date.and_time(NaiveTime::MIN).and_utc();
        let start = midnight + Duration::hours(i64::from(window.open_hour));
        let end = midnight + Duration::hours(i64::from(window.close_hour));
        // open_hour < close_hour is guaranteed by DayWindow's constructor.
        TimePeriod::new(start, end).ok()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn weekday_schedule() -> WeeklySchedule {
        // Open Monday through Saturday 08:00-22:00, closed Sunday.
        let mut schedule = WeeklySchedule::closed();
        let window = DayWindow::new(8, 22).unwrap();
        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ] {
            schedule.set(weekday, window);
        }
        schedule
    }

    #[test]
    fn day_window_validates_bounds() {
        assert!(DayWindow::new(8, 22).is_ok());
        assert!(DayWindow::new(0, 24).is_ok());
        assert!(DayWindow::new(22, 8).is_err());
        assert!(DayWindow::new(10, 10).is_err());
        assert!(DayWindow::new(8, 25).is_err());
    }

    #[test]
    fn resolves_window_on_an_open_day() {
        let schedule = weekday_schedule();
        // 2026-03-02 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let window = schedule.active_window(monday).expect("open on Monday");

        assert_eq!(window.start(), Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap());
        assert_eq!(window.end(), Utc.with_ymd_and_hms(2026, 3, 2, 22, 0, 0).unwrap());
    }

    #[test]
    fn closed_day_has_no_window() {
        let schedule = weekday_schedule();
        // 2026-03-01 is a Sunday.
        let sunday = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert!(schedule.active_window(sunday).is_none());
        assert!(!schedule.is_open_on(Weekday::Sun));
    }

    #[test]
    fn midnight_close_extends_to_next_day() {
        let mut schedule = WeeklySchedule::closed();
        schedule.set(Weekday::Fri, DayWindow::new(18, 24).unwrap());

        // 2026-03-06 is a Friday.
        let friday = NaiveDate::from_ymd_opt(2026, 3, 6).unwrap();
        let window = schedule.active_window(friday).expect("open on Friday");
        assert_eq!(window.end(), Utc.with_ymd_and_hms(2026, 3, 7, 0, 0, 0).unwrap());
    }

    #[test]
    fn clear_closes_a_day() {
        let mut schedule = weekday_schedule();
        schedule.clear(Weekday::Mon);
        let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert!(schedule.active_window(monday).is_none());
    }
}
