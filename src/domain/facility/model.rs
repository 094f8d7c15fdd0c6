//! Facility domain entity

use chrono::{DateTime, Utc};

use crate::domain::schedule::WeeklySchedule;

/// A physical venue with recurring weekly operating hours, containing one or
/// more courts.
#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    /// Unique facility ID
    pub id: i32,
    /// Display name
    pub name: String,
    /// Street address
    pub address: String,
    /// URL or path of the main listing image
    pub main_image: Option<String>,
    /// Weekly operating hours; absent weekday entries mean closed
    pub schedule: WeeklySchedule,
    /// When the facility was registered
    pub created_at: DateTime<Utc>,
}

impl Facility {
    pub fn new(id: i32, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            main_image: None,
            schedule: WeeklySchedule::closed(),
            created_at: Utc::now(),
        }
    }

    pub fn with_schedule(mut self, schedule: WeeklySchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_main_image(mut self, image: impl Into<String>) -> Self {
        self.main_image = Some(image.into());
        self
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schedule::DayWindow;
    use chrono::Weekday;

    #[test]
    fn new_facility_starts_closed() {
        let facility = Facility::new(1, "Arena One", "1 Main St");
        assert_eq!(facility.schedule, WeeklySchedule::closed());
        assert!(facility.main_image.is_none());
    }

    #[test]
    fn with_schedule_replaces_hours() {
        let mut schedule = WeeklySchedule::closed();
        schedule.set(Weekday::Mon, DayWindow::new(8, 22).unwrap());

        let facility = Facility::new(1, "Arena One", "1 Main St").with_schedule(schedule.clone());
        assert_eq!(facility.schedule, schedule);
        assert!(facility.schedule.is_open_on(Weekday::Mon));
    }
}
