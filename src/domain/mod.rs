//! Core business entities, value types and repository traits

pub mod booking;
pub mod court;
pub mod facility;
pub mod money;
pub mod rejection;
pub mod repositories;
pub mod schedule;
pub mod time_period;

// Re-export commonly used types
pub use booking::{Booking, BookingRepository};
pub use court::{Court, CourtLedger, CourtRepository};
pub use facility::{Facility, FacilityRepository};
pub use money::Money;
pub use rejection::RejectionReason;
pub use repositories::{DomainResult, RepositoryProvider};
pub use schedule::{DayWindow, WeeklySchedule};
pub use time_period::{InvalidPeriod, TimePeriod};

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;
