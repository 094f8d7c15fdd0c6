//! Application services

pub mod pricing;
mod reservation;

pub use reservation::{DaySchedule, ReservationError, ReservationService, DEFAULT_LOCK_TIMEOUT};
