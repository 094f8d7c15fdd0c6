//! Database entities module

pub mod blackout_period;
pub mod booking;
pub mod court;
pub mod facility;
pub mod facility_hours;

pub use blackout_period::Entity as BlackoutPeriod;
pub use booking::Entity as BookingEntity;
pub use court::Entity as CourtEntity;
pub use facility::Entity as FacilityEntity;
pub use facility_hours::Entity as FacilityHours;
