//! Facility aggregate
//!
//! Contains the Facility entity, its weekly schedule, and repository interface.

pub mod model;
pub mod repository;

pub use model::Facility;
pub use repository::FacilityRepository;
