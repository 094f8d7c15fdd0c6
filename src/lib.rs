//! # Courtside Reservation Core
//!
//! Court time-slot reservation engine for a sports-facility booking platform.
//!
//! Given a facility's recurring weekly operating hours, a court's confirmed
//! bookings, and its maintenance blackout windows, the core decides whether a
//! new booking request may be admitted and commits it so that no two confirmed
//! bookings on the same court ever overlap — including under concurrent
//! requests for the same slot.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, value types and repository traits
//! - **application**: Business logic (reservation coordinator, pricing)
//! - **infrastructure**: External concerns (in-memory storage, SeaORM database)
//!
//! Everything outside the reservation core — HTTP routing, authentication,
//! facility CRUD, feeds, chat — lives with the embedding service and reaches
//! the core only through the repository traits in [`domain`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export the in-memory backend used for development and testing
pub use infrastructure::InMemoryRepositoryProvider;

// Re-export the public entry point of the core
pub use application::services::{ReservationError, ReservationService};
