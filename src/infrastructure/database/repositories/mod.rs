//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod booking_repository;
pub mod court_repository;
pub mod facility_repository;
pub mod repository_provider;

pub use booking_repository::SeaOrmBookingRepository;
pub use court_repository::SeaOrmCourtRepository;
pub use facility_repository::SeaOrmFacilityRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
