//! Court aggregate
//!
//! Contains the Court entity, its interval ledger, and repository interface.

pub mod ledger;
pub mod model;
pub mod repository;

pub use ledger::CourtLedger;
pub use model::Court;
pub use repository::CourtRepository;
