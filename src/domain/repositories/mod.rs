//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//!   plus the atomic reservation commit
//! - `DomainResult` — standard result type for domain operations

use async_trait::async_trait;

use super::booking::{Booking, BookingRepository};
use super::court::{Court, CourtRepository};
use super::facility::FacilityRepository;
use crate::support::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let court = repos.courts().find_by_id(7).await?;
///     let mine = repos.bookings().list_for_user("user-42").await?;
/// }
/// ```
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    fn facilities(&self) -> &dyn FacilityRepository;
    fn courts(&self) -> &dyn CourtRepository;
    fn bookings(&self) -> &dyn BookingRepository;

    /// Persist the court's updated ledger together with the new booking.
    ///
    /// All-or-nothing: after this returns, either both the ledger entry and
    /// the booking record exist, or neither does. Callers hold the court's
    /// commit section for the duration of the check-then-commit sequence.
    async fn commit_reservation(&self, court: &Court, booking: Booking) -> DomainResult<Booking>;
}
