//! Court repository interface

use async_trait::async_trait;

use super::model::Court;
use crate::domain::time_period::TimePeriod;
use crate::domain::DomainResult;

#[async_trait]
pub trait CourtRepository: Send + Sync {
    /// Save a new court or update its name and rate.
    ///
    /// Ledger contents are not written through here: confirmed periods are
    /// committed via `RepositoryProvider::commit_reservation`, blackouts via
    /// [`CourtRepository::add_blackout`].
    async fn save(&self, court: Court) -> DomainResult<()>;

    /// Find court by ID, with its ledger fully assembled
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Court>>;

    /// List all courts of a facility
    async fn list_for_facility(&self, facility_id: i32) -> DomainResult<Vec<Court>>;

    /// Persist a maintenance blackout for a court.
    ///
    /// Precondition: the caller verified the period is conflict-free inside
    /// the court's commit section.
    async fn add_blackout(&self, court_id: i32, period: TimePeriod) -> DomainResult<()>;
}
