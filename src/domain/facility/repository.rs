//! Facility repository interface

use async_trait::async_trait;

use super::model::Facility;
use crate::domain::DomainResult;

#[async_trait]
pub trait FacilityRepository: Send + Sync {
    /// Save a new facility or replace an existing one (schedule included)
    async fn save(&self, facility: Facility) -> DomainResult<()>;

    /// Find facility by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Facility>>;

    /// List all facilities
    async fn list(&self) -> DomainResult<Vec<Facility>>;
}
