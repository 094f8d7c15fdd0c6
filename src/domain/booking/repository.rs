//! Booking repository interface

use async_trait::async_trait;

use super::model::Booking;
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find booking by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>>;

    /// All bookings on a court, ordered by period start
    async fn list_for_court(&self, court_id: i32) -> DomainResult<Vec<Booking>>;

    /// All bookings of a user, newest first
    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<Booking>>;

    /// Allocate the next booking ID.
    ///
    /// Ids are global across courts, so allocation must hand out distinct
    /// ids to requests running in parallel under different court locks.
    async fn next_id(&self) -> DomainResult<i32>;
}
