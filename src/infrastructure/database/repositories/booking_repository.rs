//! SeaORM implementation of BookingRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tokio::sync::Mutex;

use crate::domain::booking::{Booking, BookingRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::booking;

use super::court_repository::{stored_period, stored_price};

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
    // Id allocation state: None until seeded from MAX(id).
    next_id: Mutex<Option<i32>>,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            next_id: Mutex::new(None),
        }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: booking::Model) -> DomainResult<Booking> {
    Ok(Booking {
        id: m.id,
        court_id: m.court_id,
        user_id: m.user_id,
        period: stored_period(m.start_time, m.end_time)?,
        price: stored_price(&m.price)?,
        facility_name: m.facility_name,
        address: m.address,
        main_image: m.main_image,
        created_at: m.created_at,
    })
}

pub(super) fn booking_to_active_model(b: &Booking) -> booking::ActiveModel {
    booking::ActiveModel {
        id: Set(b.id),
        court_id: Set(b.court_id),
        user_id: Set(b.user_id.clone()),
        start_time: Set(b.period.start()),
        end_time: Set(b.period.end()),
        price: Set(b.price.to_string()),
        facility_name: Set(b.facility_name.clone()),
        address: Set(b.address.clone()),
        main_image: Set(b.main_image.clone()),
        created_at: Set(b.created_at),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>> {
        booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn list_for_court(&self, court_id: i32) -> DomainResult<Vec<Booking>> {
        booking::Entity::find()
            .filter(booking::Column::CourtId.eq(court_id))
            .order_by_asc(booking::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(model_to_domain)
            .collect()
    }

    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<Booking>> {
        booking::Entity::find()
            .filter(booking::Column::UserId.eq(user_id))
            .order_by_desc(booking::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(model_to_domain)
            .collect()
    }

    async fn next_id(&self) -> DomainResult<i32> {
        // Ids are global across courts, so allocation cannot lean on the
        // per-court commit section. The guard serializes allocation; the
        // counter is seeded from MAX(id) on first use and never re-read,
        // so parallel requests on different courts get distinct ids.
        let mut next = self.next_id.lock().await;
        let id = match *next {
            Some(id) => id,
            None => {
                let max: Option<Option<i32>> = booking::Entity::find()
                    .select_only()
                    .column_as(booking::Column::Id.max(), "max_id")
                    .into_tuple()
                    .one(&self.db)
                    .await
                    .map_err(db_err)?;
                max.flatten().unwrap_or(0) + 1
            }
        };
        *next = Some(id + 1);
        Ok(id)
    }
}
