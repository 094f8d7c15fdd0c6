//! SeaORM implementation of CourtRepository
//!
//! A court's ledger is not stored as a blob: its confirmed set is derived
//! from the `bookings` rows and its blackout set from `blackout_periods`,
//! both read back in start-time order.

use std::str::FromStr;

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::court::{Court, CourtLedger, CourtRepository};
use crate::domain::money::Money;
use crate::domain::time_period::TimePeriod;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{blackout_period, booking, court};

pub struct SeaOrmCourtRepository {
    db: DatabaseConnection,
}

impl SeaOrmCourtRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(super) fn stored_period(
    start: chrono::DateTime<chrono::Utc>,
    end: chrono::DateTime<chrono::Utc>,
) -> DomainResult<TimePeriod> {
    TimePeriod::new(start, end)
        .map_err(|_| DomainError::Storage(format!("Corrupt stored period: {} .. {}", start, end)))
}

pub(super) fn stored_price(raw: &str) -> DomainResult<Money> {
    Money::from_str(raw)
        .map_err(|e| DomainError::Storage(format!("Corrupt stored price {:?}: {}", raw, e)))
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

// ── CourtRepository impl ────────────────────────────────────────

impl SeaOrmCourtRepository {
    /// Rebuild the interval ledger for one court from its booking and
    /// blackout rows.
    async fn load_ledger(&self, court_id: i32) -> DomainResult<CourtLedger> {
        let bookings = booking::Entity::find()
            .filter(booking::Column::CourtId.eq(court_id))
            .order_by_asc(booking::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let blackouts = blackout_period::Entity::find()
            .filter(blackout_period::Column::CourtId.eq(court_id))
            .order_by_asc(blackout_period::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut ledger = CourtLedger::new();
        for row in bookings {
            ledger.insert(stored_period(row.start_time, row.end_time)?);
        }
        for row in blackouts {
            ledger.add_blackout(stored_period(row.start_time, row.end_time)?);
        }
        Ok(ledger)
    }

    async fn assemble(&self, model: court::Model) -> DomainResult<Court> {
        let ledger = self.load_ledger(model.id).await?;
        Ok(Court {
            id: model.id,
            facility_id: model.facility_id,
            name: model.name,
            price_per_hour: stored_price(&model.price_per_hour)?,
            ledger,
            created_at: model.created_at,
        })
    }
}

#[async_trait]
impl CourtRepository for SeaOrmCourtRepository {
    async fn save(&self, c: Court) -> DomainResult<()> {
        debug!("Saving court: {}", c.id);

        let model = court::ActiveModel {
            id: Set(c.id),
            facility_id: Set(c.facility_id),
            name: Set(c.name.clone()),
            price_per_hour: Set(c.price_per_hour.to_string()),
            created_at: Set(c.created_at),
        };

        let exists = court::Entity::find_by_id(c.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_some();
        if exists {
            model.update(&self.db).await.map_err(db_err)?;
        } else {
            model.insert(&self.db).await.map_err(db_err)?;
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Court>> {
        let Some(model) = court::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };
        Ok(Some(self.assemble(model).await?))
    }

    async fn list_for_facility(&self, facility_id: i32) -> DomainResult<Vec<Court>> {
        let models = court::Entity::find()
            .filter(court::Column::FacilityId.eq(facility_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut courts = Vec::with_capacity(models.len());
        for model in models {
            courts.push(self.assemble(model).await?);
        }
        Ok(courts)
    }

    async fn add_blackout(&self, court_id: i32, period: TimePeriod) -> DomainResult<()> {
        debug!("Recording blackout on court {}: {}", court_id, period);

        blackout_period::ActiveModel {
            id: NotSet,
            court_id: Set(court_id),
            start_time: Set(period.start()),
            end_time: Set(period.end()),
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;
        Ok(())
    }
}
