//! SeaORM implementation of FacilityRepository

use async_trait::async_trait;
use chrono::Weekday;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};

use crate::domain::facility::{Facility, FacilityRepository};
use crate::domain::schedule::{DayWindow, WeeklySchedule};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{facility, facility_hours};

pub struct SeaOrmFacilityRepository {
    db: DatabaseConnection,
}

impl SeaOrmFacilityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

fn weekday_to_index(weekday: Weekday) -> i16 {
    weekday.num_days_from_sunday() as i16
}

fn weekday_from_index(index: i16) -> Option<Weekday> {
    ALL_WEEKDAYS.get(usize::try_from(index).ok()?).copied()
}

fn schedule_from_rows(rows: Vec<facility_hours::Model>) -> WeeklySchedule {
    let mut schedule = WeeklySchedule::closed();
    for row in rows {
        let Some(weekday) = weekday_from_index(row.weekday) else {
            continue;
        };
        let Ok(window) = DayWindow::new(row.open_hour as u8, row.close_hour as u8) else {
            continue;
        };
        schedule.set(weekday, window);
    }
    schedule
}

fn hours_rows(facility: &Facility) -> Vec<facility_hours::ActiveModel> {
    ALL_WEEKDAYS
        .iter()
        .filter_map(|&weekday| {
            facility.schedule.window_for(weekday).map(|window| {
                facility_hours::ActiveModel {
                    id: NotSet,
                    facility_id: Set(facility.id),
                    weekday: Set(weekday_to_index(weekday)),
                    open_hour: Set(i16::from(window.open_hour())),
                    close_hour: Set(i16::from(window.close_hour())),
                }
            })
        })
        .collect()
}

fn model_to_domain(m: facility::Model, schedule: WeeklySchedule) -> Facility {
    Facility {
        id: m.id,
        name: m.name,
        address: m.address,
        main_image: m.main_image,
        schedule,
        created_at: m.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

// ── FacilityRepository impl ─────────────────────────────────────

impl SeaOrmFacilityRepository {
    async fn load_schedule(&self, facility_id: i32) -> DomainResult<WeeklySchedule> {
        let rows = facility_hours::Entity::find()
            .filter(facility_hours::Column::FacilityId.eq(facility_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(schedule_from_rows(rows))
    }
}

#[async_trait]
impl FacilityRepository for SeaOrmFacilityRepository {
    async fn save(&self, f: Facility) -> DomainResult<()> {
        debug!("Saving facility: {}", f.id);

        let model = facility::ActiveModel {
            id: Set(f.id),
            name: Set(f.name.clone()),
            address: Set(f.address.clone()),
            main_image: Set(f.main_image.clone()),
            created_at: Set(f.created_at),
        };

        let exists = facility::Entity::find_by_id(f.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_some();
        if exists {
            model.update(&self.db).await.map_err(db_err)?;
        } else {
            model.insert(&self.db).await.map_err(db_err)?;
        }

        // Replace the hours rows so the stored schedule mirrors the entity.
        facility_hours::Entity::delete_many()
            .filter(facility_hours::Column::FacilityId.eq(f.id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        let rows = hours_rows(&f);
        if !rows.is_empty() {
            facility_hours::Entity::insert_many(rows)
                .exec(&self.db)
                .await
                .map_err(db_err)?;
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Facility>> {
        let Some(model) = facility::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };
        let schedule = self.load_schedule(id).await?;
        Ok(Some(model_to_domain(model, schedule)))
    }

    async fn list(&self) -> DomainResult<Vec<Facility>> {
        let models = facility::Entity::find()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut facilities = Vec::with_capacity(models.len());
        for model in models {
            let schedule = self.load_schedule(model.id).await?;
            facilities.push(model_to_domain(model, schedule));
        }
        Ok(facilities)
    }
}
