//! Facility operating-hours entity
//!
//! One row per open weekday; a weekday without a row is closed.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "facility_hours")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub facility_id: i32,

    /// Weekday index, 0 = Sunday … 6 = Saturday
    pub weekday: i16,

    pub open_hour: i16,
    pub close_hour: i16,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::facility::Entity",
        from = "Column::FacilityId",
        to = "super::facility::Column::Id"
    )]
    Facility,
}

impl Related<super::facility::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Facility.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
