//! Facility entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "facilities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    pub name: String,
    pub address: String,

    #[sea_orm(nullable)]
    pub main_image: Option<String>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::court::Entity")]
    Courts,
    #[sea_orm(has_many = "super::facility_hours::Entity")]
    Hours,
}

impl Related<super::court::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courts.def()
    }
}

impl Related<super::facility_hours::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hours.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
