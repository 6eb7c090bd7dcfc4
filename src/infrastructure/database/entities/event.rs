//! Event entity

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Event row - a scheduled event and its registration window
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    /// Unique event ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name
    pub event_name: String,

    /// Category in its stored snake_case form (e.g., "hackathon")
    pub category: String,

    /// Date the event takes place (no time component)
    pub event_date: NaiveDate,

    /// First day registrations are accepted
    pub registration_start_date: NaiveDate,

    /// Last day registrations are accepted
    pub registration_end_date: NaiveDate,

    /// When the event was created
    pub created: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::registration::Entity")]
    Registrations,
}

impl Related<super::registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
