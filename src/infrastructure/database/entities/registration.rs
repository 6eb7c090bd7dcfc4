//! Registration entity

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Registration row - one submission for one event
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registrations")]
pub struct Model {
    /// Unique registration ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Registrant's full name
    pub full_name: String,

    /// Registrant's email, stored as submitted (no normalization)
    pub email: String,

    /// College name
    pub college_name: String,

    /// Department
    pub department: String,

    /// Category copied from the event at submission time
    pub category: String,

    /// Owning event
    pub event_id: i32,

    /// When the registration was submitted
    pub created: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_delete = "Cascade"
    )]
    Event,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
