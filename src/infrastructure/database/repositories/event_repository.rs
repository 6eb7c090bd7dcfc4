//! SeaORM implementation of EventRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::domain::event::{Event, EventCategory, EventRef, EventRepository, NewEvent};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::event;

use super::db_err;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(e: event::Model) -> Event {
    Event {
        id: e.id,
        name: e.event_name,
        category: EventCategory::parse(&e.category),
        event_date: e.event_date,
        registration_start: e.registration_start_date,
        registration_end: e.registration_end_date,
        created_at: e.created,
    }
}

fn entity_to_ref(e: event::Model) -> EventRef {
    EventRef {
        id: e.id,
        name: e.event_name,
    }
}

/// Base query for events whose registration window contains `today`.
fn open_filter(today: NaiveDate) -> sea_orm::Select<event::Entity> {
    event::Entity::find()
        .filter(event::Column::RegistrationStartDate.lte(today))
        .filter(event::Column::RegistrationEndDate.gte(today))
}

// ── SeaOrmEventRepository ───────────────────────────────────────

pub struct SeaOrmEventRepository {
    db: DatabaseConnection,
}

impl SeaOrmEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for SeaOrmEventRepository {
    async fn save(&self, new: NewEvent) -> DomainResult<i32> {
        let model = event::ActiveModel {
            id: NotSet,
            event_name: Set(new.name),
            category: Set(new.category.as_str().to_string()),
            event_date: Set(new.event_date),
            registration_start_date: Set(new.registration_start),
            registration_end_date: Set(new.registration_end),
            created: Set(new.created_at),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Event saved: {} ({})", result.event_name, result.id);
        Ok(result.id)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Event>> {
        let model = event::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Event>> {
        let models = event::Entity::find()
            .order_by_asc(event::Column::EventDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_open(&self, today: NaiveDate) -> DomainResult<Vec<Event>> {
        let models = open_filter(today)
            .order_by_asc(event::Column::EventDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_open_dates(
        &self,
        category: &EventCategory,
        today: NaiveDate,
    ) -> DomainResult<Vec<NaiveDate>> {
        let dates = open_filter(today)
            .filter(event::Column::Category.eq(category.as_str()))
            .select_only()
            .column(event::Column::EventDate)
            .distinct()
            .order_by_asc(event::Column::EventDate)
            .into_tuple::<NaiveDate>()
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(dates)
    }

    async fn find_open_on_date(
        &self,
        category: &EventCategory,
        date: NaiveDate,
        today: NaiveDate,
    ) -> DomainResult<Vec<EventRef>> {
        let models = open_filter(today)
            .filter(event::Column::Category.eq(category.as_str()))
            .filter(event::Column::EventDate.eq(date))
            .order_by_asc(event::Column::EventName)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_ref).collect())
    }

    async fn distinct_event_dates(&self) -> DomainResult<Vec<NaiveDate>> {
        let dates = event::Entity::find()
            .select_only()
            .column(event::Column::EventDate)
            .distinct()
            .order_by_desc(event::Column::EventDate)
            .into_tuple::<NaiveDate>()
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(dates)
    }

    async fn find_refs_on_date(&self, date: NaiveDate) -> DomainResult<Vec<EventRef>> {
        let models = event::Entity::find()
            .filter(event::Column::EventDate.eq(date))
            .order_by_asc(event::Column::EventName)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_ref).collect())
    }
}
