//! SeaORM implementation of RegistrationRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, SqlErr,
};

use crate::domain::event::EventCategory;
use crate::domain::registration::{
    NewRegistration, Registration, RegistrationRecord, RegistrationRepository,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{event, registration};

use super::db_err;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(r: registration::Model) -> Registration {
    Registration {
        id: r.id,
        full_name: r.full_name,
        email: r.email,
        college_name: r.college_name,
        department: r.department,
        category: EventCategory::parse(&r.category),
        event_id: r.event_id,
        created_at: r.created,
    }
}

fn joined_to_record(r: registration::Model, e: event::Model) -> RegistrationRecord {
    RegistrationRecord {
        registration: entity_to_domain(r),
        event_name: e.event_name,
        event_date: e.event_date,
    }
}

// ── SeaOrmRegistrationRepository ────────────────────────────────

pub struct SeaOrmRegistrationRepository {
    db: DatabaseConnection,
}

impl SeaOrmRegistrationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegistrationRepository for SeaOrmRegistrationRepository {
    async fn save(&self, new: NewRegistration) -> DomainResult<i32> {
        let model = registration::ActiveModel {
            id: NotSet,
            full_name: Set(new.full_name),
            email: Set(new.email),
            college_name: Set(new.college_name),
            department: Set(new.department),
            category: Set(new.category.as_str().to_string()),
            event_id: Set(new.event_id),
            created: Set(new.created_at),
        };
        // The unique (email, event_id) index is the authoritative duplicate
        // signal for concurrent submissions against the same event.
        let result = model.insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                DomainError::DuplicateRegistration
            } else {
                db_err(e)
            }
        })?;
        info!("Registration saved: {} ({})", result.email, result.id);
        Ok(result.id)
    }

    async fn exists_for_email_on_date(
        &self,
        email: &str,
        event_date: NaiveDate,
    ) -> DomainResult<bool> {
        let count = registration::Entity::find()
            .filter(registration::Column::Email.eq(email))
            .join(JoinType::InnerJoin, registration::Relation::Event.def())
            .filter(event::Column::EventDate.eq(event_date))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn find_records_for_event(
        &self,
        event_id: i32,
    ) -> DomainResult<Vec<RegistrationRecord>> {
        self.find_all_records(Some(event_id)).await
    }

    async fn count_for_event(&self, event_id: i32) -> DomainResult<u64> {
        registration::Entity::find()
            .filter(registration::Column::EventId.eq(event_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn find_all_records(
        &self,
        event_id: Option<i32>,
    ) -> DomainResult<Vec<RegistrationRecord>> {
        let mut query = registration::Entity::find();
        if let Some(id) = event_id {
            query = query.filter(registration::Column::EventId.eq(id));
        }
        let rows = query
            .find_also_related(event::Entity)
            .order_by_desc(registration::Column::Created)
            .order_by_desc(registration::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        // The FK guarantees the event side; rows without it are skipped
        Ok(rows
            .into_iter()
            .filter_map(|(r, e)| e.map(|e| joined_to_record(r, e)))
            .collect())
    }
}
