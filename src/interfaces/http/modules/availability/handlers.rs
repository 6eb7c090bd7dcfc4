//! Availability cascade handlers
//!
//! The reference date is always the server-local wall-clock date; windows
//! are evaluated at query time, so results change day to day with no state
//! transition anywhere.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Local;

use super::dto::{CategoryOption, DateOption, DatesQuery, EventOption, EventsQuery};
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::{parse_category_param, parse_date_param, AppState};

#[utoipa::path(
    get,
    path = "/api/v1/availability/categories",
    tag = "Availability",
    responses(
        (status = 200, description = "Categories with at least one open event", body = ApiResponse<Vec<CategoryOption>>)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> Json<ApiResponse<Vec<CategoryOption>>> {
    let today = Local::now().date_naive();
    let categories = state.availability.available_categories(today).await;
    Json(ApiResponse::success(
        categories.into_iter().map(Into::into).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/availability/dates",
    tag = "Availability",
    params(DatesQuery),
    responses(
        (status = 200, description = "Open event dates in the category, ascending", body = ApiResponse<Vec<DateOption>>)
    )
)]
pub async fn list_dates(
    State(state): State<AppState>,
    Query(query): Query<DatesQuery>,
) -> Json<ApiResponse<Vec<DateOption>>> {
    let Some(category) = parse_category_param(query.category.as_deref()) else {
        return Json(ApiResponse::success(Vec::new()));
    };
    let today = Local::now().date_naive();
    let dates = state.availability.available_dates(&category, today).await;
    Json(ApiResponse::success(
        dates.into_iter().map(Into::into).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/availability/events",
    tag = "Availability",
    params(EventsQuery),
    responses(
        (status = 200, description = "Open events on the date, name ascending", body = ApiResponse<Vec<EventOption>>)
    )
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Json<ApiResponse<Vec<EventOption>>> {
    let (Some(category), Some(date)) = (
        parse_category_param(query.category.as_deref()),
        parse_date_param(query.date.as_deref()),
    ) else {
        return Json(ApiResponse::success(Vec::new()));
    };
    let today = Local::now().date_naive();
    let refs = state
        .availability
        .available_event_names(&category, date, today)
        .await;
    Json(ApiResponse::success(
        refs.into_iter().map(Into::into).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use chrono::{Duration, NaiveDate};
    use tower::Service;

    use super::*;
    use crate::domain::event::EventRepository;
    use crate::domain::repositories::RepositoryProvider;
    use crate::domain::{EventCategory, NewEvent};
    use crate::infrastructure::storage::InMemoryRepositoryProvider;
    use crate::notifications::{create_event_bus, BusNotificationDispatcher, NotificationSettings};

    fn app(store: Arc<InMemoryRepositoryProvider>) -> Router {
        let dispatcher = Arc::new(BusNotificationDispatcher::new(
            create_event_bus(),
            NotificationSettings::default(),
        ));
        let state = AppState::new(store, dispatcher);
        Router::new()
            .route("/api/v1/availability/categories", get(list_categories))
            .route("/api/v1/availability/dates", get(list_dates))
            .route("/api/v1/availability/events", get(list_events))
            .with_state(state)
    }

    fn open_event(name: &str, category: EventCategory, event_date: NaiveDate) -> NewEvent {
        let today = Local::now().date_naive();
        NewEvent {
            name: name.to_string(),
            category,
            event_date,
            registration_start: today - Duration::days(1),
            registration_end: today + Duration::days(1),
            created_at: Local::now().naive_local(),
        }
    }

    async fn get_json(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let mut svc = router.clone().into_service();
        let response = svc
            .call(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn categories_carry_labels() {
        let store = Arc::new(InMemoryRepositoryProvider::new());
        let event_date = Local::now().date_naive() + Duration::days(30);
        store
            .events()
            .save(open_event("Hack Night", EventCategory::Hackathon, event_date))
            .await
            .unwrap();
        let router = app(store);

        let (status, body) = get_json(&router, "/api/v1/availability/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["value"], "hackathon");
        assert_eq!(body["data"][0]["label"], "Hackathon");
    }

    #[tokio::test]
    async fn dates_without_category_are_empty() {
        let router = app(Arc::new(InMemoryRepositoryProvider::new()));
        let (status, body) = get_json(&router, "/api/v1/availability/dates").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 0);

        let (status, body) = get_json(&router, "/api/v1/availability/dates?category=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn dates_carry_machine_and_label_forms() {
        let store = Arc::new(InMemoryRepositoryProvider::new());
        let event_date = Local::now().date_naive() + Duration::days(30);
        store
            .events()
            .save(open_event("Hack Night", EventCategory::Hackathon, event_date))
            .await
            .unwrap();
        let router = app(store);

        let (_, body) = get_json(&router, "/api/v1/availability/dates?category=hackathon").await;
        let expected = event_date.format("%Y-%m-%d").to_string();
        assert_eq!(body["data"][0]["date"], expected.as_str());
        assert!(body["data"][0]["label"].as_str().unwrap().contains(','));
    }

    #[tokio::test]
    async fn events_require_both_category_and_date() {
        let store = Arc::new(InMemoryRepositoryProvider::new());
        let event_date = Local::now().date_naive() + Duration::days(30);
        store
            .events()
            .save(open_event("Hack Night", EventCategory::Hackathon, event_date))
            .await
            .unwrap();
        let router = app(store);

        let (_, body) = get_json(&router, "/api/v1/availability/events?category=hackathon").await;
        assert_eq!(body["data"].as_array().unwrap().len(), 0);

        let uri = format!(
            "/api/v1/availability/events?category=hackathon&date={}",
            event_date.format("%Y-%m-%d")
        );
        let (_, body) = get_json(&router, &uri).await;
        assert_eq!(body["data"][0]["name"], "Hack Night");
    }
}
