//! Admin handlers
//!
//! The administrative cascade mirrors the public one but ignores
//! registration windows: closed events stay reviewable.

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Local;

use super::dto::{
    CreateEventRequest, CreateEventResponse, EventSummary, EventsOnDateQuery,
    RegistrationListResponse, RegistrationRow, RegistrationsQuery,
};
use crate::application::services::{CsvExporter, EventDraft};
use crate::domain::EventCategory;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::availability::dto::{DateOption, EventOption};
use crate::interfaces::http::modules::{parse_date_param, AppState};

#[utoipa::path(
    get,
    path = "/api/v1/admin/event-dates",
    tag = "Admin",
    responses(
        (status = 200, description = "Distinct event dates, newest first", body = ApiResponse<Vec<DateOption>>)
    )
)]
pub async fn list_event_dates(State(state): State<AppState>) -> Json<ApiResponse<Vec<DateOption>>> {
    let dates = state.catalog.list_distinct_event_dates().await;
    Json(ApiResponse::success(
        dates.into_iter().map(Into::into).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/events",
    tag = "Admin",
    params(EventsOnDateQuery),
    responses(
        (status = 200, description = "Events held on the date, name ascending", body = ApiResponse<Vec<EventOption>>)
    )
)]
pub async fn list_events_on_date(
    State(state): State<AppState>,
    Query(query): Query<EventsOnDateQuery>,
) -> Json<ApiResponse<Vec<EventOption>>> {
    let Some(date) = parse_date_param(query.date.as_deref()) else {
        return Json(ApiResponse::success(Vec::new()));
    };
    let refs = state.catalog.list_events_on_date(date).await;
    Json(ApiResponse::success(
        refs.into_iter().map(Into::into).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/events/all",
    tag = "Admin",
    responses(
        (status = 200, description = "All events, event date ascending", body = ApiResponse<Vec<EventSummary>>)
    )
)]
pub async fn list_all_events(State(state): State<AppState>) -> Json<ApiResponse<Vec<EventSummary>>> {
    let events = state.catalog.list_all().await;
    Json(ApiResponse::success(
        events.into_iter().map(Into::into).collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/events",
    tag = "Admin",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = ApiResponse<CreateEventResponse>),
        (status = 422, description = "Name or date-ordering validation failed")
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateEventRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreateEventResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    let draft = EventDraft {
        name: req.event_name,
        category: EventCategory::parse(&req.category),
        event_date: req.event_date,
        registration_start: req.registration_start_date,
        registration_end: req.registration_end_date,
    };
    match state.event_writer.create_event(draft).await {
        Ok(id) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(CreateEventResponse { id })),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/registrations",
    tag = "Admin",
    params(RegistrationsQuery),
    responses(
        (status = 200, description = "Registrations, newest first", body = ApiResponse<RegistrationListResponse>)
    )
)]
pub async fn list_registrations(
    State(state): State<AppState>,
    Query(query): Query<RegistrationsQuery>,
) -> Json<ApiResponse<RegistrationListResponse>> {
    let records = state.admin_queries.all_registrations(query.event_id).await;
    let rows: Vec<RegistrationRow> = records.into_iter().map(Into::into).collect();
    Json(ApiResponse::success(RegistrationListResponse {
        count: rows.len() as u64,
        rows,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/registrations/export",
    tag = "Admin",
    params(RegistrationsQuery),
    responses(
        (status = 200, description = "CSV export of registrations", body = String, content_type = "text/csv")
    )
)]
pub async fn export_registrations(
    State(state): State<AppState>,
    Query(query): Query<RegistrationsQuery>,
) -> Response {
    let records = state.admin_queries.all_registrations(query.event_id).await;
    let filename = CsvExporter::filename(Local::now().naive_local());
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        Body::from_stream(CsvExporter::export(records)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::Request;
    use axum::routing::{get, post};
    use axum::Router;
    use chrono::{NaiveDate, NaiveDateTime};
    use tower::Service;

    use super::*;
    use crate::domain::event::EventRepository;
    use crate::domain::registration::RegistrationRepository;
    use crate::domain::repositories::RepositoryProvider;
    use crate::domain::{NewEvent, NewRegistration};
    use crate::infrastructure::storage::InMemoryRepositoryProvider;
    use crate::notifications::{create_event_bus, BusNotificationDispatcher, NotificationSettings};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ts(d: u32, h: u32) -> NaiveDateTime {
        date(2024, 6, d).and_hms_opt(h, 0, 0).unwrap()
    }

    fn app(store: Arc<InMemoryRepositoryProvider>) -> Router {
        let dispatcher = Arc::new(BusNotificationDispatcher::new(
            create_event_bus(),
            NotificationSettings::default(),
        ));
        let state = AppState::new(store, dispatcher);
        Router::new()
            .route("/api/v1/admin/event-dates", get(list_event_dates))
            .route(
                "/api/v1/admin/events",
                get(list_events_on_date).post(create_event),
            )
            .route("/api/v1/admin/events/all", get(list_all_events))
            .route("/api/v1/admin/registrations", get(list_registrations))
            .route(
                "/api/v1/admin/registrations/export",
                get(export_registrations),
            )
            .with_state(state)
    }

    fn sample_event(name: &str, event_date: NaiveDate) -> NewEvent {
        NewEvent {
            name: name.to_string(),
            category: EventCategory::Hackathon,
            event_date,
            registration_start: date(2024, 6, 1),
            registration_end: date(2024, 7, 5),
            created_at: ts(1, 8),
        }
    }

    fn sample_registration(email: &str, event_id: i32) -> NewRegistration {
        NewRegistration {
            full_name: "Jane Doe".into(),
            email: email.to_string(),
            college_name: "Staff College".into(),
            department: "Physics".into(),
            category: EventCategory::Hackathon,
            event_id,
            created_at: ts(15, 9),
        }
    }

    async fn send(router: &Router, req: Request<Body>) -> axum::http::Response<Body> {
        let mut svc = router.clone().into_service();
        svc.call(req).await.unwrap()
    }

    async fn get_json(router: &Router, uri: &str) -> serde_json::Value {
        let response = send(
            router,
            Request::builder().uri(uri).body(Body::empty()).unwrap(),
        )
        .await;
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn event_dates_are_newest_first_even_when_closed() {
        let store = Arc::new(InMemoryRepositoryProvider::new());
        store
            .events()
            .save(sample_event("A", date(2024, 7, 10)))
            .await
            .unwrap();
        store
            .events()
            .save(sample_event("B", date(2024, 7, 20)))
            .await
            .unwrap();
        let router = app(store);

        let body = get_json(&router, "/api/v1/admin/event-dates").await;
        assert_eq!(body["data"][0]["date"], "2024-07-20");
        assert_eq!(body["data"][1]["date"], "2024-07-10");
    }

    #[tokio::test]
    async fn registrations_listing_has_count_and_display_rows() {
        let store = Arc::new(InMemoryRepositoryProvider::new());
        let ev = store
            .events()
            .save(sample_event("Hack Day", date(2024, 7, 10)))
            .await
            .unwrap();
        store
            .registrations()
            .save(sample_registration("a@x.com", ev))
            .await
            .unwrap();
        let router = app(store);

        let body = get_json(
            &router,
            &format!("/api/v1/admin/registrations?event_id={ev}"),
        )
        .await;
        assert_eq!(body["data"]["count"], 1);
        let row = &body["data"]["rows"][0];
        assert_eq!(row["email"], "a@x.com");
        assert_eq!(row["category"], "Hackathon");
        assert_eq!(row["submitted_at"], "June 15, 2024 9:00 AM");
    }

    #[tokio::test]
    async fn export_streams_csv_with_bom_and_filename() {
        let store = Arc::new(InMemoryRepositoryProvider::new());
        let ev = store
            .events()
            .save(sample_event("Hack Day", date(2024, 7, 10)))
            .await
            .unwrap();
        store
            .registrations()
            .save(sample_registration("a@x.com", ev))
            .await
            .unwrap();
        let router = app(store);

        let response = send(
            &router,
            Request::builder()
                .uri("/api/v1/admin/registrations/export")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"event_registrations_"));
        assert!(disposition.ends_with(".csv\""));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
        let text = std::str::from_utf8(&bytes[3..]).unwrap();
        assert!(text.starts_with("ID,Full Name,Email"));
        assert!(text.contains("a@x.com"));
    }

    #[tokio::test]
    async fn create_event_round_trips_through_the_catalog() {
        let store = Arc::new(InMemoryRepositoryProvider::new());
        let router = app(store.clone());

        let body = serde_json::json!({
            "event_name": "Rust Hack Day",
            "category": "hackathon",
            "event_date": "2024-07-10",
            "registration_start_date": "2024-06-01",
            "registration_end_date": "2024-07-05",
        });
        let response = send(
            &router,
            Request::builder()
                .method("POST")
                .uri("/api/v1/admin/events")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let listing = get_json(&router, "/api/v1/admin/events/all").await;
        assert_eq!(listing["data"][0]["event_name"], "Rust Hack Day");
        assert_eq!(listing["data"][0]["category_label"], "Hackathon");
    }

    #[tokio::test]
    async fn create_event_with_bad_date_order_returns_422() {
        let router = app(Arc::new(InMemoryRepositoryProvider::new()));
        let body = serde_json::json!({
            "event_name": "Rust Hack Day",
            "category": "hackathon",
            "event_date": "2024-07-10",
            "registration_start_date": "2024-07-06",
            "registration_end_date": "2024-07-05",
        });
        let response = send(
            &router,
            Request::builder()
                .method("POST")
                .uri("/api/v1/admin/events")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
