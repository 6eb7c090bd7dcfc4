//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::metrics::{
    http_metrics_middleware, prometheus_metrics, MetricsState,
};
use crate::interfaces::http::modules::{admin, availability, health, registrations, AppState};
use crate::notifications::NotificationDispatcher;
use crate::shared::errors::FieldViolation;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Availability cascade
        availability::list_categories,
        availability::list_dates,
        availability::list_events,
        // Registrations
        registrations::register,
        // Admin
        admin::list_event_dates,
        admin::list_events_on_date,
        admin::list_all_events,
        admin::create_event,
        admin::list_registrations,
        admin::export_registrations,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            FieldViolation,
            // Availability
            availability::CategoryOption,
            availability::DateOption,
            availability::EventOption,
            // Registrations
            registrations::RegisterRequest,
            registrations::RegisterResponse,
            // Admin
            admin::RegistrationRow,
            admin::RegistrationListResponse,
            admin::EventSummary,
            admin::CreateEventRequest,
            admin::CreateEventResponse,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Availability", description = "Public category, date, and event selection for open registration windows"),
        (name = "Registrations", description = "Registration submission"),
        (name = "Admin", description = "Administrative review, CSV export, and event creation"),
    ),
    info(
        title = "Event Registration Service API",
        version = "1.0.0",
        description = "REST API for time-windowed event registration",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    dispatcher: Arc<dyn NotificationDispatcher>,
    db: DatabaseConnection,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let state = AppState::new(repos, dispatcher);

    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    let metrics_state = MetricsState {
        handle: prometheus_handle,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public availability cascade
    let availability_routes = Router::new()
        .route("/categories", get(availability::list_categories))
        .route("/dates", get(availability::list_dates))
        .route("/events", get(availability::list_events))
        .with_state(state.clone());

    // Registration submission
    let registration_routes = Router::new()
        .route("/", post(registrations::register))
        .with_state(state.clone());

    // Administrative review and event management
    let admin_routes = Router::new()
        .route("/event-dates", get(admin::list_event_dates))
        .route(
            "/events",
            get(admin::list_events_on_date).post(admin::create_event),
        )
        .route("/events/all", get(admin::list_all_events))
        .route("/registrations", get(admin::list_registrations))
        .route(
            "/registrations/export",
            get(admin::export_registrations),
        )
        .with_state(state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route(
            "/api/v1/health",
            get(health::health_check).with_state(health_state),
        )
        // Metrics
        .route(
            "/api/v1/metrics",
            get(prometheus_metrics).with_state(metrics_state),
        )
        // Availability
        .nest("/api/v1/availability", availability_routes)
        // Registrations
        .nest("/api/v1/registrations", registration_routes)
        // Admin
        .nest("/api/v1/admin", admin_routes)
        // Middleware
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::Service;

    use super::*;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;
    use crate::notifications::{create_event_bus, BusNotificationDispatcher, NotificationSettings};

    async fn app() -> Router {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let dispatcher = Arc::new(BusNotificationDispatcher::new(
            create_event_bus(),
            NotificationSettings::default(),
        ));
        let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
        let handle = PrometheusBuilder::new().build_recorder().handle();
        create_api_router(repos, dispatcher, db, handle)
    }

    async fn send(router: &Router, uri: &str) -> axum::http::Response<Body> {
        let mut svc = router.clone().into_service();
        svc.call(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn health_is_served_under_api_v1() {
        let router = app().await;
        let response = send(&router, "/api/v1/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"]["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn metrics_are_served_under_api_v1() {
        let router = app().await;
        let response = send(&router, "/api/v1/metrics").await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
    }

    #[tokio::test]
    async fn public_cascade_is_reachable_through_the_assembled_router() {
        let router = app().await;
        let response = send(&router, "/api/v1/availability/categories").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
