//! Registration submission handler

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;

use super::dto::{RegisterRequest, RegisterResponse};
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/registrations",
    tag = "Registrations",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration accepted", body = ApiResponse<RegisterResponse>),
        (status = 400, description = "Event unknown or not open for registration"),
        (status = 409, description = "Duplicate registration for this email and event date"),
        (status = 422, description = "Field validation failed")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RegisterResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    let today = Local::now().date_naive();
    match state.registration_writer.register(req.into(), today).await {
        Ok(id) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(RegisterResponse { id })),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}
