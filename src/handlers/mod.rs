//! # API Handlers
//!
//! This module contains all the HTTP endpoint handlers for the Organisations API.

pub mod locations;
pub mod organisations;

use crate::db;
use crate::error::{ApiError, ErrorType, validation_error};
use crate::models::{HealthStatus, ServiceInfo};
use crate::server::AppState;
use axum::{extract::State, response::Json};

/// Maximum accepted length for organisation and location names
pub const MAX_NAME_LENGTH: usize = 255;

/// Root handler that returns basic service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Process is alive", body = HealthStatus)
    ),
    tag = "health"
)]
pub async fn healthz() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

/// Readiness probe; succeeds only while the database answers
#[utoipa::path(
    get,
    path = "/readyz",
    responses(
        (status = 200, description = "Service is ready", body = HealthStatus),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tag = "health"
)]
pub async fn readyz(State(state): State<AppState>) -> Result<Json<HealthStatus>, ApiError> {
    db::health_check(&state.db).await.map_err(|e| {
        tracing::warn!(error = %e, "Readiness check failed");
        ApiError::from(ErrorType::ServiceUnavailable)
    })?;

    Ok(Json(HealthStatus::ok()))
}

/// Trim a required name field, rejecting blank or overlong values.
pub(crate) fn validate_name(field: &str, value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(validation_error(
            &format!("{} is required and cannot be empty", field),
            serde_json::json!({
                "field": field,
                "message": "Value must be provided and cannot be blank"
            }),
        ));
    }

    let length = trimmed.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(validation_error(
            &format!("{} exceeds maximum length", field),
            serde_json::json!({
                "field": field,
                "message": format!("Value cannot exceed {} characters", MAX_NAME_LENGTH),
                "max_length": MAX_NAME_LENGTH,
                "actual_length": length
            }),
        ));
    }

    Ok(trimmed.to_string())
}
