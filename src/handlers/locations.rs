//! # Locations API Handlers
//!
//! Handlers for adding locations to an organisation and listing them,
//! optionally restricted to a bounding box.

use crate::bounding_box::parse_bounding_box;
use crate::error::{ApiError, not_implemented, validation_error};
use crate::handlers::validate_name;
use crate::models::location::Model as LocationModel;
use crate::repositories::{CreateLocationRequest, LocationRepository};
use crate::server::AppState;
use axum::{
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Request payload for creating a location
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateLocationRequestDto {
    /// Id of the owning organisation
    #[schema(example = 1)]
    pub organisation_id: i32,
    /// Display name for the location (required, max 255 characters)
    #[schema(example = "Head office")]
    pub location_name: String,
    /// Latitude in decimal degrees
    #[schema(example = 48.2)]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[schema(example = 16.37)]
    pub longitude: f64,
}

/// Location as returned after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub organisation_id: i32,
    #[schema(example = "Head office")]
    pub location_name: String,
    #[schema(example = 48.2)]
    pub latitude: f64,
    #[schema(example = 16.37)]
    pub longitude: f64,
}

impl From<LocationModel> for LocationDto {
    fn from(model: LocationModel) -> Self {
        Self {
            id: model.id,
            organisation_id: model.organisation_id,
            location_name: model.location_name,
            latitude: model.latitude,
            longitude: model.longitude,
        }
    }
}

/// Location entry in an organisation's location listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationSummaryDto {
    #[schema(example = "Head office")]
    pub location_name: String,
    #[schema(example = 16.37)]
    pub longitude: f64,
    #[schema(example = 48.2)]
    pub latitude: f64,
}

impl From<LocationModel> for LocationSummaryDto {
    fn from(model: LocationModel) -> Self {
        Self {
            location_name: model.location_name,
            longitude: model.longitude,
            latitude: model.latitude,
        }
    }
}

/// Query parameters for listing locations
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ListLocationsQuery {
    /// Inclusive filter as `min_lat,min_lon,max_lat,max_lon`
    #[param(example = "-14.0,-20.0,50.0,41.0")]
    pub bounding_box: Option<String>,
}

/// Create a location for an existing organisation
#[utoipa::path(
    post,
    path = "/organisations/create/location",
    request_body = CreateLocationRequestDto,
    responses(
        (status = 200, description = "Location created", body = LocationDto),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 404, description = "Organisation not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "locations"
)]
pub async fn create_location(
    State(state): State<AppState>,
    payload: Result<Json<CreateLocationRequestDto>, JsonRejection>,
) -> Result<Json<LocationDto>, ApiError> {
    let Json(request) = payload?;
    let location_name = validate_name("location_name", &request.location_name)?;

    for (field, value) in [
        ("latitude", request.latitude),
        ("longitude", request.longitude),
    ] {
        if !value.is_finite() {
            return Err(validation_error(
                &format!("{} must be a finite number", field),
                serde_json::json!({ "field": field }),
            ));
        }
    }

    let location = LocationRepository::new(&state.db)
        .create_location(CreateLocationRequest {
            organisation_id: request.organisation_id,
            location_name,
            latitude: request.latitude,
            longitude: request.longitude,
        })
        .await
        .map_err(|e| {
            ApiError::from(e).with_details(serde_json::json!({
                "organisation_id": request.organisation_id
            }))
        })?;

    Ok(Json(location.into()))
}

/// List an organisation's locations, optionally inside a bounding box
#[utoipa::path(
    get,
    path = "/organisations/{id}/locations",
    params(
        ("id" = i32, Path, description = "Organisation id"),
        ListLocationsQuery
    ),
    responses(
        (status = 200, description = "Matching locations, ordered by id", body = [LocationSummaryDto]),
        (status = 400, description = "Invalid organisation id or bounding box", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "locations"
)]
pub async fn list_locations(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    query: Result<Query<ListLocationsQuery>, QueryRejection>,
) -> Result<Json<Vec<LocationSummaryDto>>, ApiError> {
    let Path(organisation_id) = id?;
    let Query(query) = query?;

    let bounding_box = parse_bounding_box(query.bounding_box.as_deref().unwrap_or_default())?;

    let locations = LocationRepository::new(&state.db)
        .list_locations(organisation_id, bounding_box)
        .await?;

    Ok(Json(
        locations
            .into_iter()
            .map(LocationSummaryDto::from)
            .collect(),
    ))
}

/// Legacy route that created a location without a request body
#[utoipa::path(
    post,
    path = "/organisations/create/locations",
    responses(
        (status = 501, description = "Not supported; use POST /organisations/create/location", body = ApiError)
    ),
    tag = "locations"
)]
#[deprecated(note = "use POST /organisations/create/location")]
pub async fn create_location_without_body() -> ApiError {
    not_implemented("Creating a location requires a body; use POST /organisations/create/location")
}
