//! # Organisations API Handlers
//!
//! This module contains handlers for creating, listing and fetching organisations.

use crate::error::ApiError;
use crate::handlers::validate_name;
use crate::models::organisation::Model as OrganisationModel;
use crate::repositories::{CreateOrganisationRequest, OrganisationRepository};
use crate::server::AppState;
use axum::{
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request payload for creating a new organisation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOrganisationRequestDto {
    /// Display name for the organisation (required, max 255 characters)
    #[schema(example = "organisation_a")]
    pub name: String,
}

/// Organisation as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrganisationDto {
    /// Database-generated identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "organisation_a")]
    pub name: String,
}

impl From<OrganisationModel> for OrganisationDto {
    fn from(model: OrganisationModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// Create a new organisation
#[utoipa::path(
    post,
    path = "/organisations/create",
    request_body = CreateOrganisationRequestDto,
    responses(
        (status = 200, description = "Organisation created", body = OrganisationDto, headers(
            ("X-Trace-Id", description = "Trace identifier for request correlation")
        )),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "organisations"
)]
pub async fn create_organisation(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrganisationRequestDto>, JsonRejection>,
) -> Result<Json<OrganisationDto>, ApiError> {
    let Json(request) = payload?;
    let name = validate_name("name", &request.name)?;

    let organisation = OrganisationRepository::new(&state.db)
        .create_organisation(CreateOrganisationRequest { name })
        .await?;

    Ok(Json(organisation.into()))
}

/// List all organisations
#[utoipa::path(
    get,
    path = "/organisations/",
    responses(
        (status = 200, description = "All organisations, ordered by id", body = [OrganisationDto]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "organisations"
)]
pub async fn list_organisations(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrganisationDto>>, ApiError> {
    let organisations = OrganisationRepository::new(&state.db)
        .list_organisations()
        .await?;

    Ok(Json(
        organisations.into_iter().map(OrganisationDto::from).collect(),
    ))
}

/// Get a single organisation by id
#[utoipa::path(
    get,
    path = "/organisations/{id}",
    params(
        ("id" = i32, Path, description = "Organisation id")
    ),
    responses(
        (status = 200, description = "Organisation found", body = OrganisationDto),
        (status = 400, description = "Invalid organisation id", body = ApiError),
        (status = 404, description = "Organisation not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "organisations"
)]
pub async fn get_organisation(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<OrganisationDto>, ApiError> {
    let Path(organisation_id) = id?;

    let organisation = OrganisationRepository::new(&state.db)
        .get_organisation(organisation_id)
        .await
        .map_err(|e| {
            ApiError::from(e).with_details(serde_json::json!({
                "organisation_id": organisation_id
            }))
        })?;

    Ok(Json(organisation.into()))
}
