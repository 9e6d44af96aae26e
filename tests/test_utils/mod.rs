//! Test utilities for database testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations and seeding organisations and locations.

use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use organisations::models::{location, organisation};
use organisations::repositories::{
    CreateLocationRequest, CreateOrganisationRequest, LocationRepository, OrganisationRepository,
};
use sea_orm::{Database, DatabaseConnection};

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Creates an organisation with the given name.
#[allow(dead_code)]
pub async fn create_test_organisation(
    db: &DatabaseConnection,
    name: &str,
) -> Result<organisation::Model> {
    let organisation = OrganisationRepository::new(db)
        .create_organisation(CreateOrganisationRequest {
            name: name.to_string(),
        })
        .await?;
    Ok(organisation)
}

/// Creates a location for an existing organisation.
#[allow(dead_code)]
pub async fn create_test_location(
    db: &DatabaseConnection,
    organisation_id: i32,
    name: &str,
    latitude: f64,
    longitude: f64,
) -> Result<location::Model> {
    let location = LocationRepository::new(db)
        .create_location(CreateLocationRequest {
            organisation_id,
            location_name: name.to_string(),
            latitude,
            longitude,
        })
        .await?;
    Ok(location)
}
