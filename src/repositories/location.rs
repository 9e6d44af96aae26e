//! # Location Repository
//!
//! This module contains the repository implementation for Location entities.
//! Locations are always scoped to an organisation; listing can additionally be
//! narrowed by a [`BoundingBox`].

use crate::bounding_box::BoundingBox;
use crate::error::RepositoryError;
use crate::models::location::{
    ActiveModel as LocationActiveModel, Column, Entity as Location, Model as LocationModel,
};
use crate::repositories::OrganisationRepository;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// Request data for creating a new location
#[derive(Debug, Clone)]
pub struct CreateLocationRequest {
    /// Organisation that owns the location
    pub organisation_id: i32,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Repository for Location database operations
pub struct LocationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationRepository<'a> {
    /// Create a new LocationRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a location for an existing organisation.
    ///
    /// The organisation lookup and the insert share one transaction, so a
    /// missing parent is always reported as `NotFound("organisation")` and
    /// never as a constraint violation. Coordinates are stored unchecked.
    pub async fn create_location(
        &self,
        request: CreateLocationRequest,
    ) -> Result<LocationModel, RepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(RepositoryError::database_error)?;

        // Dropping `txn` on the error path rolls it back
        OrganisationRepository::new(&txn)
            .get_organisation(request.organisation_id)
            .await?;

        let location = LocationActiveModel {
            organisation_id: Set(request.organisation_id),
            location_name: Set(request.location_name),
            latitude: Set(request.latitude),
            longitude: Set(request.longitude),
            ..Default::default()
        };

        let result = location
            .insert(&txn)
            .await
            .map_err(RepositoryError::database_error)?;

        txn.commit()
            .await
            .map_err(RepositoryError::database_error)?;

        tracing::info!(
            location_id = result.id,
            organisation_id = result.organisation_id,
            "Location created"
        );
        Ok(result)
    }

    /// List the locations of an organisation, optionally inside a bounding box.
    ///
    /// The bounding box is applied in addition to the organisation filter,
    /// never instead of it. Bounds are inclusive on both axes.
    pub async fn list_locations(
        &self,
        organisation_id: i32,
        bounding_box: Option<BoundingBox>,
    ) -> Result<Vec<LocationModel>, RepositoryError> {
        let mut condition = Condition::all().add(Column::OrganisationId.eq(organisation_id));

        if let Some(bbox) = bounding_box {
            condition = condition
                .add(Column::Latitude.between(bbox.min_lat, bbox.max_lat))
                .add(Column::Longitude.between(bbox.min_lon, bbox.max_lon));
        }

        let locations = Location::find()
            .filter(condition)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        tracing::debug!(
            organisation_id,
            filtered = bounding_box.is_some(),
            count = locations.len(),
            "Listed locations"
        );
        Ok(locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::CreateOrganisationRequest;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn create_organisation(db: &DatabaseConnection, name: &str) -> i32 {
        OrganisationRepository::new(db)
            .create_organisation(CreateOrganisationRequest {
                name: name.to_string(),
            })
            .await
            .unwrap()
            .id
    }

    fn location(organisation_id: i32, name: &str, latitude: f64, longitude: f64) -> CreateLocationRequest {
        CreateLocationRequest {
            organisation_id,
            location_name: name.to_string(),
            latitude,
            longitude,
        }
    }

    #[tokio::test]
    async fn test_create_location_success() {
        let db = setup_test_db().await;
        let organisation_id = create_organisation(&db, "Acme").await;
        let repo = LocationRepository::new(&db);

        let created = repo
            .create_location(location(organisation_id, "Vienna", 40.5, -13.5))
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.organisation_id, organisation_id);
        assert_eq!(created.location_name, "Vienna");
        assert_eq!(created.latitude, 40.5);
        assert_eq!(created.longitude, -13.5);
    }

    #[tokio::test]
    async fn test_create_location_for_missing_organisation() {
        let db = setup_test_db().await;
        let repo = LocationRepository::new(&db);

        let result = repo
            .create_location(location(42, "Nowhere", 0.0, 0.0))
            .await;

        assert!(matches!(result, Err(RepositoryError::NotFound(entity)) if entity == "organisation"));
        assert!(Location::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_coordinates_are_not_range_checked_on_create() {
        let db = setup_test_db().await;
        let organisation_id = create_organisation(&db, "Acme").await;
        let repo = LocationRepository::new(&db);

        let created = repo
            .create_location(location(organisation_id, "Off the map", 123.0, 270.0))
            .await
            .unwrap();

        assert_eq!(created.latitude, 123.0);
        assert_eq!(created.longitude, 270.0);
    }

    #[tokio::test]
    async fn test_list_locations_without_bounding_box() {
        let db = setup_test_db().await;
        let organisation_id = create_organisation(&db, "Acme").await;
        let repo = LocationRepository::new(&db);

        let created = repo
            .create_location(location(organisation_id, "Vienna", 40.5, -13.5))
            .await
            .unwrap();

        let locations = repo.list_locations(organisation_id, None).await.unwrap();
        assert_eq!(locations, vec![created]);
    }

    #[tokio::test]
    async fn test_list_locations_with_bounding_box() {
        let db = setup_test_db().await;
        let organisation_id = create_organisation(&db, "Acme").await;
        let repo = LocationRepository::new(&db);

        repo.create_location(location(organisation_id, "Vienna", 40.5, -13.5))
            .await
            .unwrap();

        let inside = BoundingBox::new(-14.0, -20.0, 50.0, 41.0).unwrap();
        let locations = repo
            .list_locations(organisation_id, Some(inside))
            .await
            .unwrap();
        assert_eq!(locations.len(), 1);
        assert!(inside.contains(locations[0].latitude, locations[0].longitude));

        let disjoint = BoundingBox::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let locations = repo
            .list_locations(organisation_id, Some(disjoint))
            .await
            .unwrap();
        assert!(locations.is_empty());
    }

    #[tokio::test]
    async fn test_bounding_box_edges_are_inclusive() {
        let db = setup_test_db().await;
        let organisation_id = create_organisation(&db, "Acme").await;
        let repo = LocationRepository::new(&db);

        for (name, lat, lon) in [
            ("south-west", 10.0, 20.0),
            ("north-east", 11.0, 21.0),
            ("outside", 11.5, 20.5),
        ] {
            repo.create_location(location(organisation_id, name, lat, lon))
                .await
                .unwrap();
        }

        let bbox = BoundingBox::new(10.0, 20.0, 11.0, 21.0).unwrap();
        let names: Vec<String> = repo
            .list_locations(organisation_id, Some(bbox))
            .await
            .unwrap()
            .into_iter()
            .map(|location| location.location_name)
            .collect();

        assert_eq!(names, vec!["south-west", "north-east"]);
    }

    #[tokio::test]
    async fn test_bounding_box_keeps_organisation_filter() {
        let db = setup_test_db().await;
        let first = create_organisation(&db, "First").await;
        let second = create_organisation(&db, "Second").await;
        let repo = LocationRepository::new(&db);

        repo.create_location(location(first, "Ours", 40.5, -13.5))
            .await
            .unwrap();
        repo.create_location(location(second, "Theirs", 40.6, -13.4))
            .await
            .unwrap();

        let bbox = BoundingBox::new(-14.0, -20.0, 50.0, 41.0).unwrap();
        let locations = repo.list_locations(first, Some(bbox)).await.unwrap();

        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].location_name, "Ours");
        assert_eq!(repo.list_locations(second, None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_locations_for_unknown_organisation_is_empty() {
        let db = setup_test_db().await;
        let repo = LocationRepository::new(&db);

        assert!(repo.list_locations(7, None).await.unwrap().is_empty());
    }
}
