//! # Organisation Repository
//!
//! This module contains the repository implementation for Organisation entities,
//! providing create and read operations.

use crate::error::RepositoryError;
use crate::models::organisation::{
    ActiveModel as OrganisationActiveModel, Column, Entity as Organisation,
    Model as OrganisationModel,
};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

/// Request data for creating a new organisation
#[derive(Debug, Clone)]
pub struct CreateOrganisationRequest {
    /// Display name for the organisation
    pub name: String,
}

/// Repository for Organisation database operations
///
/// Generic over the connection so the same lookups can run inside a
/// transaction opened by another repository.
pub struct OrganisationRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrganisationRepository<'a, C> {
    /// Create a new OrganisationRepository with the given database connection
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a new organisation. Names are not unique.
    pub async fn create_organisation(
        &self,
        request: CreateOrganisationRequest,
    ) -> Result<OrganisationModel, RepositoryError> {
        if request.name.trim().is_empty() {
            return Err(RepositoryError::validation_error(
                "Organisation name cannot be empty",
            ));
        }

        let organisation = OrganisationActiveModel {
            name: Set(request.name),
            ..Default::default()
        };

        let result = organisation
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        tracing::info!(organisation_id = result.id, "Organisation created");
        Ok(result)
    }

    /// Find an organisation by ID, returning `None` when absent
    pub async fn find_organisation(
        &self,
        organisation_id: i32,
    ) -> Result<Option<OrganisationModel>, RepositoryError> {
        Organisation::find_by_id(organisation_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Get an organisation by ID
    pub async fn get_organisation(
        &self,
        organisation_id: i32,
    ) -> Result<OrganisationModel, RepositoryError> {
        self.find_organisation(organisation_id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("organisation"))
    }

    /// List all organisations ordered by ID
    pub async fn list_organisations(&self) -> Result<Vec<OrganisationModel>, RepositoryError> {
        let organisations = Organisation::find()
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(organisations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    fn request(name: &str) -> CreateOrganisationRequest {
        CreateOrganisationRequest {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_organisation_success() {
        let db = setup_test_db().await;
        let repo = OrganisationRepository::new(&db);

        let organisation = repo.create_organisation(request("Acme")).await.unwrap();

        assert_eq!(organisation.id, 1);
        assert_eq!(organisation.name, "Acme");
    }

    #[tokio::test]
    async fn test_create_organisation_rejects_blank_name() {
        let db = setup_test_db().await;
        let repo = OrganisationRepository::new(&db);

        let result = repo.create_organisation(request("   ")).await;

        assert!(matches!(result, Err(RepositoryError::Validation(_))));
        assert!(repo.list_organisations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_names_are_permitted() {
        let db = setup_test_db().await;
        let repo = OrganisationRepository::new(&db);

        let first = repo.create_organisation(request("Acme")).await.unwrap();
        let second = repo.create_organisation(request("Acme")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.list_organisations().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_organisations() {
        let db = setup_test_db().await;
        let repo = OrganisationRepository::new(&db);

        assert!(repo.list_organisations().await.unwrap().is_empty());

        for name in ["organisation_a", "organisation_b", "organisation_c"] {
            repo.create_organisation(request(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_organisations()
            .await
            .unwrap()
            .into_iter()
            .map(|organisation| organisation.name)
            .collect();
        assert_eq!(
            names,
            vec!["organisation_a", "organisation_b", "organisation_c"]
        );
    }

    #[tokio::test]
    async fn test_get_organisation() {
        let db = setup_test_db().await;
        let repo = OrganisationRepository::new(&db);

        let created = repo.create_organisation(request("Acme")).await.unwrap();

        let found = repo.get_organisation(created.id).await.unwrap();
        assert_eq!(found, created);

        let missing = repo.get_organisation(created.id + 100).await;
        assert!(matches!(missing, Err(RepositoryError::NotFound(entity)) if entity == "organisation"));

        assert!(repo.find_organisation(created.id + 100).await.unwrap().is_none());
    }
}
