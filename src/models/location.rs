//! Location entity model
//!
//! This module contains the SeaORM entity model for the locations table,
//! which stores named geographic points belonging to an organisation.
//! Coordinates are stored as given; range limits only apply when filtering
//! by bounding box.

use super::organisation::Entity as Organisation;
use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

/// Location entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    /// Database-generated identifier (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Owning organisation
    pub organisation_id: i32,

    pub location_name: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Organisation",
        from = "Column::OrganisationId",
        to = "super::organisation::Column::Id"
    )]
    Organisation,
}

impl Related<Organisation> for Entity {
    fn to() -> RelationDef {
        Relation::Organisation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
