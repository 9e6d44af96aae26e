//! Organisation entity model
//!
//! This module contains the SeaORM entity model for the organisations table.
//! An organisation owns zero or more locations.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

/// Organisation entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "organisations")]
pub struct Model {
    /// Database-generated identifier (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name; duplicates are permitted
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::location::Entity")]
    Locations,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
