//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM operations
//! for organisations and their locations.

pub mod location;
pub mod organisation;

pub use location::{CreateLocationRequest, LocationRepository};
pub use organisation::{CreateOrganisationRequest, OrganisationRepository};
