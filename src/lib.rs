//! # Organisations API Library
//!
//! This library provides the core functionality for the Organisations API service:
//! organisations, their geolocated locations and bounding-box search over them.

pub mod bounding_box;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod server;
pub mod telemetry;
pub use migration;
