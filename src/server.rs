//! # Server Configuration
//!
//! This module contains the router, OpenAPI document and server lifecycle for
//! the Organisations API.

use anyhow::Context;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::handlers::{self, locations, organisations};
use crate::telemetry::trace_id_middleware;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Creates and configures the Axum application router
#[allow(deprecated)]
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route("/readyz", get(handlers::readyz))
        .route(
            "/organisations/create",
            post(organisations::create_organisation),
        )
        .route("/organisations", get(organisations::list_organisations))
        .route("/organisations/", get(organisations::list_organisations))
        .route("/organisations/{id}", get(organisations::get_organisation))
        .route(
            "/organisations/{id}/locations",
            get(locations::list_locations),
        )
        .route(
            "/organisations/create/location",
            post(locations::create_location),
        )
        .route(
            "/organisations/create/locations",
            post(locations::create_location_without_body),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(trace_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Starts the server with the given configuration and serves until a
/// shutdown signal arrives
pub async fn run_server(config: AppConfig, db: DatabaseConnection) -> anyhow::Result<()> {
    let state = AppState { db };
    let app = create_app(state);

    let addr = config
        .bind_addr()
        .with_context(|| format!("Invalid server address: {}", config.api_bind_addr))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, profile = %config.profile, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz,
        crate::handlers::readyz,
        crate::handlers::organisations::create_organisation,
        crate::handlers::organisations::list_organisations,
        crate::handlers::organisations::get_organisation,
        crate::handlers::locations::create_location,
        crate::handlers::locations::list_locations,
        crate::handlers::locations::create_location_without_body,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::models::HealthStatus,
            crate::error::ApiError,
            crate::handlers::organisations::CreateOrganisationRequestDto,
            crate::handlers::organisations::OrganisationDto,
            crate::handlers::locations::CreateLocationRequestDto,
            crate::handlers::locations::LocationDto,
            crate::handlers::locations::LocationSummaryDto,
        )
    ),
    tags(
        (name = "organisations", description = "Organisation management"),
        (name = "locations", description = "Organisation locations and bounding-box search"),
        (name = "health", description = "Liveness and readiness probes")
    ),
    info(
        title = "Organisations API",
        description = "API for managing organisations and their geolocated locations",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
