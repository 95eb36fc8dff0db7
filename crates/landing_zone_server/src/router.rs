//! Router construction for the landing zone function server.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use landing_zone_core::LandingZoneFunction;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Build the axum router with all routes and shared state.
pub fn build_router(function: Arc<LandingZoneFunction>) -> Router {
    Router::new()
        .route("/run", post(handlers::run::run_function))
        .route("/health", get(handlers::health::health))
        .layer(Extension(function))
        .layer(TraceLayer::new_for_http())
}
