//! visus-api
//!
//! HTTP boundary for the risk evaluator: stateless assessments, patient
//! registration, and an in-memory visit registry that stores each
//! assessment alongside its visit.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the service router over `state`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/thresholds", get(routes::thresholds::get_thresholds))
        .route("/assessments", post(routes::assessments::create_assessment))
        .route("/patients", get(routes::patients::list_patients))
        .route("/patients", post(routes::patients::register_patient))
        .route("/patients/{id}", get(routes::patients::get_patient))
        .route(
            "/patients/{id}/visits",
            get(routes::patients::list_patient_visits),
        )
        .route("/visits", get(routes::visits::list_visits))
        .route("/visits", post(routes::visits::create_visit))
        .route("/visits/{id}", get(routes::visits::get_visit))
        .route("/visits/{id}/assess", post(routes::visits::reassess_visit))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
