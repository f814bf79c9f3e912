use axum::extract::State;
use axum::Json;

use visus_core::models::assessment::RiskAssessment;
use visus_core::models::measurement::ClinicalMeasurementSet;

use crate::state::AppState;

/// Evaluate a measurement set without recording anything.
pub async fn create_assessment(
    State(state): State<AppState>,
    Json(measurements): Json<ClinicalMeasurementSet>,
) -> Json<RiskAssessment> {
    Json(state.evaluator.evaluate(&measurements))
}
