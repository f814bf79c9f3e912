use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use visus_core::models::visit::{ClinicalVisit, VisitForm};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_visits(State(state): State<AppState>) -> Json<Vec<ClinicalVisit>> {
    Json(state.visits.lock().await.list())
}

pub async fn get_visit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClinicalVisit>, ApiError> {
    let visits = state.visits.lock().await;
    let visit = visits
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("visit not found: {id}")))?;
    Ok(Json(visit.clone()))
}

/// Assess the submitted measurements, then record the visit with the
/// assessment attached. Visits for unregistered patients are rejected.
pub async fn create_visit(
    State(state): State<AppState>,
    Json(form): Json<VisitForm>,
) -> Result<Json<ClinicalVisit>, ApiError> {
    let assessment = state.evaluator.evaluate(&form.measurements());
    let visit = form.into_visit(Uuid::new_v4(), assessment, jiff::Timestamp::now())?;
    if !state.patients.lock().await.contains(visit.patient_id) {
        return Err(ApiError::NotFound(format!(
            "patient not found: {}",
            visit.patient_id
        )));
    }

    state.visits.lock().await.insert(visit.clone());
    tracing::info!(
        visit.id = %visit.id,
        visit.risk_category = %visit.risk_category,
        "visit recorded"
    );

    Ok(Json(visit))
}

/// Explicitly re-run the evaluator over a stored visit's measurements.
pub async fn reassess_visit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClinicalVisit>, ApiError> {
    let mut visits = state.visits.lock().await;
    let visit = visits
        .get_mut(id)
        .ok_or_else(|| ApiError::NotFound(format!("visit not found: {id}")))?;

    let previous = visit.risk_category;
    let assessment = state.evaluator.evaluate(&visit.measurements);
    visit.apply_assessment(assessment, jiff::Timestamp::now());
    tracing::info!(
        visit.id = %id,
        previous = %previous,
        visit.risk_category = %visit.risk_category,
        "visit reassessed"
    );

    Ok(Json(visit.clone()))
}
