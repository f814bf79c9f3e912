use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use visus_core::models::patient::{PatientProfile, PatientRegistration};
use visus_core::models::visit::ClinicalVisit;

use crate::error::ApiError;
use crate::state::AppState;

/// Register a patient, or update the profile already registered under the
/// same (normalized) email.
pub async fn register_patient(
    State(state): State<AppState>,
    Json(registration): Json<PatientRegistration>,
) -> Result<(StatusCode, Json<PatientProfile>), ApiError> {
    let profile = registration.into_profile(Uuid::new_v4(), jiff::Timestamp::now())?;
    let (profile, created) = state.patients.lock().await.upsert(profile);

    tracing::info!(patient.id = %profile.id, created, "patient registered");
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(profile)))
}

pub async fn list_patients(State(state): State<AppState>) -> Json<Vec<PatientProfile>> {
    Json(state.patients.lock().await.list())
}

pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PatientProfile>, ApiError> {
    let patients = state.patients.lock().await;
    let patient = patients
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("patient not found: {id}")))?;
    Ok(Json(patient.clone()))
}

/// A patient's visit history, newest first.
pub async fn list_patient_visits(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ClinicalVisit>>, ApiError> {
    if !state.patients.lock().await.contains(id) {
        return Err(ApiError::NotFound(format!("patient not found: {id}")));
    }
    Ok(Json(state.visits.lock().await.for_patient(id)))
}
