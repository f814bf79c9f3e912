use axum::extract::State;
use axum::Json;

use visus_risk::ThresholdTable;

use crate::state::AppState;

pub async fn get_thresholds(State(state): State<AppState>) -> Json<ThresholdTable> {
    Json(state.evaluator.thresholds().clone())
}
