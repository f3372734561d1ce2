use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use phq_core::models::questionnaire::FunctionalImpairment;
use phq_core::models::result::ScoreResult;
use phq_instruments::instruments::phq9::{answers_from_points, compose_result};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ScoreRequest {
    /// Item index to points (0–3), `null` for a blank item.
    #[serde(default)]
    pub answers: BTreeMap<i64, Option<f64>>,
    #[serde(default)]
    pub functional: Option<FunctionalImpairment>,
    /// Stamped with the server clock when absent.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Score a questionnaire in one call, without a session.
pub async fn score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResult>, ApiError> {
    let answers = answers_from_points(&req.answers)?;
    let timestamp = req.timestamp.unwrap_or_else(|| state.timestamp_now());

    Ok(Json(compose_result(&answers, req.functional, timestamp)))
}
