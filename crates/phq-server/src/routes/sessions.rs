//! Session routes. The client holds the [`SessionState`] and sends it with
//! every call; each handler returns the next state.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use phq_core::models::questionnaire::{FunctionalImpairment, Locale, MAX_TOTAL};
use phq_core::models::result::ScoreResult;
use phq_core::models::session::SessionState;
use phq_instruments::instruments::phq9::{answers_from_points, compose_result};

use crate::error::ApiError;
use crate::safety::SafetyNotice;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub session: SessionState,
    pub item: i64,
    /// Points 0–3, or `null` to clear the item.
    pub points: Option<f64>,
}

#[derive(Deserialize)]
pub struct FunctionalRequest {
    pub session: SessionState,
    pub selection: Option<FunctionalImpairment>,
}

#[derive(Deserialize)]
pub struct SubmitRequest {
    pub session: SessionState,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Deserialize)]
pub struct SessionRequest {
    pub session: SessionState,
    #[serde(default)]
    pub locale: Locale,
}

/// What the result page shows, with every label resolved for one locale.
#[derive(Serialize)]
pub struct ResultView {
    pub result: ScoreResult,
    pub total_label: String,
    pub severity_label: &'static str,
    pub treatment_response_label: &'static str,
    pub functional_label: Option<&'static str>,
    /// Present when blank items were scored as 0.
    pub unanswered_notice: Option<String>,
    /// Present when item 9 was answered above zero.
    pub safety_notice: Option<SafetyNotice>,
}

pub async fn create_session() -> Json<SessionState> {
    let session = SessionState::new();
    tracing::debug!(session_id = %session.id, "session created");
    Json(session)
}

pub async fn answer(Json(req): Json<AnswerRequest>) -> Result<Json<SessionState>, ApiError> {
    let validated = answers_from_points(&BTreeMap::from([(req.item, req.points)]))?;
    let mut session = req.session;
    for (item, level) in validated.iter() {
        session = session.with_answer(item, level)?;
    }
    Ok(Json(session))
}

pub async fn functional(Json(req): Json<FunctionalRequest>) -> Json<SessionState> {
    Json(req.session.with_functional(req.selection))
}

pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Json<SessionState> {
    let session = req.session;
    let timestamp = req.timestamp.unwrap_or_else(|| state.timestamp_now());
    let result = compose_result(&session.answers, session.functional, timestamp);

    tracing::info!(
        session_id = %session.id,
        unanswered = result.unanswered_count,
        "questionnaire submitted"
    );

    Json(session.show_result(result))
}

pub async fn edit(Json(req): Json<SessionRequest>) -> Json<SessionState> {
    Json(req.session.edit())
}

pub async fn result(
    State(state): State<AppState>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<ResultView>, ApiError> {
    let session = req.session;
    let summary = session.require_summary()?;

    // Rebuilt from the session's answers; only the stamp is taken from the
    // submitted summary.
    let result = compose_result(
        &session.answers,
        session.functional,
        summary.timestamp.clone(),
    );
    if result != *summary {
        tracing::warn!(session_id = %session.id, "session summary did not match its answers");
    }

    Ok(Json(result_view(
        result,
        req.locale,
        SafetyNotice::new(state.config.crisis_region, req.locale),
    )))
}

fn result_view(result: ScoreResult, locale: Locale, safety: SafetyNotice) -> ResultView {
    ResultView {
        total_label: format!("{} / {MAX_TOTAL}", result.total),
        severity_label: result.severity.label(locale),
        treatment_response_label: result.treatment_response.label(locale),
        functional_label: result.functional_impairment.map(|f| f.label(locale)),
        unanswered_notice: result.unanswered_notice(locale),
        safety_notice: result.flagged_item9.then_some(safety),
        result,
    }
}
