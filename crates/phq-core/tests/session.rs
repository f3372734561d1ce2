use phq_core::error::CoreError;
use phq_core::models::questionnaire::{FunctionalImpairment, ResponseLevel};
use phq_core::models::response::ItemScores;
use phq_core::models::result::{
    DomainSubscores, ScoreResult, Severity, Subscore, TreatmentResponse,
};
use phq_core::models::session::{Page, SessionState};

fn sample_result() -> ScoreResult {
    ScoreResult {
        total: 3,
        severity: Severity::Minimal,
        treatment_response: TreatmentResponse::Remission,
        unanswered_count: 6,
        item_scores: ItemScores::try_from([1, 1, 1, 0, 0, 0, 0, 0, 0]).unwrap(),
        domain_subscores: DomainSubscores {
            cognitive_affective: Subscore { score: 2, max: 15 },
            somatic: Subscore { score: 1, max: 12 },
        },
        functional_impairment: None,
        flagged_item9: false,
        timestamp: "2024-05-01 09:30".to_string(),
    }
}

#[test]
fn new_session_starts_on_survey_without_summary() {
    let session = SessionState::new();
    assert_eq!(session.page, Page::Survey);
    assert_eq!(session.answers.answered_count(), 0);
    assert!(session.summary.is_none());
    assert!(matches!(
        session.require_summary(),
        Err(CoreError::ResultNotReady)
    ));
}

#[test]
fn answers_thread_through_transitions() {
    let session = SessionState::new()
        .with_answer(1, Some(ResponseLevel::SeveralDays))
        .unwrap()
        .with_answer(2, Some(ResponseLevel::NearlyEveryDay))
        .unwrap()
        .with_answer(1, None)
        .unwrap()
        .with_functional(Some(FunctionalImpairment::VeryDifficult));

    assert_eq!(session.answers.get(1), None);
    assert_eq!(session.answers.get(2), Some(ResponseLevel::NearlyEveryDay));
    assert_eq!(session.functional, Some(FunctionalImpairment::VeryDifficult));
}

#[test]
fn answer_outside_item_range_is_rejected() {
    let err = SessionState::new()
        .with_answer(10, Some(ResponseLevel::SeveralDays))
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidItem(10)));

    let err = SessionState::new().with_answer(0, None).unwrap_err();
    assert!(matches!(err, CoreError::InvalidItem(0)));
}

#[test]
fn show_result_then_edit_keeps_answers_and_summary() {
    let session = SessionState::new()
        .with_answer(3, Some(ResponseLevel::MoreThanHalfTheDays))
        .unwrap()
        .show_result(sample_result());

    assert_eq!(session.page, Page::Result);
    assert_eq!(session.require_summary().unwrap().total, 3);

    let session = session.edit();
    assert_eq!(session.page, Page::Survey);
    assert_eq!(session.answers.get(3), Some(ResponseLevel::MoreThanHalfTheDays));
    assert!(session.summary.is_some());
}

#[test]
fn session_round_trips_through_json() {
    let session = SessionState::new()
        .with_answer(9, Some(ResponseLevel::SeveralDays))
        .unwrap()
        .show_result(sample_result());

    let json = serde_json::to_value(&session).unwrap();
    assert_eq!(json["page"], "result");
    assert_eq!(json["answers"]["9"], "several_days");
    assert_eq!(json["summary"]["severity"], "minimal");

    let back: SessionState = serde_json::from_value(json).unwrap();
    assert_eq!(back, session);
}

#[test]
fn session_json_may_omit_optional_fields() {
    let json = serde_json::json!({
        "id": "6f1c1d3e-2b6a-4c8e-9d39-1f4a2b7c9e01",
        "page": "survey",
    });
    let session: SessionState = serde_json::from_value(json).unwrap();
    assert_eq!(session.answers.answered_count(), 0);
    assert!(session.functional.is_none());
}

#[test]
fn summary_is_only_served_from_the_result_page() {
    let session = SessionState::new().show_result(sample_result());
    assert!(session.require_summary().is_ok());

    let session = session.edit();
    assert!(matches!(
        session.require_summary(),
        Err(CoreError::ResultNotReady)
    ));
}

#[test]
fn changing_answers_after_submit_drops_the_summary() {
    let session = SessionState::new()
        .show_result(sample_result())
        .edit()
        .with_answer(9, Some(ResponseLevel::NearlyEveryDay))
        .unwrap();
    assert!(session.summary.is_none());

    let session = SessionState::new()
        .show_result(sample_result())
        .edit()
        .with_functional(Some(FunctionalImpairment::SomewhatDifficult));
    assert!(session.summary.is_none());
}
