use phq_core::error::CoreError;
use phq_core::models::questionnaire::{FunctionalImpairment, Locale, ResponseLevel};
use phq_core::models::response::ItemScores;
use phq_core::models::result::{Severity, Subscore};

#[test]
fn response_levels_map_to_points() {
    let points: Vec<u8> = ResponseLevel::ALL.iter().map(|l| l.points()).collect();
    assert_eq!(points, vec![0, 1, 2, 3]);

    for level in ResponseLevel::ALL {
        assert_eq!(ResponseLevel::from_points(level.points()), Some(level));
    }
    assert_eq!(ResponseLevel::from_points(4), None);
}

#[test]
fn labels_are_localized() {
    assert_eq!(ResponseLevel::NearlyEveryDay.label(Locale::En), "Nearly every day");
    assert_eq!(ResponseLevel::NearlyEveryDay.label(Locale::Ko), "거의 매일");
    assert_eq!(Severity::ModeratelySevere.label(Locale::En), "moderately severe");
    assert_eq!(Severity::ModeratelySevere.label(Locale::Ko), "중등도-중증");
}

#[test]
fn item_scores_reject_points_above_three() {
    let err = ItemScores::try_from([0, 0, 0, 0, 4, 0, 0, 0, 0]).unwrap_err();
    assert!(matches!(err, CoreError::InvalidPoints { item: 5, value: 4 }));
}

#[test]
fn item_scores_use_one_based_indices() {
    let scores = ItemScores::try_from([1, 2, 3, 0, 1, 2, 3, 0, 1]).unwrap();
    assert_eq!(scores.item(1), Some(1));
    assert_eq!(scores.item(9), Some(1));
    assert_eq!(scores.item(0), None);
    assert_eq!(scores.item(10), None);
    assert_eq!(scores.sum_of(&[1, 2, 3]), 6);
}

#[test]
fn subscore_ratio_is_clamped() {
    assert_eq!(Subscore { score: 6, max: 12 }.ratio(), 0.5);
    assert_eq!(Subscore { score: 20, max: 15 }.ratio(), 1.0);
    assert_eq!(Subscore { score: 0, max: 0 }.ratio(), 0.0);
}

#[test]
fn item_scores_deserialize_through_range_check() {
    let scores: ItemScores = serde_json::from_str("[0,1,2,3,0,1,2,3,0]").unwrap();
    assert_eq!(scores.item(4), Some(3));

    let err = serde_json::from_str::<ItemScores>("[0,0,0,0,0,0,0,0,9]").unwrap_err();
    assert!(err.to_string().contains("item 9: 9 points"));
}

#[test]
fn functional_labels_follow_korean_form_wording() {
    let labels: Vec<&str> = FunctionalImpairment::ALL
        .iter()
        .map(|f| f.label(Locale::Ko))
        .collect();
    assert_eq!(labels, vec!["전혀 어렵지 않음", "어렵지 않음", "어려움", "매우 어려움"]);
}
