//! PHQ-9: Patient Health Questionnaire, nine-item depression module.
//!
//! Nine items, each rated 0–3 for frequency over the prior two weeks, total
//! 0–27. A tenth, unscored question records functional impairment.
//!
//! Everything here is a pure function of its inputs. The caller owns the
//! clock (the result timestamp is passed in) and the session state.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use phq_core::models::questionnaire::{
    FunctionalImpairment, ITEM_COUNT, Item, LocalizedText, MAX_ITEM_POINTS, MAX_TOTAL,
    ResponseLevel,
};
use phq_core::models::response::{ItemScores, RawAnswers};
use phq_core::models::result::{
    DomainSubscores, ScoreResult, Severity, Subscore, TreatmentResponse,
};

use crate::Instrument;
use crate::error::InstrumentError;
use crate::scoring::{Domain, ScoreEntry, ScoreRange, ScoreType, Subscale};

/// Items summed into the cognitive-affective subscore.
pub const COGNITIVE_AFFECTIVE_ITEMS: [u8; 5] = [1, 2, 6, 7, 9];

/// Items summed into the somatic subscore.
pub const SOMATIC_ITEMS: [u8; 4] = [3, 4, 5, 8];

/// Thoughts of being better off dead or of self-harm.
pub const SAFETY_ITEM: u8 = 9;

pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: LazyLock<Vec<Domain>> = LazyLock::new(|| {
            vec![
                item_group(
                    "cognitive_affective",
                    "Cognitive-Affective",
                    &COGNITIVE_AFFECTIVE_ITEMS,
                ),
                item_group("somatic", "Somatic", &SOMATIC_ITEMS),
            ]
        });
        &DOMAINS
    }

    fn items(&self) -> &[Item] {
        &ITEMS
    }
}

static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
    let items = [
        (
            "Little interest or pleasure in doing things",
            "일상적인 활동(예: 취미나 일상 일과 등)에 흥미나 즐거움을 거의 느끼지 못한다.",
            "Loss of interest",
            "흥미/즐거움 상실",
        ),
        (
            "Feeling down, depressed, or hopeless",
            "기분이 가라앉거나, 우울하거나, 희망이 없다고 느낀다.",
            "Depressed mood",
            "우울한 기분",
        ),
        (
            "Trouble falling or staying asleep, or sleeping too much",
            "잠들기 어렵거나 자주 깨는 등 수면에 문제가 있었거나, 반대로 너무 많이 잠을 잔다.",
            "Sleep problems",
            "수면 문제",
        ),
        (
            "Feeling tired or having little energy",
            "평소보다 피곤함을 더 자주 느꼈거나, 기운이 거의 없다.",
            "Fatigue",
            "피로/에너지 부족",
        ),
        (
            "Poor appetite or overeating",
            "식욕이 줄었거나 반대로 평소보다 더 많이 먹는다.",
            "Appetite change",
            "식욕 변화",
        ),
        (
            "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
            "자신을 부정적으로 느끼거나, 스스로 실패자라고 생각한다.",
            "Guilt or worthlessness",
            "죄책감/무가치감",
        ),
        (
            "Trouble concentrating on things, such as reading the newspaper or watching television",
            "일상생활 및 같은 일에 집중하는 것이 어렵다.",
            "Poor concentration",
            "집중력 저하",
        ),
        (
            "Moving or speaking so slowly that other people could have noticed, or being so fidgety or restless that you have been moving around a lot more than usual",
            "다른 사람들이 눈치챌 정도로 매우 느리게 말하고 움직이거나, 반대로 평소보다 초조하고 안절부절 못한다.",
            "Psychomotor change",
            "느려짐/초조함",
        ),
        (
            "Thoughts that you would be better off dead, or of hurting yourself in some way",
            "죽는 게 낫겠다는 생각하거나, 어떤 식으로든 자신을 해치고 싶은 생각이 든다.",
            "Thoughts of self-harm",
            "자살/자해 생각",
        ),
    ];

    items
        .iter()
        .zip(1u8..)
        .map(|((prompt_en, prompt_ko, tag_en, tag_ko), index)| Item {
            index,
            prompt: LocalizedText::new(prompt_en, prompt_ko),
            domain_tag: LocalizedText::new(tag_en, tag_ko),
        })
        .collect()
});

fn item_group(id: &str, name: &str, indices: &[u8]) -> Domain {
    let subscales = indices
        .iter()
        .map(|index| Subscale {
            id: item_subscale_id(*index),
            name: ITEMS
                .get(usize::from(*index) - 1)
                .map(|item| item.domain_tag.en.clone())
                .unwrap_or_else(|| format!("Item {index}")),
            score_type: ScoreType::Rating,
            range: ScoreRange::integer(0, MAX_ITEM_POINTS),
            description: None,
        })
        .collect();

    let listed = indices
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    Domain {
        id: id.to_string(),
        name: name.to_string(),
        subscales,
        composite_score_type: Some(ScoreType::Raw),
        composite_range: Some(ScoreRange::integer(0, group_max(indices))),
        description: Some(format!("Sum of items {listed}")),
    }
}

/// Subscale id used for item `index` in [`Phq9::domains`].
pub fn item_subscale_id(index: u8) -> String {
    format!("item_{index}")
}

fn group_max(indices: &[u8]) -> u8 {
    indices.len() as u8 * MAX_ITEM_POINTS
}

/// Resolve raw answers into nine point values.
///
/// Blank items count as 0 and are tallied in the returned unanswered count.
pub fn resolve_response(raw: &RawAnswers) -> (ItemScores, u8) {
    let mut unanswered = 0u8;
    let levels: [ResponseLevel; ITEM_COUNT] = std::array::from_fn(|offset| {
        let item = offset as u8 + 1;
        raw.get(item).unwrap_or_else(|| {
            unanswered += 1;
            ResponseLevel::NotAtAll
        })
    });
    (ItemScores::from_levels(levels), unanswered)
}

pub fn compute_total(points: &ItemScores) -> u8 {
    points.as_array().iter().sum()
}

/// Map a total onto its severity band.
///
/// Bands are inclusive: 0–4 minimal, 5–9 mild, 10–14 moderate,
/// 15–19 moderately severe, 20–27 severe. Anything above 27 saturates.
pub fn classify_severity(total: u8) -> Severity {
    Severity::ALL
        .into_iter()
        .find(|band| band.range().contains(&total))
        .unwrap_or(Severity::Severe)
}

pub fn treatment_response(total: u8) -> TreatmentResponse {
    if total < 5 {
        TreatmentResponse::Remission
    } else if total < 10 {
        TreatmentResponse::PartialResponse
    } else {
        TreatmentResponse::NotApplicable
    }
}

pub fn compute_domain_subscores(points: &ItemScores) -> DomainSubscores {
    DomainSubscores {
        cognitive_affective: Subscore {
            score: points.sum_of(&COGNITIVE_AFFECTIVE_ITEMS),
            max: group_max(&COGNITIVE_AFFECTIVE_ITEMS),
        },
        somatic: Subscore {
            score: points.sum_of(&SOMATIC_ITEMS),
            max: group_max(&SOMATIC_ITEMS),
        },
    }
}

/// True when item 9 was answered above zero. Surfacing crisis resources is
/// up to the caller.
pub fn flag_safety_concern(points: &ItemScores) -> bool {
    points.item(SAFETY_ITEM).is_some_and(|p| p > 0)
}

/// Score one submission.
pub fn compose_result(
    raw: &RawAnswers,
    functional: Option<FunctionalImpairment>,
    timestamp: impl Into<String>,
) -> ScoreResult {
    let (item_scores, unanswered_count) = resolve_response(raw);
    let total = compute_total(&item_scores).min(MAX_TOTAL);

    ScoreResult {
        total,
        severity: classify_severity(total),
        treatment_response: treatment_response(total),
        unanswered_count,
        item_scores,
        domain_subscores: compute_domain_subscores(&item_scores),
        functional_impairment: functional,
        flagged_item9: flag_safety_concern(&item_scores),
        timestamp: timestamp.into(),
    }
}

/// Build [`RawAnswers`] from numeric points keyed by item index, as sent by
/// a form. `None` leaves the item blank.
///
/// Keys are taken as wide integers so that any out-of-range index reaches
/// the same unknown-item error. Values that are not whole numbers in 0..=3
/// are rejected; every violation is reported, not just the first.
pub fn answers_from_points(
    points: &BTreeMap<i64, Option<f64>>,
) -> Result<RawAnswers, InstrumentError> {
    let instrument = Phq9;

    let mut checked = Vec::with_capacity(points.len());
    let mut entries = Vec::new();
    for (item, value) in points {
        let index = u8::try_from(*item)
            .ok()
            .filter(|index| instrument.has_subscale(&item_subscale_id(*index)))
            .ok_or_else(|| InstrumentError::UnknownSubscale {
                instrument_id: instrument.id().to_string(),
                subscale_id: format!("item_{item}"),
            })?;
        if let Some(value) = value {
            entries.push(ScoreEntry {
                subscale_id: item_subscale_id(index),
                value: *value,
            });
        }
        checked.push((index, *value));
    }

    let errors = instrument.validate_scores(&entries);
    if !errors.is_empty() {
        return Err(InstrumentError::Validation(errors));
    }

    let mut answers = RawAnswers::new();
    for (index, value) in checked {
        let level = value.and_then(|v| ResponseLevel::from_points(v.round() as u8));
        answers.set(index, level)?;
    }
    Ok(answers)
}
