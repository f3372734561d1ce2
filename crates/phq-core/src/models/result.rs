use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::questionnaire::{FunctionalImpairment, Locale};
use super::response::ItemScores;

/// Severity band for a PHQ-9 total. The five bands partition 0..=27.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Minimal,
        Severity::Mild,
        Severity::Moderate,
        Severity::ModeratelySevere,
        Severity::Severe,
    ];

    /// Inclusive total range covered by this band.
    pub fn range(self) -> RangeInclusive<u8> {
        match self {
            Severity::Minimal => 0..=4,
            Severity::Mild => 5..=9,
            Severity::Moderate => 10..=14,
            Severity::ModeratelySevere => 15..=19,
            Severity::Severe => 20..=27,
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Severity::Minimal, Locale::En) => "minimal",
            (Severity::Mild, Locale::En) => "mild",
            (Severity::Moderate, Locale::En) => "moderate",
            (Severity::ModeratelySevere, Locale::En) => "moderately severe",
            (Severity::Severe, Locale::En) => "severe",
            (Severity::Minimal, Locale::Ko) => "최소",
            (Severity::Mild, Locale::Ko) => "경도",
            (Severity::Moderate, Locale::Ko) => "중등도",
            (Severity::ModeratelySevere, Locale::Ko) => "중등도-중증",
            (Severity::Severe, Locale::Ko) => "중증",
        }
    }
}

/// Treatment-response reading of a total, used when the questionnaire is
/// repeated during care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TreatmentResponse {
    Remission,
    PartialResponse,
    NotApplicable,
}

impl TreatmentResponse {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (TreatmentResponse::Remission, Locale::En) => "remission",
            (TreatmentResponse::PartialResponse, Locale::En) => "partial response",
            (TreatmentResponse::NotApplicable, Locale::En) => "not applicable",
            (TreatmentResponse::Remission, Locale::Ko) => "관해",
            (TreatmentResponse::PartialResponse, Locale::Ko) => "부분 반응",
            (TreatmentResponse::NotApplicable, Locale::Ko) => "해당 없음",
        }
    }
}

/// Sum over one item group, with the group's maximum for display scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscore {
    pub score: u8,
    pub max: u8,
}

impl Subscore {
    /// `score / max`, clamped to `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        (f64::from(self.score) / f64::from(self.max)).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainSubscores {
    /// Items 1, 2, 6, 7, 9.
    pub cognitive_affective: Subscore,
    /// Items 3, 4, 5, 8.
    pub somatic: Subscore,
}

/// Everything derived from one submitted questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub total: u8,
    pub severity: Severity,
    pub treatment_response: TreatmentResponse,
    pub unanswered_count: u8,
    pub item_scores: ItemScores,
    pub domain_subscores: DomainSubscores,
    pub functional_impairment: Option<FunctionalImpairment>,
    /// Item 9 (thoughts of self-harm) was answered above zero.
    pub flagged_item9: bool,
    /// Caller-supplied, opaque.
    pub timestamp: String,
}

impl ScoreResult {
    /// Disclosure that blank items were scored as 0, if any were.
    pub fn unanswered_notice(&self, locale: Locale) -> Option<String> {
        if self.unanswered_count == 0 {
            return None;
        }
        Some(match locale {
            Locale::En => format!(
                "{} unanswered item(s) were scored as 0.",
                self.unanswered_count
            ),
            Locale::Ko => format!(
                "미응답 {}개 문항은 0점으로 계산되었습니다.",
                self.unanswered_count
            ),
        })
    }
}
