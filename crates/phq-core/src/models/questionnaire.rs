use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of scored items in the questionnaire.
pub const ITEM_COUNT: usize = 9;

/// Highest point value a single item can carry.
pub const MAX_ITEM_POINTS: u8 = 3;

/// Highest reachable total (`ITEM_COUNT * MAX_ITEM_POINTS`).
pub const MAX_TOTAL: u8 = 27;

/// Display language for prompts and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Locale {
    #[default]
    En,
    Ko,
}

/// A display string carried in every supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LocalizedText {
    pub en: String,
    pub ko: String,
}

impl LocalizedText {
    pub fn new(en: &str, ko: &str) -> Self {
        Self {
            en: en.to_string(),
            ko: ko.to_string(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Ko => &self.ko,
        }
    }
}

/// One of the nine questionnaire statements.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// 1-based position in the questionnaire.
    pub index: u8,
    pub prompt: LocalizedText,
    /// Symptom label shown next to the prompt. Not used for scoring.
    pub domain_tag: LocalizedText,
}

/// How often a symptom was present over the prior two weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseLevel {
    NotAtAll,
    SeveralDays,
    MoreThanHalfTheDays,
    NearlyEveryDay,
}

impl ResponseLevel {
    pub const ALL: [ResponseLevel; 4] = [
        ResponseLevel::NotAtAll,
        ResponseLevel::SeveralDays,
        ResponseLevel::MoreThanHalfTheDays,
        ResponseLevel::NearlyEveryDay,
    ];

    pub fn points(self) -> u8 {
        match self {
            ResponseLevel::NotAtAll => 0,
            ResponseLevel::SeveralDays => 1,
            ResponseLevel::MoreThanHalfTheDays => 2,
            ResponseLevel::NearlyEveryDay => 3,
        }
    }

    pub fn from_points(points: u8) -> Option<Self> {
        Self::ALL.get(usize::from(points)).copied()
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ResponseLevel::NotAtAll, Locale::En) => "Not at all",
            (ResponseLevel::SeveralDays, Locale::En) => "Several days",
            (ResponseLevel::MoreThanHalfTheDays, Locale::En) => "More than half the days",
            (ResponseLevel::NearlyEveryDay, Locale::En) => "Nearly every day",
            (ResponseLevel::NotAtAll, Locale::Ko) => "전혀 아님",
            (ResponseLevel::SeveralDays, Locale::Ko) => "며칠 동안",
            (ResponseLevel::MoreThanHalfTheDays, Locale::Ko) => "절반 이상",
            (ResponseLevel::NearlyEveryDay, Locale::Ko) => "거의 매일",
        }
    }
}

/// Answer to the non-scored follow-up question: how difficult the reported
/// problems made work, home life and getting along with other people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FunctionalImpairment {
    NotDifficultAtAll,
    SomewhatDifficult,
    VeryDifficult,
    ExtremelyDifficult,
}

impl FunctionalImpairment {
    pub const ALL: [FunctionalImpairment; 4] = [
        FunctionalImpairment::NotDifficultAtAll,
        FunctionalImpairment::SomewhatDifficult,
        FunctionalImpairment::VeryDifficult,
        FunctionalImpairment::ExtremelyDifficult,
    ];

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (FunctionalImpairment::NotDifficultAtAll, Locale::En) => "Not difficult at all",
            (FunctionalImpairment::SomewhatDifficult, Locale::En) => "Somewhat difficult",
            (FunctionalImpairment::VeryDifficult, Locale::En) => "Very difficult",
            (FunctionalImpairment::ExtremelyDifficult, Locale::En) => "Extremely difficult",
            (FunctionalImpairment::NotDifficultAtAll, Locale::Ko) => "전혀 어렵지 않음",
            (FunctionalImpairment::SomewhatDifficult, Locale::Ko) => "어렵지 않음",
            (FunctionalImpairment::VeryDifficult, Locale::Ko) => "어려움",
            (FunctionalImpairment::ExtremelyDifficult, Locale::Ko) => "매우 어려움",
        }
    }
}
