use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::questionnaire::{FunctionalImpairment, ResponseLevel};
use super::response::RawAnswers;
use super::result::ScoreResult;
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Page {
    #[default]
    Survey,
    Result,
}

/// State of one questionnaire session. Owned by the caller and passed in
/// and out of every transition; nothing keeps a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionState {
    pub id: Uuid,
    pub page: Page,
    #[serde(default)]
    pub answers: RawAnswers,
    #[serde(default)]
    pub functional: Option<FunctionalImpairment>,
    #[serde(default)]
    pub summary: Option<ScoreResult>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            page: Page::Survey,
            answers: RawAnswers::new(),
            functional: None,
            summary: None,
        }
    }

    /// Record an answer. Any previous summary no longer matches the
    /// answers and is dropped.
    pub fn with_answer(mut self, item: u8, level: Option<ResponseLevel>) -> Result<Self, CoreError> {
        self.answers.set(item, level)?;
        self.summary = None;
        Ok(self)
    }

    pub fn with_functional(mut self, selection: Option<FunctionalImpairment>) -> Self {
        self.functional = selection;
        self.summary = None;
        self
    }

    /// Attach a freshly computed result and move to the result page.
    pub fn show_result(mut self, summary: ScoreResult) -> Self {
        self.summary = Some(summary);
        self.page = Page::Result;
        self
    }

    /// Go back to the survey page. Answers are kept; the last summary stays
    /// until an answer changes.
    pub fn edit(mut self) -> Self {
        self.page = Page::Survey;
        self
    }

    /// The computed result, or `ResultNotReady` unless the session is on the
    /// result page with a summary attached.
    pub fn require_summary(&self) -> Result<&ScoreResult, CoreError> {
        match (self.page, &self.summary) {
            (Page::Result, Some(summary)) => Ok(summary),
            _ => Err(CoreError::ResultNotReady),
        }
    }
}
