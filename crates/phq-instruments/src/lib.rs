//! phq-instruments
//!
//! Questionnaire instrument definitions and the PHQ-9 scoring engine.
//! Pure data and arithmetic — no I/O, no clock, no shared state.

pub mod error;
pub mod instruments;
pub mod scoring;

use phq_core::models::questionnaire::Item;
use scoring::{Domain, ScoreEntry, ValidationError};

/// Trait implemented by each questionnaire instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    /// The item groups this instrument reports subscores for.
    fn domains(&self) -> &[Domain];

    /// The questionnaire statements, in presentation order.
    fn items(&self) -> &[Item];

    /// Validate a set of score entries against this instrument's rules.
    ///
    /// Entries whose subscale is not part of the instrument are skipped;
    /// callers that care look them up with [`Instrument::has_subscale`].
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let all_subscales: Vec<_> = self
            .domains()
            .iter()
            .flat_map(|d| &d.subscales)
            .collect();

        let mut errors = Vec::new();
        for entry in scores {
            if let Some(subscale) = all_subscales.iter().find(|s| s.id == entry.subscale_id)
                && !subscale.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    subscale_id: entry.subscale_id.clone(),
                    value: entry.value,
                    expected_range: subscale.range,
                    score_type: subscale.score_type,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        subscale.name,
                        entry.value,
                        subscale.range.min,
                        subscale.range.max,
                    ),
                });
            }
        }
        errors
    }

    fn has_subscale(&self, subscale_id: &str) -> bool {
        self.domains()
            .iter()
            .flat_map(|d| &d.subscales)
            .any(|s| s.id == subscale_id)
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::phq9::Phq9)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Like [`get_instrument`], but an unknown ID is an error.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, error::InstrumentError> {
    get_instrument(id).ok_or_else(|| error::InstrumentError::UnknownInstrument(id.to_string()))
}
