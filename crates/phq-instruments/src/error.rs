use phq_core::error::CoreError;
use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error(
        "validation failed: {}",
        .0.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; ")
    )]
    Validation(Vec<ValidationError>),

    #[error("unknown subscale '{subscale_id}' for instrument '{instrument_id}'")]
    UnknownSubscale {
        instrument_id: String,
        subscale_id: String,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}
