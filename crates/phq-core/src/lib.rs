//! phq-core
//!
//! Pure domain types for the PHQ-9 screening questionnaire: the response
//! scale, raw answers, score results and the caller-owned session state.
//! No I/O — this is the shared vocabulary of the workspace.

pub mod error;
pub mod models;
