//! phq-export
//!
//! Turns a computed score result into something the user can keep: a PNG
//! chart, or a DOCX summary rendered from a text template. Nothing here
//! feeds back into scoring.

pub mod chart;
pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
