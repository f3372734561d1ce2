use axum::Json;
use axum::extract::Path;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use phq_core::models::questionnaire::Locale;
use phq_core::models::result::ScoreResult;
use phq_export::chart::render_summary_png;
use phq_export::docx::generate_docx;
use phq_export::render::{SUMMARY_TEMPLATE, render_summary};
use phq_export::styles::{ChartStyle, DocumentStyles};

use crate::error::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Png,
    Docx,
}

#[derive(Deserialize)]
pub struct ExportRequest {
    pub result: ScoreResult,
    #[serde(default)]
    pub locale: Locale,
}

/// Export a result as a PNG chart or a DOCX summary.
///
/// Failures come back as a 503 notice; the result itself is untouched.
pub async fn export_result(
    Path(format): Path<ExportFormat>,
    Json(req): Json<ExportRequest>,
) -> Result<Response, ApiError> {
    let (bytes, content_type, extension) = match format {
        ExportFormat::Png => (
            render_summary_png(&req.result, &ChartStyle::default())?,
            "image/png",
            "png",
        ),
        ExportFormat::Docx => {
            let rendered = render_summary("summary.md", SUMMARY_TEMPLATE, &req.result, req.locale)?;
            (
                generate_docx(&rendered, &DocumentStyles::default())?,
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                "docx",
            )
        }
    };

    let disposition = format!(
        "attachment; filename=\"PHQ9_{}.{extension}\"",
        file_stamp(&req.result.timestamp)
    );

    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// `2024-05-01 09:30` → `20240501_0930`. Anything but digits and the
/// date/time separator is dropped so the name is always header-safe.
fn file_stamp(timestamp: &str) -> String {
    let stamp: String = timestamp
        .trim()
        .chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(c),
            ' ' | 'T' => Some('_'),
            _ => None,
        })
        .collect();

    if stamp.is_empty() {
        "result".to_string()
    } else {
        stamp
    }
}
