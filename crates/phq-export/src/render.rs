use serde::Serialize;
use tera::{Context, Tera};

use phq_core::models::questionnaire::{Locale, MAX_TOTAL};
use phq_core::models::result::{ScoreResult, Subscore};
use phq_instruments::Instrument;
use phq_instruments::instruments::phq9::Phq9;

use crate::error::ExportError;

/// Built-in summary template (Tera syntax, Markdown-ish output understood by
/// [`crate::docx::generate_docx`]).
pub const SUMMARY_TEMPLATE: &str = include_str!("../templates/summary.md");

/// Template context: the result with every enum already turned into a
/// display string for the requested locale.
#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub labels: SummaryLabels,
    pub timestamp: String,
    pub total: u8,
    pub max_total: u8,
    pub severity: &'static str,
    pub treatment_response: &'static str,
    pub cognitive_affective: Subscore,
    pub somatic: Subscore,
    pub items: Vec<ItemLine>,
    pub functional: Option<&'static str>,
    pub unanswered_count: u8,
    pub unanswered_notice: String,
    pub flagged_item9: bool,
}

#[derive(Debug, Serialize)]
pub struct ItemLine {
    pub index: u8,
    pub tag: String,
    pub points: u8,
}

#[derive(Debug, Serialize)]
pub struct SummaryLabels {
    pub title: &'static str,
    pub administered: &'static str,
    pub total: &'static str,
    pub severity: &'static str,
    pub treatment_response: &'static str,
    pub subscores: &'static str,
    pub cognitive_affective: &'static str,
    pub somatic: &'static str,
    pub items: &'static str,
    pub functional: &'static str,
    pub safety: &'static str,
    pub citation: &'static str,
}

const CITATION: &str = "PHQ-9: Kroenke, Spitzer & Williams (2001), J Gen Intern Med; \
                        Spitzer, Kroenke & Williams (1999), JAMA.";

impl SummaryLabels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                title: "PHQ-9 Result Summary",
                administered: "Administered",
                total: "Total score",
                severity: "Severity",
                treatment_response: "Treatment response",
                subscores: "Domain subscores",
                cognitive_affective: "Cognitive-affective",
                somatic: "Somatic",
                items: "Item scores",
                functional: "Functional impairment",
                safety: "**Item 9 was answered above zero.** If you are having thoughts of \
                         death or self-harm, contact a crisis line or emergency services now.",
                citation: CITATION,
            },
            Locale::Ko => Self {
                title: "PHQ-9 결과 요약",
                administered: "검사 일시",
                total: "총점",
                severity: "중증도",
                treatment_response: "치료 반응",
                subscores: "영역별 점수",
                cognitive_affective: "인지·정서",
                somatic: "신체",
                items: "문항별 점수",
                functional: "기능 손상",
                safety: "**문항 9에 응답이 있습니다.** 자살·자해 생각이 있다면 즉시 위기상담 \
                         전화나 응급 서비스에 연락하세요.",
                citation: CITATION,
            },
        }
    }
}

impl SummaryView {
    pub fn new(result: &ScoreResult, locale: Locale) -> Self {
        let items = Phq9
            .items()
            .iter()
            .map(|item| ItemLine {
                index: item.index,
                tag: item.domain_tag.get(locale).to_string(),
                points: result.item_scores.item(item.index).unwrap_or(0),
            })
            .collect();

        Self {
            labels: SummaryLabels::for_locale(locale),
            timestamp: result.timestamp.clone(),
            total: result.total,
            max_total: MAX_TOTAL,
            severity: result.severity.label(locale),
            treatment_response: result.treatment_response.label(locale),
            cognitive_affective: result.domain_subscores.cognitive_affective,
            somatic: result.domain_subscores.somatic,
            items,
            functional: result.functional_impairment.map(|f| f.label(locale)),
            unanswered_count: result.unanswered_count,
            unanswered_notice: result.unanswered_notice(locale).unwrap_or_default(),
            flagged_item9: result.flagged_item9,
        }
    }
}

/// Render a Tera template against a score result.
///
/// The `template_content` is the raw template string (Jinja2 syntax); the
/// fields of [`SummaryView`] are the template variables.
pub fn render_summary(
    template_name: &str,
    template_content: &str,
    result: &ScoreResult,
    locale: Locale,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(SummaryView::new(result, locale))?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
