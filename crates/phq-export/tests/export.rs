use phq_core::models::questionnaire::{FunctionalImpairment, Locale, ResponseLevel};
use phq_core::models::response::RawAnswers;
use phq_core::models::result::ScoreResult;
use phq_export::chart::{Layout, render_summary_image, render_summary_png};
use phq_export::docx::{Line, generate_docx};
use phq_export::error::ExportError;
use phq_export::render::{SUMMARY_TEMPLATE, render_summary};
use phq_export::styles::{ChartStyle, DocumentStyles};
use phq_instruments::instruments::phq9::compose_result;

fn result_with(levels: [ResponseLevel; 9], functional: Option<FunctionalImpairment>) -> ScoreResult {
    let answers: RawAnswers = (1..=9).zip(levels).collect();
    compose_result(&answers, functional, "2024-05-01 09:30")
}

fn partial_result() -> ScoreResult {
    let answers: RawAnswers = (1..=8).map(|item| (item, ResponseLevel::SeveralDays)).collect();
    compose_result(&answers, None, "2024-05-01 09:30")
}

#[test]
fn png_has_configured_dimensions() {
    let result = result_with([ResponseLevel::MoreThanHalfTheDays; 9], None);
    let style = ChartStyle::default();

    let png = render_summary_png(&result, &style).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (style.width, style.height));
}

#[test]
fn flagged_item_nine_bar_uses_accent_colour() {
    let style = ChartStyle::default();
    let layout = Layout::for_style(&style);

    let flagged = render_summary_image(&result_with([ResponseLevel::NearlyEveryDay; 9], None), &style)
        .unwrap();
    let sample_y = layout.bars_bottom - 1;
    assert_eq!(flagged.get_pixel(layout.bar_center(9), sample_y).0, style.accent);
    assert_eq!(
        flagged.get_pixel(layout.bar_center(1), sample_y).0,
        style.cognitive_affective
    );
    assert_eq!(flagged.get_pixel(layout.bar_center(3), sample_y).0, style.somatic);
}

#[test]
fn unanswered_item_leaves_no_bar() {
    let style = ChartStyle::default();
    let layout = Layout::for_style(&style);

    let img = render_summary_image(&partial_result(), &style).unwrap();
    let sample_y = layout.bars_bottom - 1;
    assert_eq!(img.get_pixel(layout.bar_center(9), sample_y).0, style.background);
    assert_eq!(img.get_pixel(layout.bar_center(8), sample_y).0, style.somatic);
}

#[test]
fn severity_marker_sits_at_total() {
    let style = ChartStyle::default();
    let layout = Layout::for_style(&style);

    let result = partial_result();
    let img = render_summary_image(&result, &style).unwrap();
    let marker_x = layout.total_x(result.total);
    assert_eq!(img.get_pixel(marker_x, layout.strip_top).0, style.ink);
    assert_eq!(img.get_pixel(layout.total_x(0), layout.strip_top).0, style.bands[0]);
}

#[test]
fn tiny_canvas_is_rejected() {
    let style = ChartStyle {
        width: 100,
        height: 80,
        ..ChartStyle::default()
    };
    let err = render_summary_png(&partial_result(), &style).unwrap_err();
    assert!(matches!(err, ExportError::Image(_)));
}

#[test]
fn summary_mentions_scores_and_disclosures() {
    let result = partial_result();
    let rendered = render_summary("summary.md", SUMMARY_TEMPLATE, &result, Locale::En).unwrap();

    assert!(rendered.contains("# PHQ-9 Result Summary"));
    assert!(rendered.contains("2024-05-01 09:30"));
    assert!(rendered.contains("**Total score**: 8 / 27"));
    assert!(rendered.contains("**Severity**: mild"));
    assert!(rendered.contains("Somatic: 4 / 12"));
    assert!(rendered.contains("> 1 unanswered item(s) were scored as 0."));
    assert!(!rendered.contains("Item 9 was answered above zero"));
    assert!(!rendered.contains("Functional impairment"));
}

#[test]
fn summary_in_korean_with_safety_callout() {
    let result = result_with(
        [ResponseLevel::NearlyEveryDay; 9],
        Some(FunctionalImpairment::VeryDifficult),
    );
    let rendered = render_summary("summary.md", SUMMARY_TEMPLATE, &result, Locale::Ko).unwrap();

    assert!(rendered.contains("# PHQ-9 결과 요약"));
    assert!(rendered.contains("**중증도**: 중증"));
    assert!(rendered.contains("**기능 손상**: 어려움"));
    assert!(rendered.contains("> **문항 9에 응답이 있습니다.**"));
    assert!(!rendered.contains("미응답"));
}

#[test]
fn broken_template_is_a_parse_error() {
    let err = render_summary("bad", "{% if %}", &partial_result(), Locale::En).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}

#[test]
fn lines_are_classified_by_prefix() {
    assert_eq!(Line::classify("# Title"), Line::Heading1("Title"));
    assert_eq!(Line::classify("## Sub"), Line::Heading2("Sub"));
    assert_eq!(Line::classify("  - a bullet"), Line::Bullet("a bullet"));
    assert_eq!(Line::classify("> careful"), Line::Callout("careful"));
    assert_eq!(Line::classify("---"), Line::PageBreak);
    assert_eq!(Line::classify("   "), Line::Blank);
    assert_eq!(Line::classify("plain"), Line::Body("plain"));
}

#[test]
fn docx_is_a_zip_container() {
    let rendered =
        render_summary("summary.md", SUMMARY_TEMPLATE, &partial_result(), Locale::En).unwrap();
    let bytes = generate_docx(&rendered, &DocumentStyles::default()).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
