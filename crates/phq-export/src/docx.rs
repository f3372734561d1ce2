use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// One line of rendered template output, classified by its prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Heading1(&'a str),
    Heading2(&'a str),
    Bullet(&'a str),
    Callout(&'a str),
    PageBreak,
    Body(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Line::Blank
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            Line::Heading2(text)
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            Line::Heading1(text)
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            Line::Bullet(text)
        } else if let Some(text) = trimmed.strip_prefix("> ") {
            Line::Callout(text)
        } else if trimmed == "---" {
            Line::PageBreak
        } else {
            Line::Body(trimmed)
        }
    }
}

/// Generate a DOCX document from the Markdown-ish summary.
///
/// Supported subset: `#`/`##` headings, `- ` bullets, `> ` callouts (drawn
/// in the callout colour), `**bold**` inline, `---` page break. Runs of
/// blank lines collapse into one empty paragraph.
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size));

    let mut previous_blank = true;
    for line in rendered.lines().map(Line::classify) {
        let blank = line == Line::Blank;
        if blank && previous_blank {
            continue;
        }
        previous_blank = blank;

        let paragraph = match line {
            Line::Blank => Paragraph::new(),
            Line::Heading1(text) => heading_paragraph(text, "Heading1", styles),
            Line::Heading2(text) => heading_paragraph(text, "Heading2", styles),
            Line::Bullet(text) => {
                let mut para = Paragraph::new()
                    .align(AlignmentType::Left)
                    .add_run(styled_run("\u{2022} ", styles));
                for run in parse_inline(text, styles) {
                    para = para.add_run(run);
                }
                para
            }
            Line::Callout(text) => {
                let mut para = Paragraph::new().align(AlignmentType::Left);
                for run in parse_inline(text, styles) {
                    para = para.add_run(run.color(styles.callout_color.as_str()));
                }
                para
            }
            Line::PageBreak => Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            Line::Body(text) => {
                let mut para = Paragraph::new().align(AlignmentType::Left);
                for run in parse_inline(text, styles) {
                    para = para.add_run(run);
                }
                para
            }
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(Run::new().add_text(text).fonts(fonts(styles)))
}

fn fonts(styles: &DocumentStyles) -> RunFonts {
    RunFonts::new()
        .ascii(&styles.body_font)
        .hi_ansi(&styles.body_font)
        .east_asia(&styles.east_asia_font)
}

fn styled_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(fonts(styles))
}

/// Split `**bold**` segments into runs. An unclosed `**` is kept as text.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let after_start = &remaining[start + 2..];
        let Some(end) = after_start.find("**") else {
            break;
        };

        let before = &remaining[..start];
        if !before.is_empty() {
            runs.push(styled_run(before, styles));
        }
        runs.push(styled_run(&after_start[..end], styles).bold());
        remaining = &after_start[end + 2..];
    }

    if !remaining.is_empty() {
        runs.push(styled_run(remaining, styles));
    }

    runs
}
