use serde::{Deserialize, Serialize};

/// Document styling configuration for DOCX exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for Latin body text (e.g. "Calibri").
    pub body_font: String,

    /// Font for Hangul and other East Asian text.
    pub east_asia_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Heading 1 font size in points.
    pub heading1_size: usize,

    /// Heading 2 font size in points.
    pub heading2_size: usize,

    /// Hex colour (no `#`) for callout lines such as the safety notice.
    pub callout_color: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            east_asia_font: "Malgun Gothic".to_string(),
            body_size: 11,
            heading1_size: 18,
            heading2_size: 14,
            callout_color: "9f1239".to_string(),
        }
    }
}

pub type Rgb = [u8; 3];

/// Canvas size and palette for the PNG summary chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub ink: Rgb,
    pub grid: Rgb,
    pub track: Rgb,
    /// Bars and gauge for items 1, 2, 6, 7, 9.
    pub cognitive_affective: Rgb,
    /// Bars and gauge for items 3, 4, 5, 8.
    pub somatic: Rgb,
    /// Item 9 bar when it is flagged.
    pub accent: Rgb,
    /// Severity strip, minimal through severe.
    pub bands: [Rgb; 5],
}

/// Smallest canvas the layout fits on.
pub const MIN_CHART_WIDTH: u32 = 360;
pub const MIN_CHART_HEIGHT: u32 = 240;

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 480,
            background: [0xff, 0xff, 0xff],
            ink: [0x0f, 0x17, 0x2a],
            grid: [0xea, 0xee, 0xf6],
            track: [0xe5, 0xe7, 0xeb],
            cognitive_affective: [0x25, 0x63, 0xeb],
            somatic: [0x0d, 0x94, 0x88],
            accent: [0xe1, 0x1d, 0x48],
            bands: [
                [0x22, 0xc5, 0x5e],
                [0x84, 0xcc, 0x16],
                [0xea, 0xb3, 0x08],
                [0xf9, 0x73, 0x16],
                [0xdc, 0x26, 0x26],
            ],
        }
    }
}
