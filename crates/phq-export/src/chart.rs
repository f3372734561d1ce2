use std::io::Cursor;

use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};

use phq_core::models::questionnaire::{ITEM_COUNT, MAX_ITEM_POINTS, MAX_TOTAL};
use phq_core::models::result::{ScoreResult, Severity, Subscore};
use phq_instruments::instruments::phq9::{COGNITIVE_AFFECTIVE_ITEMS, SAFETY_ITEM};

use crate::error::ExportError;
use crate::styles::{ChartStyle, MIN_CHART_HEIGHT, MIN_CHART_WIDTH};

/// Pixel layout shared by the drawing steps and by tests probing the image.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub left: u32,
    pub right: u32,
    pub bars_top: u32,
    pub bars_bottom: u32,
    pub strip_top: u32,
    pub strip_bottom: u32,
    pub cognitive_gauge: (u32, u32),
    pub somatic_gauge: (u32, u32),
}

impl Layout {
    pub fn for_style(style: &ChartStyle) -> Self {
        let (w, h) = (style.width, style.height);
        let margin = w / 30;
        Self {
            left: margin,
            right: w - margin,
            bars_top: margin,
            bars_bottom: h * 55 / 100,
            strip_top: h * 64 / 100,
            strip_bottom: h * 71 / 100,
            cognitive_gauge: (h * 78 / 100, h * 83 / 100),
            somatic_gauge: (h * 88 / 100, h * 93 / 100),
        }
    }

    fn span(&self) -> u32 {
        self.right - self.left
    }

    fn slot(&self) -> u32 {
        self.span() / ITEM_COUNT as u32
    }

    /// Horizontal centre of the bar for a 1-based item index.
    pub fn bar_center(&self, item: u8) -> u32 {
        self.left + u32::from(item - 1) * self.slot() + self.slot() / 2
    }

    /// Top edge of a bar holding `points`.
    pub fn bar_top(&self, points: u8) -> u32 {
        let height = self.bars_bottom - self.bars_top;
        self.bars_bottom - u32::from(points.min(MAX_ITEM_POINTS)) * height / u32::from(MAX_ITEM_POINTS)
    }

    /// x position of a total on the severity strip.
    pub fn total_x(&self, total: u8) -> u32 {
        let steps = u32::from(MAX_TOTAL) + 1;
        self.left + (u32::from(total.min(MAX_TOTAL)) * 2 + 1) * self.span() / (steps * 2)
    }

    fn band_bounds(&self, band: Severity) -> (u32, u32) {
        let steps = u32::from(MAX_TOTAL) + 1;
        let range = band.range();
        (
            self.left + u32::from(*range.start()) * self.span() / steps,
            self.left + (u32::from(*range.end()) + 1) * self.span() / steps,
        )
    }
}

/// Draw the summary chart: one bar per item, the severity strip with a
/// marker at the total, and a gauge per domain subscore.
pub fn render_summary_image(
    result: &ScoreResult,
    style: &ChartStyle,
) -> Result<RgbImage, ExportError> {
    if style.width < MIN_CHART_WIDTH || style.height < MIN_CHART_HEIGHT {
        return Err(ExportError::Image(format!(
            "canvas {}x{} is smaller than {MIN_CHART_WIDTH}x{MIN_CHART_HEIGHT}",
            style.width, style.height
        )));
    }

    let layout = Layout::for_style(style);
    let mut img = RgbImage::from_pixel(style.width, style.height, Rgb(style.background));

    // Gridlines at 0..=3 points
    for level in 0..=MAX_ITEM_POINTS {
        let y = layout.bar_top(level);
        fill_rect(&mut img, layout.left, y, layout.right, y + 1, style.grid);
    }

    let bar_width = layout.slot() * 3 / 5;
    for (offset, points) in result.item_scores.as_array().iter().enumerate() {
        let item = offset as u8 + 1;
        let color = if item == SAFETY_ITEM && result.flagged_item9 {
            style.accent
        } else if COGNITIVE_AFFECTIVE_ITEMS.contains(&item) {
            style.cognitive_affective
        } else {
            style.somatic
        };
        let x0 = layout.bar_center(item) - bar_width / 2;
        fill_rect(
            &mut img,
            x0,
            layout.bar_top(*points),
            x0 + bar_width,
            layout.bars_bottom,
            color,
        );
    }
    fill_rect(
        &mut img,
        layout.left,
        layout.bars_bottom,
        layout.right,
        layout.bars_bottom + 2,
        style.ink,
    );

    for (band, color) in Severity::ALL.iter().zip(style.bands) {
        let (x0, x1) = layout.band_bounds(*band);
        fill_rect(&mut img, x0, layout.strip_top, x1, layout.strip_bottom, color);
    }
    let marker = layout.total_x(result.total);
    fill_rect(
        &mut img,
        marker.saturating_sub(2),
        layout.strip_top.saturating_sub(6),
        marker + 2,
        layout.strip_bottom + 6,
        style.ink,
    );

    let subscores = &result.domain_subscores;
    draw_gauge(
        &mut img,
        &layout,
        layout.cognitive_gauge,
        &subscores.cognitive_affective,
        style.track,
        style.cognitive_affective,
    );
    draw_gauge(
        &mut img,
        &layout,
        layout.somatic_gauge,
        &subscores.somatic,
        style.track,
        style.somatic,
    );

    Ok(img)
}

/// Render the summary chart and encode it as PNG.
pub fn render_summary_png(result: &ScoreResult, style: &ChartStyle) -> Result<Vec<u8>, ExportError> {
    let img = render_summary_image(result, style)?;
    let png = encode_png(img)?;
    tracing::debug!(
        width = style.width,
        height = style.height,
        bytes = png.len(),
        "rendered summary chart"
    );
    Ok(png)
}

fn draw_gauge(
    img: &mut RgbImage,
    layout: &Layout,
    (top, bottom): (u32, u32),
    subscore: &Subscore,
    track: [u8; 3],
    fill: [u8; 3],
) {
    fill_rect(img, layout.left, top, layout.right, bottom, track);
    let filled = (subscore.ratio() * f64::from(layout.span())).round() as u32;
    fill_rect(img, layout.left, top, layout.left + filled, bottom, fill);
}

/// Fill `[x0, x1) x [y0, y1)`, clipped to the canvas.
fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: [u8; 3]) {
    let x1 = x1.min(img.width());
    let y1 = y1.min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, Rgb(color));
        }
    }
}

fn encode_png(img: RgbImage) -> Result<Vec<u8>, ExportError> {
    let dynamic = DynamicImage::ImageRgb8(img);
    let mut cursor = Cursor::new(Vec::new());
    dynamic
        .write_to(&mut cursor, ImageOutputFormat::Png)
        .map_err(|e| ExportError::Image(format!("PNG encoding failed: {e}")))?;
    Ok(cursor.into_inner())
}
