//! Legend emission: categorical swatch lists and the heatmap gradient bar.

use crate::api::layout::ChartLayout;
use crate::core::SequentialColorScale;
use crate::render::{Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

const LEGEND_FONT_PX: f64 = 10.0;
const ENDPOINT_FONT_PX: f64 = 12.0;
const SWATCH_PX: f64 = 10.0;
const ROW_HEIGHT_PX: f64 = 20.0;

const GRADIENT_WIDTH: f64 = 300.0;
const GRADIENT_HEIGHT: f64 = 20.0;
const GRADIENT_INSET: f64 = 10.0;
const GRADIENT_STOPS: usize = 100;

/// One categorical legend row.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: &'static str,
    pub color: Color,
}

/// Swatch-and-label legend anchored at the right edge, vertically centered.
pub fn series_legend(frame: &mut RenderFrame, layout: ChartLayout, items: &[LegendItem]) {
    let origin_x = layout.inner_width() - 100.0;
    let origin_y = layout.inner_height() / 2.0;
    for (i, item) in items.iter().enumerate() {
        let row_y = origin_y + i as f64 * ROW_HEIGHT_PX;
        frame.push_rect(RectPrimitive::new(
            origin_x,
            row_y,
            SWATCH_PX,
            SWATCH_PX,
            item.color,
        ));
        frame.push_text(TextPrimitive::new(
            item.label,
            origin_x + 20.0,
            row_y + 9.0,
            LEGEND_FONT_PX,
            Color::rgb(0.0, 0.0, 0.0),
            TextHAlign::Left,
        ));
    }
}

/// Horizontal gradient bar summarizing the sequential color scale, with
/// "Cold"/"Hot" endpoint labels.
///
/// The bar runs zero (cold) on the left to the domain maximum (hot) on the
/// right, sampled as flat stops; the ramp is traversed in reverse because the
/// scale's domain is `[max, 0]`.
pub fn gradient_legend(frame: &mut RenderFrame, layout: ChartLayout) {
    let bar_width = GRADIENT_WIDTH - 2.0 * GRADIENT_INSET;
    let origin_x = (layout.inner_width() - GRADIENT_WIDTH) / 2.0 + GRADIENT_INSET;
    let origin_y = layout.inner_height() + layout.margins.top + GRADIENT_INSET;

    let stop_width = bar_width / GRADIENT_STOPS as f64;
    for i in 0..GRADIENT_STOPS {
        let t = i as f64 / (GRADIENT_STOPS - 1) as f64;
        frame.push_rect(RectPrimitive::new(
            origin_x + stop_width * i as f64,
            origin_y,
            stop_width,
            GRADIENT_HEIGHT,
            SequentialColorScale::ramp(1.0 - t),
        ));
    }

    // Vertically centered beside the bar; the bar's bottom edge already sits
    // on the surface's bottom edge, so there is no room below it.
    let label_y = origin_y + GRADIENT_HEIGHT / 2.0 + 4.0;
    frame.push_text(TextPrimitive::new(
        "Cold",
        origin_x - 20.0,
        label_y,
        ENDPOINT_FONT_PX,
        Color::rgb(0.0, 0.0, 0.0),
        TextHAlign::Center,
    ));
    frame.push_text(TextPrimitive::new(
        "Hot",
        origin_x + bar_width + 15.0,
        label_y,
        ENDPOINT_FONT_PX,
        Color::rgb(0.0, 0.0, 0.0),
        TextHAlign::Center,
    ));
}
