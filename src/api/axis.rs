//! Axis emission shared by the chart builders.
//!
//! Axes are drawn as a baseline plus tick labels; the scales themselves stay
//! pure and know nothing about text or pixels beyond their range.

use std::hash::Hash;

use crate::api::layout::ChartLayout;
use crate::core::{BandScale, LinearScale, TemporalScale};
use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const TICK_FONT_PX: f64 = 10.0;
const TITLE_FONT_PX: f64 = 12.0;
const TICK_LABEL_GAP_PX: f64 = 14.0;

/// Baseline of the bottom axis across the plot width.
pub fn bottom_axis_line(frame: &mut RenderFrame, layout: ChartLayout) {
    let h = layout.inner_height();
    frame.push_line(LinePrimitive::new(
        0.0,
        h,
        layout.inner_width(),
        h,
        1.0,
        AXIS_COLOR,
    ));
}

/// Baseline of the left axis across the plot height.
pub fn left_axis_line(frame: &mut RenderFrame, layout: ChartLayout) {
    frame.push_line(LinePrimitive::new(
        0.0,
        0.0,
        0.0,
        layout.inner_height(),
        1.0,
        AXIS_COLOR,
    ));
}

/// Bottom tick labels for a band scale, centered under each band.
///
/// `label` may return `None` to thin crowded axes (the stacked bar chart
/// labels only years congruent to 3 mod 5).
pub fn bottom_band_ticks<K, F>(
    frame: &mut RenderFrame,
    scale: &BandScale<K>,
    layout: ChartLayout,
    label: F,
) where
    K: Eq + Hash + Clone,
    F: Fn(&K) -> Option<String>,
{
    let y = layout.inner_height() + TICK_LABEL_GAP_PX;
    let half_band = scale.bandwidth() / 2.0;
    let ticks: Vec<(f64, String)> = scale
        .domain()
        .filter_map(|key| {
            let text = label(key)?;
            let x = scale.position(key)? + half_band;
            Some((x, text))
        })
        .collect();
    for (x, text) in ticks {
        frame.push_text(TextPrimitive::new(
            text,
            x,
            y,
            TICK_FONT_PX,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
    }
}

/// Left tick labels for a band scale, right-aligned beside each band.
pub fn left_band_ticks<K, F>(frame: &mut RenderFrame, scale: &BandScale<K>, label: F)
where
    K: Eq + Hash + Clone,
    F: Fn(&K) -> String,
{
    let half_band = scale.bandwidth() / 2.0;
    let ticks: Vec<(f64, String)> = scale
        .domain()
        .filter_map(|key| {
            let y = scale.position(key)? + half_band;
            Some((y, label(key)))
        })
        .collect();
    for (y, text) in ticks {
        frame.push_text(TextPrimitive::new(
            text,
            -6.0,
            y,
            TICK_FONT_PX,
            AXIS_COLOR,
            TextHAlign::Right,
        ));
    }
}

/// Left tick labels for a linear scale.
pub fn left_linear_ticks<F>(
    frame: &mut RenderFrame,
    scale: &LinearScale,
    count: usize,
    format: F,
) -> ChartResult<()>
where
    F: Fn(f64) -> String,
{
    for value in scale.ticks(count) {
        let y = scale.to_pixel(value)?;
        frame.push_text(TextPrimitive::new(
            format(value),
            -6.0,
            y,
            TICK_FONT_PX,
            AXIS_COLOR,
            TextHAlign::Right,
        ));
    }
    Ok(())
}

/// Bottom year labels for the temporal scale, one per January in the domain.
pub fn bottom_time_ticks(
    frame: &mut RenderFrame,
    scale: &TemporalScale,
    layout: ChartLayout,
) -> ChartResult<()> {
    let y = layout.inner_height() + TICK_LABEL_GAP_PX;
    for year in scale.tick_years() {
        let january = chrono::NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| {
            crate::error::ChartError::InvalidData(format!("invalid tick year {year}"))
        })?;
        let x = scale.to_pixel(january)?;
        frame.push_text(TextPrimitive::new(
            year.to_string(),
            x,
            y,
            TICK_FONT_PX,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
    }
    Ok(())
}

/// Horizontal axis title centered under the plot.
pub fn x_axis_title(frame: &mut RenderFrame, layout: ChartLayout, title: &str) {
    frame.push_text(TextPrimitive::new(
        title,
        layout.inner_width() / 2.0,
        layout.inner_height() + layout.margins.bottom - 10.0,
        TITLE_FONT_PX,
        AXIS_COLOR,
        TextHAlign::Center,
    ));
}

/// Vertical axis title placed in the left margin, vertically centered.
pub fn y_axis_title(frame: &mut RenderFrame, layout: ChartLayout, title: &str) {
    frame.push_text(TextPrimitive::new(
        title,
        -layout.margins.left + 10.0,
        layout.inner_height() / 2.0,
        TITLE_FONT_PX,
        AXIS_COLOR,
        TextHAlign::Left,
    ));
}
