//! Static data-anchored callouts for the trend chart.
//!
//! The two annotations are literal constants for this dataset snapshot, not
//! recomputed extrema. They anchor at a (date, total passengers) coordinate
//! and offset their note by (dx, dy) pixels.

use chrono::NaiveDate;

use crate::core::{LinearScale, TemporalScale};
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

const NOTE_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);
const TITLE_FONT_PX: f64 = 12.0;
const LABEL_FONT_PX: f64 = 10.0;

/// One fixed callout anchored at a month-resolution data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annotation {
    pub year: i32,
    pub month: u32,
    pub passengers: f64,
    pub title: &'static str,
    pub label: &'static str,
    pub dx: f64,
    pub dy: f64,
    pub subject_radius: f64,
}

/// The trend chart's reference annotations.
pub const TREND_ANNOTATIONS: [Annotation; 2] = [
    Annotation {
        year: 2020,
        month: 4,
        passengers: 3_013_899.0,
        title: "March 2020",
        label: "COVID-19 Pandemic",
        dx: -100.0,
        dy: -100.0,
        subject_radius: 3.0,
    },
    Annotation {
        year: 2019,
        month: 7,
        passengers: 86_925_851.0,
        title: "July 2019",
        label: "Pre-Pandemic Peak",
        dx: -200.0,
        dy: 0.0,
        subject_radius: 4.0,
    },
];

impl Annotation {
    pub fn date(self) -> ChartResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "annotation anchor {}-{} is not a calendar month",
                self.year, self.month
            ))
        })
    }
}

/// Emits subject circle, connector, and note texts for each annotation.
pub fn overlay(
    frame: &mut RenderFrame,
    annotations: &[Annotation],
    x: &TemporalScale,
    y: &LinearScale,
) -> ChartResult<()> {
    for annotation in annotations {
        let cx = x.to_pixel(annotation.date()?)?;
        let cy = y.to_pixel(annotation.passengers)?;
        let note_x = cx + annotation.dx;
        let note_y = cy + annotation.dy;

        frame.push_circle(CirclePrimitive::new(
            cx,
            cy,
            annotation.subject_radius,
            NOTE_COLOR.with_alpha(0.6),
        ));
        frame.push_line(LinePrimitive::new(cx, cy, note_x, note_y, 1.0, NOTE_COLOR));
        frame.push_text(TextPrimitive::new(
            annotation.title,
            note_x,
            note_y - 14.0,
            TITLE_FONT_PX,
            NOTE_COLOR,
            TextHAlign::Center,
        ));
        frame.push_text(TextPrimitive::new(
            annotation.label,
            note_x,
            note_y,
            LABEL_FONT_PX,
            NOTE_COLOR,
            TextHAlign::Center,
        ));
    }
    Ok(())
}
