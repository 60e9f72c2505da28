//! Passenger trend chart: three time-series lines with hover markers,
//! legend, and the static annotation overlay.

use chrono::{Datelike, NaiveDate};

use crate::api::annotation::{self, TREND_ANNOTATIONS};
use crate::api::axis;
use crate::api::format::{format_grouped, month_name};
use crate::api::layout::ChartLayout;
use crate::api::legend::{self, LegendItem};
use crate::core::record::TrafficRecord;
use crate::core::{LinearScale, TemporalScale};
use crate::error::ChartResult;
use crate::interaction::{
    HitShape, HoverController, HoverTarget, TooltipContent, TooltipState, MARKER_REST_OPACITY,
};
use crate::render::{CirclePrimitive, Color, RenderFrame};

const LINE_STROKE_PX: f64 = 1.5;
const MARKER_RADIUS_PX: f64 = 5.0;

/// One plotted passenger series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendSeriesKind {
    International,
    Domestic,
    Total,
}

impl TrendSeriesKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::International => "International",
            Self::Domestic => "Domestic",
            Self::Total => "Total",
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            // steelblue / green / red
            Self::International => Color::from_rgb8(0x46, 0x82, 0xb4),
            Self::Domestic => Color::from_rgb8(0x00, 0x80, 0x00),
            Self::Total => Color::from_rgb8(0xff, 0x00, 0x00),
        }
    }

    fn value(self, record: &TrafficRecord) -> f64 {
        match self {
            Self::International => record.int_pax,
            Self::Domestic => record.dom_pax,
            Self::Total => record.pax,
        }
    }
}

/// Line paint order; hover targets register Total first so the
/// international markers sit topmost, matching paint order.
const LINE_ORDER: [TrendSeriesKind; 3] = [
    TrendSeriesKind::International,
    TrendSeriesKind::Domestic,
    TrendSeriesKind::Total,
];
const HOVER_ORDER: [TrendSeriesKind; 3] = [
    TrendSeriesKind::Total,
    TrendSeriesKind::Domestic,
    TrendSeriesKind::International,
];

/// Data behind one hover marker; the tooltip is recomputed from this on
/// every pointer-over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendHoverPayload {
    pub series: TrendSeriesKind,
    pub date: NaiveDate,
    pub value: f64,
}

fn trend_tooltip(payload: &TrendHoverPayload) -> TooltipContent {
    TooltipContent::new(vec![
        format!(
            "Date: {} {}",
            month_name(payload.date.month()),
            payload.date.year()
        ),
        format!(
            "{}: {}",
            payload.series.label(),
            format_grouped(payload.value)
        ),
    ])
}

/// The trend chart. Built once from immutable records; interaction state is
/// the only thing that changes afterwards.
#[derive(Debug)]
pub struct TrendChart {
    layout: ChartLayout,
    frame: RenderFrame,
    hover: HoverController<TrendHoverPayload>,
    x: TemporalScale,
    y: LinearScale,
}

impl TrendChart {
    pub fn build(records: &[TrafficRecord], layout: ChartLayout) -> ChartResult<Self> {
        layout.validate()?;
        let inner_w = layout.inner_width();
        let inner_h = layout.inner_height();

        let x = TemporalScale::from_records(records, inner_w)?;
        let y = LinearScale::y_axis_from_max(
            records
                .iter()
                .flat_map(|r| [r.int_pax, r.dom_pax, r.pax]),
            inner_h,
        )?;

        let mut frame = RenderFrame::new(layout.viewport());
        axis::bottom_axis_line(&mut frame, layout);
        axis::left_axis_line(&mut frame, layout);
        axis::bottom_time_ticks(&mut frame, &x, layout)?;
        axis::left_linear_ticks(&mut frame, &y, 10, format_grouped)?;
        axis::y_axis_title(&mut frame, layout, "Number of Passengers");
        axis::x_axis_title(&mut frame, layout, "Year");

        for series in LINE_ORDER {
            let mut points = Vec::with_capacity(records.len());
            for record in records {
                points.push((x.to_pixel(record.date)?, y.to_pixel(series.value(record))?));
            }
            frame.push_polyline(&points, LINE_STROKE_PX, series.color());
        }

        let mut targets = Vec::with_capacity(records.len() * HOVER_ORDER.len());
        for series in HOVER_ORDER {
            for record in records {
                let cx = x.to_pixel(record.date)?;
                let cy = y.to_pixel(series.value(record))?;
                frame.push_circle(CirclePrimitive::new(
                    cx,
                    cy,
                    MARKER_RADIUS_PX,
                    series.color().with_alpha(MARKER_REST_OPACITY),
                ));
                targets.push(HoverTarget {
                    shape: HitShape::Circle {
                        cx,
                        cy,
                        radius: MARKER_RADIUS_PX,
                    },
                    payload: TrendHoverPayload {
                        series,
                        date: record.date,
                        value: series.value(record),
                    },
                });
            }
        }

        legend::series_legend(
            &mut frame,
            layout,
            &[
                LegendItem {
                    label: "International",
                    color: TrendSeriesKind::International.color(),
                },
                LegendItem {
                    label: "Domestic",
                    color: TrendSeriesKind::Domestic.color(),
                },
                LegendItem {
                    label: "Total",
                    color: TrendSeriesKind::Total.color(),
                },
            ],
        );

        annotation::overlay(&mut frame, &TREND_ANNOTATIONS, &x, &y)?;
        frame.validate()?;

        let mut hover = HoverController::default();
        hover.rebuild(targets);

        tracing::debug!(records = records.len(), "trend chart built");
        Ok(Self {
            layout,
            frame,
            hover,
            x,
            y,
        })
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn x_scale(&self) -> TemporalScale {
        self.x
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y
    }

    #[must_use]
    pub fn hover(&self) -> &HoverController<TrendHoverPayload> {
        &self.hover
    }

    /// Hover markers with their current highlight opacity applied.
    #[must_use]
    pub fn marker_overlay(&self) -> Vec<CirclePrimitive> {
        self.hover
            .targets()
            .iter()
            .enumerate()
            .filter_map(|(i, target)| match target.shape {
                HitShape::Circle { cx, cy, radius } => Some(CirclePrimitive::new(
                    cx,
                    cy,
                    radius,
                    target
                        .payload
                        .series
                        .color()
                        .with_alpha(self.hover.marker_opacity(i)),
                )),
                HitShape::Rect { .. } => None,
            })
            .collect()
    }

    pub fn on_pointer_move(&mut self, px: f64, py: f64) {
        self.hover.on_pointer_move(px, py, trend_tooltip);
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        self.hover.tooltip()
    }

    /// Advances the tooltip fade.
    pub fn step(&mut self, delta_seconds: f64) {
        self.hover.step(delta_seconds);
    }
}
