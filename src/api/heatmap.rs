//! Year-by-month heatmap of total passengers.

use crate::api::axis;
use crate::api::format::{format_grouped, month_name};
use crate::api::layout::ChartLayout;
use crate::api::legend;
use crate::core::record::TrafficRecord;
use crate::core::{BandScale, SequentialColorScale};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HitShape, HoverController, HoverTarget, TooltipContent, TooltipState};
use crate::render::{RectPrimitive, RenderFrame};

const CELL_PADDING: f64 = 0.05;

/// Data behind one heatmap cell's tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapPayload {
    pub year: i32,
    pub month: u32,
    pub passengers: f64,
}

fn heatmap_tooltip(payload: &HeatmapPayload) -> TooltipContent {
    TooltipContent::new(vec![
        format!("Year: {}", payload.year),
        format!("Month: {}", month_name(payload.month)),
        format!("Passengers: {}", format_grouped(payload.passengers)),
    ])
}

/// The heatmap chart: banded year x banded month grid, one cell per record,
/// colored by the sequential passenger scale.
#[derive(Debug)]
pub struct HeatmapChart {
    layout: ChartLayout,
    frame: RenderFrame,
    hover: HoverController<HeatmapPayload>,
    color: SequentialColorScale,
}

impl HeatmapChart {
    pub fn build(records: &[TrafficRecord], layout: ChartLayout) -> ChartResult<Self> {
        layout.validate()?;
        let inner_w = layout.inner_width();
        let inner_h = layout.inner_height();

        // Records arrive sorted by date, so first-appearance order is
        // ascending years.
        let mut years: Vec<i32> = Vec::new();
        for record in records {
            if !years.contains(&record.year) {
                years.push(record.year);
            }
        }

        let months: Vec<u32> = (1..=12).collect();
        let x = BandScale::new(years, (0.0, inner_w), CELL_PADDING)?;
        let y = BandScale::new(months, (inner_h, 0.0), CELL_PADDING)?;
        let color = SequentialColorScale::from_max(records.iter().map(|r| r.pax))?;

        let mut frame = RenderFrame::new(layout.viewport());
        let mut targets = Vec::with_capacity(records.len());
        for record in records {
            let cell_x = x.position(&record.year).ok_or_else(|| {
                ChartError::InvalidData(format!("year {} missing from band domain", record.year))
            })?;
            let cell_y = y.position(&record.month).ok_or_else(|| {
                ChartError::InvalidData(format!("month {} outside 1-12", record.month))
            })?;

            frame.push_rect(RectPrimitive::new(
                cell_x,
                cell_y,
                x.bandwidth(),
                y.bandwidth(),
                color.color_for(record.pax)?,
            ));
            targets.push(HoverTarget {
                shape: HitShape::Rect {
                    x: cell_x,
                    y: cell_y,
                    width: x.bandwidth(),
                    height: y.bandwidth(),
                },
                payload: HeatmapPayload {
                    year: record.year,
                    month: record.month,
                    passengers: record.pax,
                },
            });
        }

        axis::bottom_axis_line(&mut frame, layout);
        axis::left_axis_line(&mut frame, layout);
        axis::bottom_band_ticks(&mut frame, &x, layout, |year| Some(year.to_string()));
        axis::left_band_ticks(&mut frame, &y, |month| month_name(*month).to_owned());
        legend::gradient_legend(&mut frame, layout);
        frame.validate()?;

        let mut hover = HoverController::default();
        hover.rebuild(targets);

        tracing::debug!(cells = records.len(), "heatmap chart built");
        Ok(Self {
            layout,
            frame,
            hover,
            color,
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
    pub fn color_scale(&self) -> SequentialColorScale {
        self.color
    }

    #[must_use]
    pub fn hover(&self) -> &HoverController<HeatmapPayload> {
        &self.hover
    }

    pub fn on_pointer_move(&mut self, px: f64, py: f64) {
        self.hover.on_pointer_move(px, py, heatmap_tooltip);
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
