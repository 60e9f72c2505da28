//! Stacked ASM/RPM/LF bar chart with a tri-state category filter.
//!
//! Each filter change is one atomic pass: re-aggregate, rescale LF into the
//! ASM+RPM unit, rebuild both scales, re-stack, then reconcile bar geometry
//! keyed by `(series, year)` into enter/update/exit sets. Hover targets are
//! rebound in the same pass, so pointer events never see stale bars.

use indexmap::IndexMap;

use crate::api::axis;
use crate::api::format::{format_grouped, format_magnitude, format_percent};
use crate::api::layout::ChartLayout;
use crate::core::aggregate::{
    aggregate_by_year, rescale_load_factor, FilterMode, ScaledGroup, YearGroup,
};
use crate::core::record::TrafficRecord;
use crate::core::stack::{stack_series, StackKey, StackedSeries, STACK_ORDER};
use crate::core::{BandScale, LinearScale};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HitShape, HoverController, HoverTarget, TooltipContent, TooltipState};
use crate::render::{Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

const BAR_PADDING: f64 = 0.2;
/// Duration of the enter/update bar transition.
pub const BAR_TRANSITION_SECONDS: f64 = 0.75;

fn series_fill(key: StackKey) -> Color {
    match key {
        StackKey::Asm => Color::from_rgb8(0xff, 0x99, 0x99),
        StackKey::Rpm => Color::from_rgb8(0x66, 0xff, 0x66),
        StackKey::LoadFactor => Color::from_rgb8(0x99, 0xcc, 0xff),
    }
}

/// Stable identity of one bar across filter changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BarId {
    pub series: StackKey,
    pub year: i32,
}

/// Committed pixel geometry of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarBounds {
    fn lerp(from: Self, to: Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            x: mix(from.x, to.x),
            y: mix(from.y, to.y),
            width: mix(from.width, to.width),
            height: mix(from.height, to.height),
        }
    }
}

/// One reconciled bar movement from the latest filter change.
///
/// Entering bars start at zero height on the baseline; updating bars tween
/// from their previous bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarTransition {
    pub id: BarId,
    pub from: BarBounds,
    pub to: BarBounds,
    pub entering: bool,
}

impl BarTransition {
    /// Geometry at `progress` in `[0, 1]` through the transition.
    #[must_use]
    pub fn bounds_at(self, progress: f64) -> BarBounds {
        BarBounds::lerp(self.from, self.to, progress.clamp(0.0, 1.0))
    }
}

/// Data behind one bar's tooltip. LF is carried in its rescaled form and
/// inverted back to a percentage at display time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPayload {
    pub id: BarId,
    pub asm: f64,
    pub rpm: f64,
    pub lf_scaled: f64,
}

fn bar_tooltip(payload: &BarPayload) -> TooltipContent {
    let value = match payload.id.series {
        StackKey::Asm => format_grouped(payload.asm),
        StackKey::Rpm => format_grouped(payload.rpm),
        StackKey::LoadFactor => {
            format_percent(payload.lf_scaled / (payload.asm + payload.rpm) * 100.0)
        }
    };
    TooltipContent::new(vec![
        format!("Year: {}", payload.id.year),
        format!("{}: {}", payload.id.series.label(), value),
    ])
}

/// The stacked bar chart. The only stateful renderer: it owns the current
/// filter mode and the committed bar geometry between filter changes.
#[derive(Debug)]
pub struct StackedBarChart<'a> {
    records: &'a [TrafficRecord],
    layout: ChartLayout,
    filter: FilterMode,
    groups: Vec<YearGroup>,
    scaled: Vec<ScaledGroup>,
    series: Vec<StackedSeries>,
    bars: IndexMap<BarId, BarBounds>,
    transitions: Vec<BarTransition>,
    removed: Vec<BarId>,
    tick_years: Vec<i32>,
    hover: HoverController<BarPayload>,
    frame: RenderFrame,
}

impl<'a> StackedBarChart<'a> {
    /// Builds the chart in its default Total mode.
    pub fn new(records: &'a [TrafficRecord], layout: ChartLayout) -> ChartResult<Self> {
        layout.validate()?;
        let mut chart = Self {
            records,
            layout,
            filter: FilterMode::Total,
            groups: Vec::new(),
            scaled: Vec::new(),
            series: Vec::new(),
            bars: IndexMap::new(),
            transitions: Vec::new(),
            removed: Vec::new(),
            tick_years: Vec::new(),
            hover: HoverController::default(),
            frame: RenderFrame::new(layout.viewport()),
        };
        chart.set_filter(FilterMode::Total)?;
        Ok(chart)
    }

    /// Applies a filter and rebuilds aggregates, scales, stack, geometry,
    /// and hover targets in one pass.
    pub fn set_filter(&mut self, mode: FilterMode) -> ChartResult<()> {
        let groups = aggregate_by_year(self.records, mode)?;
        let scaled = rescale_load_factor(&groups);

        let inner_w = self.layout.inner_width();
        let inner_h = self.layout.inner_height();
        let years: Vec<i32> = scaled.iter().map(|g| g.year).collect();
        let x = BandScale::new(years.clone(), (0.0, inner_w), BAR_PADDING)?;
        let y = LinearScale::y_axis_from_max(
            scaled.iter().map(|g| g.asm + g.rpm + g.lf_scaled),
            inner_h,
        )?;
        let series = stack_series(&STACK_ORDER, &scaled);

        let baseline = y.to_pixel(0.0)?;
        let mut next: IndexMap<BarId, BarBounds> = IndexMap::new();
        for stacked in &series {
            for band in &stacked.bands {
                let bar_x = x.position(&band.year).ok_or_else(|| {
                    ChartError::InvalidData(format!(
                        "year {} missing from band domain",
                        band.year
                    ))
                })?;
                let top = y.to_pixel(band.upper)?;
                let bottom = y.to_pixel(band.lower)?;
                next.insert(
                    BarId {
                        series: stacked.key,
                        year: band.year,
                    },
                    BarBounds {
                        x: bar_x,
                        y: top,
                        width: x.bandwidth(),
                        height: bottom - top,
                    },
                );
            }
        }

        let mut transitions = Vec::with_capacity(next.len());
        for (&id, &to) in &next {
            match self.bars.get(&id) {
                Some(&from) => transitions.push(BarTransition {
                    id,
                    from,
                    to,
                    entering: false,
                }),
                None => transitions.push(BarTransition {
                    id,
                    from: BarBounds {
                        x: to.x,
                        y: baseline,
                        width: to.width,
                        height: 0.0,
                    },
                    to,
                    entering: true,
                }),
            }
        }
        let removed: Vec<BarId> = self
            .bars
            .keys()
            .filter(|id| !next.contains_key(*id))
            .copied()
            .collect();

        // Display-density policy: label one year per 5-year interval.
        let tick_years: Vec<i32> = years.iter().copied().filter(|y| y.rem_euclid(5) == 3).collect();

        let mut frame = RenderFrame::new(self.layout.viewport());
        frame.push_text(TextPrimitive::new(
            format!("Filter: {}", mode.label()),
            10.0,
            6.0,
            16.0,
            Color::rgb(0.0, 0.0, 0.0),
            TextHAlign::Left,
        ));
        axis::bottom_axis_line(&mut frame, self.layout);
        axis::left_axis_line(&mut frame, self.layout);
        axis::bottom_band_ticks(&mut frame, &x, self.layout, |year| {
            tick_years.contains(year).then(|| year.to_string())
        });
        axis::left_linear_ticks(&mut frame, &y, 10, format_magnitude)?;
        axis::y_axis_title(&mut frame, self.layout, "ASM / RPM / LF");
        axis::x_axis_title(&mut frame, self.layout, "Year");

        let mut targets = Vec::with_capacity(next.len());
        let by_year: IndexMap<i32, &ScaledGroup> =
            scaled.iter().map(|g| (g.year, g)).collect();
        for (&id, &bounds) in &next {
            frame.push_rect(RectPrimitive::new(
                bounds.x,
                bounds.y,
                bounds.width,
                bounds.height,
                series_fill(id.series),
            ));
            let group = by_year.get(&id.year).ok_or_else(|| {
                ChartError::InvalidData(format!("no aggregated group for year {}", id.year))
            })?;
            targets.push(HoverTarget {
                shape: HitShape::Rect {
                    x: bounds.x,
                    y: bounds.y,
                    width: bounds.width,
                    height: bounds.height,
                },
                payload: BarPayload {
                    id,
                    asm: group.asm,
                    rpm: group.rpm,
                    lf_scaled: group.lf_scaled,
                },
            });
        }
        frame.validate()?;

        tracing::debug!(
            mode = mode.label(),
            bars = next.len(),
            entering = transitions.iter().filter(|t| t.entering).count(),
            removed = removed.len(),
            "stacked bar reconciled"
        );

        self.filter = mode;
        self.groups = groups;
        self.scaled = scaled;
        self.series = series;
        self.bars = next;
        self.transitions = transitions;
        self.removed = removed;
        self.tick_years = tick_years;
        self.frame = frame;
        self.hover.rebuild(targets);
        Ok(())
    }

    #[must_use]
    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    #[must_use]
    pub fn groups(&self) -> &[YearGroup] {
        &self.groups
    }

    #[must_use]
    pub fn scaled_groups(&self) -> &[ScaledGroup] {
        &self.scaled
    }

    #[must_use]
    pub fn stacked_series(&self) -> &[StackedSeries] {
        &self.series
    }

    #[must_use]
    pub fn bars(&self) -> &IndexMap<BarId, BarBounds> {
        &self.bars
    }

    /// Transitions produced by the latest filter change.
    #[must_use]
    pub fn transitions(&self) -> &[BarTransition] {
        &self.transitions
    }

    /// Bars deleted by the latest filter change.
    #[must_use]
    pub fn removed(&self) -> &[BarId] {
        &self.removed
    }

    #[must_use]
    pub fn tick_years(&self) -> &[i32] {
        &self.tick_years
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn hover(&self) -> &HoverController<BarPayload> {
        &self.hover
    }

    pub fn on_pointer_move(&mut self, px: f64, py: f64) {
        self.hover.on_pointer_move(px, py, bar_tooltip);
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
