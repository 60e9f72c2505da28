//! Top-level load step: ingest the CSV once, own the records, build charts.

use crate::api::heatmap::HeatmapChart;
use crate::api::layout::ChartLayout;
use crate::api::stacked_bar::StackedBarChart;
use crate::api::trend::TrendChart;
use crate::core::record::{load_records, TrafficRecord};
use crate::error::ChartResult;

/// Owns the immutable traffic records for the lifetime of the page.
///
/// Ingestion is the only suspending step in a host; everything here is
/// synchronous over fully loaded text. Any ingestion or schema failure is
/// terminal: no chart is built from empty or partial data.
#[derive(Debug)]
pub struct Dashboard {
    records: Vec<TrafficRecord>,
}

impl Dashboard {
    /// Parses the raw CSV text into sorted records, batch-fatally.
    pub fn build(csv_text: &str) -> ChartResult<Self> {
        let records = load_records(csv_text)?;
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[TrafficRecord] {
        &self.records
    }

    /// Constructs the three charts in sequence over the shared records.
    ///
    /// Charts never mutate the records and hold no state in common, so
    /// construction order is irrelevant to correctness; sequence is purely
    /// the presentation order of the mount points.
    pub fn charts(
        &self,
    ) -> ChartResult<(TrendChart, HeatmapChart, StackedBarChart<'_>)> {
        let trend = TrendChart::build(&self.records, ChartLayout::trend())?;
        let heatmap = HeatmapChart::build(&self.records, ChartLayout::heatmap())?;
        let stacked = StackedBarChart::new(&self.records, ChartLayout::stacked_bar())?;
        Ok((trend, heatmap, stacked))
    }
}
