//! Per-year aggregation of traffic records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::record::TrafficRecord;
use crate::error::{ChartError, ChartResult};

/// Selects which ASM/RPM/LF triplet an aggregation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    Total,
    Domestic,
    International,
}

impl FilterMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Domestic => "Domestic",
            Self::International => "International",
        }
    }

    fn select(self, record: &TrafficRecord) -> (f64, f64, f64) {
        match self {
            Self::Total => (record.asm, record.rpm, record.lf),
            Self::Domestic => (record.dom_asm, record.dom_rpm, record.dom_lf),
            Self::International => (record.int_asm, record.int_rpm, record.int_lf),
        }
    }
}

/// One aggregated group per distinct year: ASM/RPM summed, LF averaged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearGroup {
    pub year: i32,
    pub asm: f64,
    pub rpm: f64,
    pub lf: f64,
}

/// A year group after the stacked-bar load-factor rescale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledGroup {
    pub year: i32,
    pub asm: f64,
    pub rpm: f64,
    pub lf_scaled: f64,
}

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    asm: f64,
    rpm: f64,
    lf_sum: f64,
    months: u32,
}

/// Groups records by year, in ascending year order.
///
/// Accumulation goes through a `BTreeMap`, so the group set and its order do
/// not depend on row-arrival order; permuting rows perturbs the sums only
/// within floating-point tolerance.
pub fn aggregate_by_year(
    records: &[TrafficRecord],
    mode: FilterMode,
) -> ChartResult<Vec<YearGroup>> {
    if records.is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    let mut years: BTreeMap<i32, Accumulator> = BTreeMap::new();
    for record in records {
        let (asm, rpm, lf) = mode.select(record);
        let acc = years.entry(record.year).or_default();
        acc.asm += asm;
        acc.rpm += rpm;
        acc.lf_sum += lf;
        acc.months += 1;
    }

    let groups = years
        .into_iter()
        .map(|(year, acc)| YearGroup {
            year,
            asm: acc.asm,
            rpm: acc.rpm,
            lf: acc.lf_sum / f64::from(acc.months),
        })
        .collect::<Vec<_>>();

    tracing::debug!(mode = mode.label(), groups = groups.len(), "aggregated by year");
    Ok(groups)
}

/// Rescales LF from its 0-100 percentage unit into the ASM+RPM magnitude:
/// `lf_scaled = lf / 100 * (asm + rpm)`.
///
/// This is the stacked-bar unit-normalization policy. The LF band then
/// occupies a height proportional to the combined capacity/demand magnitude
/// instead of its own incompatible unit. [`display_load_factor`] inverts it
/// for tooltip display.
#[must_use]
pub fn rescale_load_factor(groups: &[YearGroup]) -> Vec<ScaledGroup> {
    groups
        .iter()
        .map(|g| ScaledGroup {
            year: g.year,
            asm: g.asm,
            rpm: g.rpm,
            lf_scaled: g.lf / 100.0 * (g.asm + g.rpm),
        })
        .collect()
}

/// Recovers the original LF percentage from a rescaled group.
#[must_use]
pub fn display_load_factor(group: &ScaledGroup) -> f64 {
    group.lf_scaled / (group.asm + group.rpm) * 100.0
}
