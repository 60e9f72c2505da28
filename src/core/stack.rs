//! Cumulative band layering for the stacked bar chart.

use serde::{Deserialize, Serialize};

use crate::core::aggregate::ScaledGroup;

/// A stackable metric series. Declared order determines which series sits
/// nearer the baseline; bands are never reordered by magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackKey {
    Asm,
    Rpm,
    LoadFactor,
}

impl StackKey {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Asm => "ASM",
            Self::Rpm => "RPM",
            Self::LoadFactor => "LF",
        }
    }

    fn value(self, group: &ScaledGroup) -> f64 {
        match self {
            Self::Asm => group.asm,
            Self::Rpm => group.rpm,
            Self::LoadFactor => group.lf_scaled,
        }
    }
}

/// Baseline-first stacking order used by the stacked bar chart.
pub const STACK_ORDER: [StackKey; 3] = [StackKey::Asm, StackKey::Rpm, StackKey::LoadFactor];

/// One `[lower, upper)` interval for one group within one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackedBand {
    pub year: i32,
    pub lower: f64,
    pub upper: f64,
}

/// All bands of one series, ordered by group.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedSeries {
    pub key: StackKey,
    pub bands: Vec<StackedBand>,
}

/// Stacks groups into contiguous, non-overlapping bands per series key.
///
/// For every group the first key's lower bound is 0 and the last key's upper
/// bound equals the sum of all key values. Re-invocation over the same input
/// is deterministic; a changed group set requires a full recompute, and the
/// consumer reconciles by `(key, year)`, never by position.
#[must_use]
pub fn stack_series(keys: &[StackKey], groups: &[ScaledGroup]) -> Vec<StackedSeries> {
    let mut cumulative = vec![0.0_f64; groups.len()];
    keys.iter()
        .map(|&key| {
            let bands = groups
                .iter()
                .zip(cumulative.iter_mut())
                .map(|(group, lower)| {
                    let band = StackedBand {
                        year: group.year,
                        lower: *lower,
                        upper: *lower + key.value(group),
                    };
                    *lower = band.upper;
                    band
                })
                .collect();
            StackedSeries { key, bands }
        })
        .collect()
}
