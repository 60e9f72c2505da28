use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};

/// Discrete band scale over an ordered list of categories.
///
/// Uniform padding is applied between bands and at both ends (inner padding
/// equals outer padding), following the conventional band layout:
/// `step = extent / (n + padding)`, `bandwidth = step * (1 - padding)`.
/// A reversed range (`range.0 > range.1`) places the first category nearest
/// the low pixel end, which is how the heatmap month axis grows upward.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<K>
where
    K: Eq + Hash + Clone,
{
    index: IndexMap<K, usize>,
    range: (f64, f64),
    padding: f64,
}

impl<K> BandScale<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new(domain: Vec<K>, range: (f64, f64), padding: f64) -> ChartResult<Self> {
        if domain.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band scale padding must be in [0, 1)".to_owned(),
            ));
        }

        let mut index = IndexMap::with_capacity(domain.len());
        for key in domain {
            let next = index.len();
            if index.insert(key, next).is_some() {
                return Err(ChartError::InvalidData(
                    "band scale domain must not contain duplicate categories".to_owned(),
                ));
            }
        }

        Ok(Self {
            index,
            range,
            padding,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Domain categories in declared order.
    pub fn domain(&self) -> impl Iterator<Item = &K> {
        self.index.keys()
    }

    fn extent(&self) -> f64 {
        (self.range.1 - self.range.0).abs()
    }

    fn step(&self) -> f64 {
        self.extent() / (self.index.len() as f64 + self.padding)
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Pixel position of the leading edge of the category's band.
    ///
    /// Returns `None` for a category outside the domain.
    #[must_use]
    pub fn position(&self, key: &K) -> Option<f64> {
        let i = *self.index.get(key)?;
        let step = self.step();
        let low = self.range.0.min(self.range.1);
        let slot = if self.range.0 <= self.range.1 {
            i
        } else {
            self.index.len() - 1 - i
        };
        Some(low + step * (self.padding + slot as f64))
    }
}
