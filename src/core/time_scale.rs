use chrono::{Datelike, NaiveDate};

use crate::core::record::TrafficRecord;
use crate::error::{ChartError, ChartResult};

/// Month-resolution temporal scale for the trend chart x-axis.
///
/// Dates map affinely through a month index (`year * 12 + month - 1`), so a
/// calendar month is the smallest addressable unit and spacing between
/// consecutive months is uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemporalScale {
    domain: (NaiveDate, NaiveDate),
    range: (f64, f64),
}

fn month_index(date: NaiveDate) -> f64 {
    f64::from(date.year() * 12 + date.month0() as i32)
}

impl TemporalScale {
    pub fn new(start: NaiveDate, end: NaiveDate, range: (f64, f64)) -> ChartResult<Self> {
        if start >= end {
            return Err(ChartError::InvalidData(
                "temporal domain must span at least two months".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "temporal range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain: (start, end),
            range,
        })
    }

    /// Fits the domain to `[min date, max date]` over the records.
    ///
    /// Fails fast on an empty dataset instead of producing a degenerate scale.
    pub fn from_records(records: &[TrafficRecord], width: f64) -> ChartResult<Self> {
        let first = records.first().ok_or(ChartError::EmptyDataset)?;
        let mut min = first.date;
        let mut max = first.date;
        for record in records {
            min = min.min(record.date);
            max = max.max(record.date);
        }
        Self::new(min, max, (0.0, width))
    }

    #[must_use]
    pub fn domain(self) -> (NaiveDate, NaiveDate) {
        self.domain
    }

    pub fn to_pixel(self, date: NaiveDate) -> ChartResult<f64> {
        let start = month_index(self.domain.0);
        let end = month_index(self.domain.1);
        let t = (month_index(date) - start) / (end - start);
        if !t.is_finite() {
            return Err(ChartError::InvalidData(
                "temporal mapping produced a non-finite position".to_owned(),
            ));
        }
        Ok(self.range.0 + t * (self.range.1 - self.range.0))
    }

    /// Years whose January falls inside the domain, for axis labeling.
    #[must_use]
    pub fn tick_years(self) -> Vec<i32> {
        let mut years = Vec::new();
        let mut year = self.domain.0.year();
        if self.domain.0.month() > 1 {
            year += 1;
        }
        while year <= self.domain.1.year() {
            years.push(year);
            year += 1;
        }
        years
    }
}
