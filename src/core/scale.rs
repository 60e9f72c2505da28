use crate::error::{ChartError, ChartResult};

/// Linear mapping from a continuous domain to a pixel range.
///
/// Chart y-axes use an inverted range (`[height, 0]`) so larger values plot
/// higher. The mapping is pure: the same domain/range pair always yields the
/// same output for the same input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite()
            || !domain.1.is_finite()
            || !range.0.is_finite()
            || !range.1.is_finite()
        {
            return Err(ChartError::InvalidData(
                "scale domain and range must be finite".to_owned(),
            ));
        }
        if domain.0 == domain.1 {
            return Err(ChartError::InvalidData(
                "scale domain must span a non-zero interval".to_owned(),
            ));
        }

        Ok(Self { domain, range })
    }

    /// Builds the standard chart y-scale: domain `[0, max]`, range `[height, 0]`.
    pub fn y_axis(max: f64, height: f64) -> ChartResult<Self> {
        Self::new((0.0, max), (height, 0.0))
    }

    /// Builds a y-scale whose domain covers the maximum of `values`.
    ///
    /// Fails fast on an empty iterator rather than producing a degenerate scale.
    pub fn y_axis_from_max<I>(values: I, height: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut max: Option<f64> = None;
        for value in values {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "scale domain values must be finite".to_owned(),
                ));
            }
            max = Some(max.map_or(value, |m: f64| m.max(value)));
        }
        let max = max.ok_or(ChartError::EmptyDataset)?;
        Self::y_axis(max, height)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.range
    }

    pub fn to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        let t = (value - self.domain.0) / (self.domain.1 - self.domain.0);
        Ok(self.range.0 + t * (self.range.1 - self.range.0))
    }

    pub fn from_pixel(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let span = self.range.1 - self.range.0;
        if span == 0.0 {
            return Err(ChartError::InvalidData(
                "scale range must span a non-zero interval".to_owned(),
            ));
        }
        let t = (pixel - self.range.0) / span;
        Ok(self.domain.0 + t * (self.domain.1 - self.domain.0))
    }

    /// Evenly spaced tick values across the domain, endpoints included.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.domain.0];
        }
        let step = (self.domain.1 - self.domain.0) / (count - 1) as f64;
        (0..count).map(|i| self.domain.0 + step * i as f64).collect()
    }
}
