//! Sequential diverging color scale for the heatmap.

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// RdYlBu diverging ramp control points, hot (dark red) to cold (dark blue).
const RD_YL_BU: [(u8, u8, u8); 11] = [
    (0xa5, 0x00, 0x26),
    (0xd7, 0x30, 0x27),
    (0xf4, 0x6d, 0x43),
    (0xfd, 0xae, 0x61),
    (0xfe, 0xe0, 0x90),
    (0xff, 0xff, 0xbf),
    (0xe0, 0xf3, 0xf8),
    (0xab, 0xd9, 0xe9),
    (0x74, 0xad, 0xd1),
    (0x45, 0x75, 0xb4),
    (0x31, 0x36, 0x95),
];

/// Maps a numeric value to a color on the RdYlBu ramp.
///
/// The heatmap constructs this with a deliberately reversed domain
/// `[max, 0]`, so the largest value lands at ramp position 0, the hot end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialColorScale {
    domain: (f64, f64),
}

impl SequentialColorScale {
    pub fn new(domain: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 == domain.1 {
            return Err(ChartError::InvalidData(
                "color scale domain must be finite and span a non-zero interval".to_owned(),
            ));
        }
        Ok(Self { domain })
    }

    /// Builds the heatmap scale over total passengers: domain `[max, 0]`.
    pub fn from_max(values: impl IntoIterator<Item = f64>) -> ChartResult<Self> {
        let mut max: Option<f64> = None;
        for value in values {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "color scale values must be finite".to_owned(),
                ));
            }
            max = Some(max.map_or(value, |m: f64| m.max(value)));
        }
        let max = max.ok_or(ChartError::EmptyDataset)?;
        Self::new((max, 0.0))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.domain
    }

    /// Interpolated ramp color at position `t` in `[0, 1]`.
    #[must_use]
    pub fn ramp(t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let scaled = t * (RD_YL_BU.len() - 1) as f64;
        let lower = scaled.floor() as usize;
        let upper = (lower + 1).min(RD_YL_BU.len() - 1);
        let frac = scaled - lower as f64;

        let (r0, g0, b0) = RD_YL_BU[lower];
        let (r1, g1, b1) = RD_YL_BU[upper];
        let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac) / 255.0;
        Color::rgb(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }

    pub fn color_for(self, value: f64) -> ChartResult<Color> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "color scale input must be finite".to_owned(),
            ));
        }
        let t = (value - self.domain.0) / (self.domain.1 - self.domain.0);
        Ok(Self::ramp(t))
    }

    /// Color at ramp position 0. With a `[max, 0]` domain this is what the
    /// maximum value maps to.
    #[must_use]
    pub fn hot() -> Color {
        Self::ramp(0.0)
    }

    /// Color at ramp position 1 (the zero end of a `[max, 0]` domain).
    #[must_use]
    pub fn cold() -> Color {
        Self::ramp(1.0)
    }
}
