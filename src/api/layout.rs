use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Outer margins around the chart plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Margins shared by all three charts.
pub const CHART_MARGINS: Margins = Margins {
    top: 20.0,
    right: 20.0,
    bottom: 50.0,
    left: 90.0,
};

/// Outer surface size plus margins; the plot area is the remainder.
///
/// Frame coordinates are relative to the plot-area origin (inside the
/// top/left margins), so legends and axis labels placed in the margins use
/// negative or larger-than-inner coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl ChartLayout {
    /// Trend chart surface: 1100x500.
    #[must_use]
    pub fn trend() -> Self {
        Self {
            width: 1100.0,
            height: 500.0,
            margins: CHART_MARGINS,
        }
    }

    /// Heatmap surface: 1000x500.
    #[must_use]
    pub fn heatmap() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            margins: CHART_MARGINS,
        }
    }

    /// Stacked bar surface: 1000x500.
    #[must_use]
    pub fn stacked_bar() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            margins: CHART_MARGINS,
        }
    }

    #[must_use]
    pub fn inner_width(self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    #[must_use]
    pub fn inner_height(self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        Viewport::new(self.width as u32, self.height as u32)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.inner_width() <= 0.0
            || self.inner_height() <= 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: self.width as u32,
                height: self.height as u32,
            });
        }
        Ok(())
    }
}
