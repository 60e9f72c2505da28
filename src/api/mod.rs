pub mod annotation;
pub mod axis;
pub mod dashboard;
pub mod format;
pub mod heatmap;
pub mod layout;
pub mod legend;
pub mod navigator;
pub mod stacked_bar;
pub mod trend;

pub use annotation::{Annotation, TREND_ANNOTATIONS};
pub use dashboard::Dashboard;
pub use heatmap::{HeatmapChart, HeatmapPayload};
pub use layout::{ChartLayout, Margins};
pub use navigator::{NavigationOutcome, SlideNavigator};
pub use stacked_bar::{BarBounds, BarId, BarTransition, StackedBarChart, BAR_TRANSITION_SECONDS};
pub use trend::{TrendChart, TrendSeriesKind};
