pub mod aggregate;
pub mod band_scale;
pub mod color_scale;
pub mod record;
pub mod scale;
pub mod stack;
pub mod time_scale;
pub mod types;

pub use aggregate::{FilterMode, ScaledGroup, YearGroup};
pub use band_scale::BandScale;
pub use color_scale::SequentialColorScale;
pub use record::TrafficRecord;
pub use scale::LinearScale;
pub use stack::{StackKey, StackedBand, StackedSeries};
pub use time_scale::TemporalScale;
pub use types::Viewport;
