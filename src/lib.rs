//! traffic-charts: data-to-visual-encoding pipeline for the US air-traffic dataset.
//!
//! This crate keeps a strict split between pure data transforms (record
//! parsing, scales, aggregation, stacking) and the chart builders that turn
//! their outputs into backend-agnostic render frames. Rendering backends
//! consume fully materialized frames and never touch chart domain logic.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartLayout, Dashboard};
pub use error::{ChartError, ChartResult};
