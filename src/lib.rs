//! marker-chart-rs: responsive geometry and gradient engine for
//! achieved-vs-target marker bar charts.
//!
//! The crate turns a dataset, a drawing width and a layout config into an
//! immutable `SceneModel`. Painting that scene is left to a `Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{MarkerChartEngine, SceneModel, layout_scene};
pub use crate::core::{DataPoint, LayoutConfig};
pub use error::{ChartError, ChartResult};
