pub mod bar_geometry;
pub mod breakpoints;
pub mod config;
pub mod gradient;
pub mod primitives;
pub mod types;

pub use bar_geometry::{BarGeometry, map_bar, row_center_y};
pub use breakpoints::{DEFAULT_PROFILE, LayoutProfile, PROFILES, resolve, resolve_for_rows};
pub use config::LayoutConfig;
pub use gradient::{
    Gradient, GradientCase, GradientStop, GradientStops, build_gradient, cutover_percent,
};
pub use types::DataPoint;
