mod engine;
mod heading_layout;
mod label_format;
mod layout_pass;
mod marker_positioner;
mod scene;

pub use engine::MarkerChartEngine;
pub use heading_layout::layout_headings;
pub use label_format::{format_minutes, format_value, label_text};
pub use layout_pass::layout_scene;
pub use marker_positioner::{
    ACHIEVED_LABEL_GAP_PX, LabelPositions, TARGET_LABEL_COLOR, position_labels, position_marker,
};
pub use scene::{
    HeadingKind, HeadingScene, LabelScene, MarkerLine, RowScene, SceneModel, TextAnchor,
};

pub use crate::core::LayoutConfig;
