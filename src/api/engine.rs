use tracing::{debug, trace};

use crate::core::primitives::ensure_drawing_width;
use crate::core::{DataPoint, LayoutConfig};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::layout_pass::layout_scene;
use super::scene::SceneModel;

/// Host-facing facade for one marker chart.
///
/// Holds the current rows, drawing width and config. Every trigger replaces
/// one of them wholesale; `layout` always recomputes the full scene.
pub struct MarkerChartEngine<R: Renderer> {
    renderer: R,
    config: LayoutConfig,
    width: f64,
    rows: Vec<DataPoint>,
}

impl<R: Renderer> MarkerChartEngine<R> {
    pub fn new(renderer: R, config: LayoutConfig, width: f64) -> ChartResult<Self> {
        let config = config.validate()?;
        let width = ensure_drawing_width(width)?;
        Ok(Self {
            renderer,
            config,
            width,
            rows: Vec::new(),
        })
    }

    #[must_use]
    pub fn rows(&self) -> &[DataPoint] {
        &self.rows
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replaces the dataset. Rows are checked before anything is stored.
    pub fn set_data(&mut self, rows: Vec<DataPoint>) -> ChartResult<()> {
        for row in &rows {
            row.validate()?;
        }
        debug!(
            previous = self.rows.len(),
            count = rows.len(),
            "replace marker chart data"
        );
        self.rows = rows;
        Ok(())
    }

    /// Applies a width-change notification.
    pub fn set_width(&mut self, width: f64) -> ChartResult<()> {
        self.width = ensure_drawing_width(width)?;
        trace!(width, "drawing width changed");
        Ok(())
    }

    pub fn set_config(&mut self, config: LayoutConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    pub fn layout(&self) -> ChartResult<SceneModel> {
        layout_scene(&self.rows, self.width, &self.config)
    }

    /// Lays out a fresh scene and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let scene = self.layout()?;
        self.renderer.render(&scene)
    }

    pub fn scene_json_pretty(&self) -> ChartResult<String> {
        self.layout()?.to_json_pretty()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
