use crate::api::SceneModel;
use crate::error::ChartResult;
use crate::render::Renderer;

/// No-op renderer used by tests and headless layout.
///
/// It still validates the scene so tests catch broken geometry before a
/// real surface sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_row_count: usize,
    pub last_heading_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &SceneModel) -> ChartResult<()> {
        scene.validate()?;
        self.last_row_count = scene.rows.len();
        self.last_heading_count = scene.headings.len();
        self.render_count += 1;
        Ok(())
    }
}
