mod null_renderer;
mod svg_renderer;

pub use null_renderer::NullRenderer;
pub use svg_renderer::SvgRenderer;

use crate::api::SceneModel;
use crate::error::ChartResult;

/// Contract implemented by any rendering surface.
///
/// Renderers receive a fully materialized `SceneModel` so painting code stays
/// isolated from breakpoint, geometry and gradient logic.
pub trait Renderer {
    fn render(&mut self, scene: &SceneModel) -> ChartResult<()>;
}
