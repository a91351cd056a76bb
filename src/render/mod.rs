mod frame;
mod frame_renderer;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use frame_renderer::FrameRenderer;
pub use null_renderer::NullRenderer;
pub use primitives::{CirclePrimitive, Color, LinePrimitive};

use crate::core::{ContentArea, LineChartData, Viewport};
use crate::error::ChartResult;
use crate::interaction::SelectedValue;

/// Read-only view of the session handed to a renderer for one pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub viewport: Viewport,
    pub content_area: ContentArea,
    pub data: &'a LineChartData,
    pub selection: Option<SelectedValue>,
}

/// Contract implemented by the drawing collaborator.
///
/// The engine decides when to draw and supplies geometry; the renderer owns
/// everything about how pixels are produced on its `Surface`.
pub trait ChartRenderer {
    type Surface: ?Sized;

    /// Recomputes size-derived attributes such as stroke and marker sizes.
    fn init_data_attributes(&mut self, content_area: ContentArea, data: &LineChartData);

    /// Draws series content. The backend clips it to `context.content_area`.
    fn draw(&mut self, surface: &mut Self::Surface, context: &RenderContext<'_>)
    -> ChartResult<()>;

    /// Draws overlays, such as the selection halo, that must not be clipped.
    fn draw_unclipped(
        &mut self,
        surface: &mut Self::Surface,
        context: &RenderContext<'_>,
    ) -> ChartResult<()>;
}
