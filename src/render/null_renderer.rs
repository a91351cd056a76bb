use crate::core::{ContentArea, LineChartData};
use crate::error::ChartResult;
use crate::render::{ChartRenderer, RenderContext};

/// No-op renderer used by tests and headless engine usage.
///
/// It records what it was asked to do so tests can assert on draw
/// scheduling without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub init_count: usize,
    pub draw_count: usize,
    pub unclipped_draw_count: usize,
    pub last_content_area: Option<ContentArea>,
    pub last_point_count: usize,
}

impl ChartRenderer for NullRenderer {
    type Surface = ();

    fn init_data_attributes(&mut self, content_area: ContentArea, data: &LineChartData) {
        self.init_count += 1;
        self.last_content_area = Some(content_area);
        self.last_point_count = data.point_count();
    }

    fn draw(&mut self, _surface: &mut (), context: &RenderContext<'_>) -> ChartResult<()> {
        self.draw_count += 1;
        self.last_point_count = context.data.point_count();
        Ok(())
    }

    fn draw_unclipped(&mut self, _surface: &mut (), _context: &RenderContext<'_>) -> ChartResult<()> {
        self.unclipped_draw_count += 1;
        Ok(())
    }
}
