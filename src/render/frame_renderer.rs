use crate::core::{ContentArea, LineChartData, data_to_pixel, project_line_segments};
use crate::error::ChartResult;
use crate::render::{
    ChartRenderer, CirclePrimitive, Color, LinePrimitive, RenderContext, RenderFrame,
};

const PALETTE: [Color; 5] = [
    Color::rgb(0.20, 0.71, 0.90),
    Color::rgb(0.67, 0.40, 0.80),
    Color::rgb(0.60, 0.80, 0.00),
    Color::rgb(1.00, 0.73, 0.20),
    Color::rgb(1.00, 0.27, 0.27),
];

const MIN_MARKER_RADIUS_PX: f64 = 2.0;
const MAX_MARKER_RADIUS_PX: f64 = 8.0;
const HALO_ALPHA: f64 = 0.35;

/// Renderer that materializes each pass into a [`RenderFrame`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRenderer {
    stroke_width: f64,
    marker_radius: f64,
    halo_radius: f64,
    markers_visible: bool,
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            marker_radius: 4.0,
            halo_radius: 10.0,
            markers_visible: true,
        }
    }
}

impl FrameRenderer {
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    #[must_use]
    pub fn marker_radius(&self) -> f64 {
        self.marker_radius
    }

    #[must_use]
    pub fn halo_radius(&self) -> f64 {
        self.halo_radius
    }

    #[must_use]
    pub fn markers_visible(&self) -> bool {
        self.markers_visible
    }

    fn line_color(line_index: usize) -> Color {
        PALETTE[line_index % PALETTE.len()]
    }
}

impl ChartRenderer for FrameRenderer {
    type Surface = RenderFrame;

    fn init_data_attributes(&mut self, content_area: ContentArea, data: &LineChartData) {
        let base = content_area.width().min(content_area.height());
        if base.is_nan() || base <= 0.0 {
            return;
        }
        self.marker_radius = (base * 0.012).clamp(MIN_MARKER_RADIUS_PX, MAX_MARKER_RADIUS_PX);
        self.stroke_width = (self.marker_radius * 0.5).max(1.0);
        self.halo_radius = self.marker_radius * 2.5;

        // Markers are dropped once they would overlap along the densest line.
        let densest = data.lines.iter().map(|line| line.points.len()).max().unwrap_or(0);
        self.markers_visible = densest < 2
            || content_area.width() / (densest - 1) as f64 >= self.marker_radius * 2.0;
    }

    fn draw(&mut self, surface: &mut RenderFrame, context: &RenderContext<'_>) -> ChartResult<()> {
        surface.reset(context.content_area);

        for (line_index, line) in context.data.lines.iter().enumerate() {
            let color = Self::line_color(line_index);
            for segment in project_line_segments(&line.points, context.viewport, context.content_area)? {
                surface.lines.push(LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    self.stroke_width,
                    color,
                ));
            }
            if !self.markers_visible {
                continue;
            }
            for point in &line.points {
                let pixel = data_to_pixel(context.viewport, context.content_area, point.current())?;
                surface
                    .markers
                    .push(CirclePrimitive::new(pixel.x, pixel.y, self.marker_radius, color));
            }
        }

        surface.validate()
    }

    fn draw_unclipped(
        &mut self,
        surface: &mut RenderFrame,
        context: &RenderContext<'_>,
    ) -> ChartResult<()> {
        surface.overlay.clear();
        let Some(selected) = context.selection else {
            return Ok(());
        };
        let Some(point) = context.data.point(selected.line_index, selected.point_index) else {
            return Ok(());
        };

        let color = Self::line_color(selected.line_index);
        let pixel = data_to_pixel(context.viewport, context.content_area, point.current())?;
        let marker = CirclePrimitive::new(pixel.x, pixel.y, self.marker_radius, color);
        surface
            .overlay
            .push(CirclePrimitive::new(pixel.x, pixel.y, self.halo_radius, color).faded(HALO_ALPHA));
        surface.overlay.push(marker);
        surface.validate()
    }
}
