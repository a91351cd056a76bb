use tracing::{debug, trace, warn};

use crate::animation::{ChartAnimationListener, DataAnimator};
use crate::core::{ContentArea, LineChartData, Padding, ViewportCalculator};
use crate::error::ChartResult;
use crate::interaction::{GestureHandler, SelectedValue};
use crate::render::{ChartRenderer, RenderContext};

use super::{
    ChartEngineConfig, InvalidationMask, InvalidationTopic, RedrawHost, ValueSelectListener,
};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` is one chart session. It exclusively owns the dataset, both
/// viewports, and the selection, and lends them to the gesture handler and
/// animator for the duration of a single host call.
pub struct ChartEngine<R: ChartRenderer> {
    pub(super) renderer: R,
    pub(super) calculator: ViewportCalculator,
    pub(super) data: LineChartData,
    pub(super) selection: Option<SelectedValue>,
    pub(super) gestures: GestureHandler,
    pub(super) animator: DataAnimator,
    pub(super) value_listener: Option<Box<dyn ValueSelectListener>>,
    pub(super) animation_listener: Option<Box<dyn ChartAnimationListener>>,
    pub(super) redraw_host: Option<Box<dyn RedrawHost>>,
    pub(super) pending: InvalidationMask,
}

impl<R: ChartRenderer> ChartEngine<R> {
    /// Creates a session showing the placeholder dataset.
    ///
    /// The content area stays empty until the first [`Self::on_size_changed`].
    pub fn new(mut renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let data = LineChartData::placeholder();
        let mut calculator = ViewportCalculator::new(config.viewport);
        calculator.init_max_viewport(&data);
        calculator.init_current_viewport();
        renderer.init_data_attributes(calculator.content_area(), &data);
        debug!(points = data.point_count(), "chart engine created");

        Ok(Self {
            renderer,
            calculator,
            data,
            selection: None,
            gestures: GestureHandler::new(config.gesture),
            animator: DataAnimator::new(config.animation),
            value_listener: None,
            animation_listener: None,
            redraw_host: None,
            pending: InvalidationMask::full(),
        })
    }

    /// Snapshot of the configuration currently in effect.
    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        ChartEngineConfig {
            gesture: self.gestures.config(),
            animation: self.animator.config(),
            viewport: self.calculator.config(),
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn content_area(&self) -> ContentArea {
        self.calculator.content_area()
    }

    /// Recomputes the content area for new view geometry.
    ///
    /// Geometry that leaves no room for content yields an empty area and
    /// turns subsequent draws into no-ops.
    pub fn on_size_changed(&mut self, width: u32, height: u32, padding: Padding) {
        let area =
            self.calculator
                .calculate_content_area(f64::from(width), f64::from(height), padding);
        if area.is_empty() {
            warn!(width, height, ?padding, "view too small, content area is empty");
        } else {
            debug!(
                width,
                height,
                content_width = area.width(),
                content_height = area.height(),
                "view size changed"
            );
        }
        self.renderer.init_data_attributes(area, &self.data);
        self.request_redraw(InvalidationTopic::Layout);
    }

    /// Draws one frame and consumes the pending invalidation.
    ///
    /// Returns `false` without touching the renderer when the content area
    /// is empty.
    pub fn draw(&mut self, surface: &mut R::Surface) -> ChartResult<bool> {
        let content_area = self.calculator.content_area();
        if content_area.is_empty() {
            trace!("draw skipped: empty content area");
            self.pending = InvalidationMask::none();
            return Ok(false);
        }

        let context = RenderContext {
            viewport: self.calculator.current_viewport(),
            content_area,
            data: &self.data,
            selection: self.selection,
        };
        self.renderer.draw(surface, &context)?;
        self.renderer.draw_unclipped(surface, &context)?;
        self.pending = InvalidationMask::none();
        Ok(true)
    }

    /// Draws only when a redraw has been requested since the last frame.
    pub fn render_if_invalidated(&mut self, surface: &mut R::Surface) -> ChartResult<bool> {
        if !self.has_pending_invalidation() {
            return Ok(false);
        }
        self.draw(surface)
    }
}
