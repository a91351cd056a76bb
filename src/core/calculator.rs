use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{ContentArea, DataPoint, LineChartData, Padding, ScreenPoint, Viewport};
use crate::error::{ChartError, ChartResult};

/// Span given to an axis whose data is too narrow to zoom or pan.
const DEGENERATE_AXIS_SPAN: f64 = 1.0;

/// Tuning for viewport bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width and height of any accepted viewport must exceed this.
    pub min_viewport_span: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_viewport_span: 1e-6,
        }
    }
}

/// Computes the content area from view geometry.
///
/// Never fails: when padding consumes the whole view the affected axis
/// collapses to zero size at the padded origin.
#[must_use]
pub fn calculate_content_area(view_width: f64, view_height: f64, padding: Padding) -> ContentArea {
    let sanitize = |value: f64| if value.is_finite() { value.max(0.0) } else { 0.0 };
    let width = sanitize(view_width);
    let height = sanitize(view_height);
    let padding = Padding::new(
        sanitize(padding.left),
        sanitize(padding.top),
        sanitize(padding.right),
        sanitize(padding.bottom),
    );

    let left = padding.left;
    let top = padding.top;
    let right = (width - padding.right).max(left);
    let bottom = (height - padding.bottom).max(top);
    ContentArea::new(left, top, right, bottom)
}

/// Bounding box of every point's current value.
///
/// Empty data yields the unit viewport. An axis whose extent does not
/// exceed `min_span` is widened around its center, so the result always
/// passes [`Viewport::has_min_span`].
#[must_use]
pub fn max_viewport_for(data: &LineChartData, min_span: f64) -> Viewport {
    let mut left = f64::INFINITY;
    let mut right = f64::NEG_INFINITY;
    let mut bottom = f64::INFINITY;
    let mut top = f64::NEG_INFINITY;

    for (_, _, point) in data.iter_points() {
        let value = point.current();
        if !value.is_finite() {
            continue;
        }
        left = left.min(value.x);
        right = right.max(value.x);
        bottom = bottom.min(value.y);
        top = top.max(value.y);
    }

    if left > right || bottom > top {
        let unit = Viewport::unit();
        (left, right, bottom, top) = (unit.left, unit.right, unit.bottom, unit.top);
    }

    let (left, right) = widen_narrow_axis(left, right, min_span);
    let (bottom, top) = widen_narrow_axis(bottom, top, min_span);
    Viewport::new(left, top, right, bottom)
}

fn widen_narrow_axis(min: f64, max: f64, min_span: f64) -> (f64, f64) {
    if max - min > min_span {
        return (min, max);
    }
    let half = DEGENERATE_AXIS_SPAN.max(min_span * 2.0) * 0.5;
    let center = min + (max - min) * 0.5;
    (center - half, center + half)
}

/// Maps a data-space point into the content area.
pub fn data_to_pixel(
    viewport: Viewport,
    area: ContentArea,
    point: DataPoint,
) -> ChartResult<ScreenPoint> {
    if !viewport.is_valid() {
        return Err(ChartError::DegenerateViewport {
            width: viewport.width(),
            height: viewport.height(),
        });
    }

    let x = area.left + (point.x - viewport.left) / viewport.width() * area.width();
    let y = area.bottom - (point.y - viewport.bottom) / viewport.height() * area.height();
    Ok(ScreenPoint::new(x, y))
}

/// Inverse of [`data_to_pixel`].
pub fn pixel_to_data(
    viewport: Viewport,
    area: ContentArea,
    pixel: ScreenPoint,
) -> ChartResult<DataPoint> {
    if area.is_empty() {
        return Err(ChartError::InvalidContentArea {
            width: area.width(),
            height: area.height(),
        });
    }
    if !viewport.is_valid() {
        return Err(ChartError::DegenerateViewport {
            width: viewport.width(),
            height: viewport.height(),
        });
    }

    let x = viewport.left + (pixel.x - area.left) / area.width() * viewport.width();
    let y = viewport.bottom + (area.bottom - pixel.y) / area.height() * viewport.height();
    Ok(DataPoint::new(x, y))
}

/// Moves `candidate` inside `max`, one axis at a time.
///
/// An axis narrower than `max` is translated back inside without changing
/// its span. An axis at least as wide as `max` becomes exactly `max`.
#[must_use]
pub fn clamp_viewport(candidate: Viewport, max: Viewport) -> Viewport {
    let (left, right) = clamp_axis(candidate.left, candidate.right, max.left, max.right);
    let (bottom, top) = clamp_axis(candidate.bottom, candidate.top, max.bottom, max.top);
    Viewport::new(left, top, right, bottom)
}

fn clamp_axis(min: f64, max: f64, bound_min: f64, bound_max: f64) -> (f64, f64) {
    let span = max - min;
    if span >= bound_max - bound_min {
        return (bound_min, bound_max);
    }
    if min < bound_min {
        (bound_min, bound_min + span)
    } else if max > bound_max {
        (bound_max - span, bound_max)
    } else {
        (min, max)
    }
}

/// Result of a clamped viewport translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanOutcome {
    pub changed: bool,
    pub clamped_x: bool,
    pub clamped_y: bool,
}

/// Owns the content area and both viewports of a chart session.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportCalculator {
    config: ViewportConfig,
    view_width: f64,
    view_height: f64,
    padding: Padding,
    content_area: ContentArea,
    max_viewport: Viewport,
    current_viewport: Viewport,
}

impl ViewportCalculator {
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            config,
            view_width: 0.0,
            view_height: 0.0,
            padding: Padding::default(),
            content_area: ContentArea::default(),
            max_viewport: Viewport::unit(),
            current_viewport: Viewport::unit(),
        }
    }

    #[must_use]
    pub fn config(&self) -> ViewportConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ViewportConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn content_area(&self) -> ContentArea {
        self.content_area
    }

    #[must_use]
    pub fn max_viewport(&self) -> Viewport {
        self.max_viewport
    }

    #[must_use]
    pub fn current_viewport(&self) -> Viewport {
        self.current_viewport
    }

    /// Stores new view geometry and recomputes the content area from it.
    pub fn calculate_content_area(
        &mut self,
        view_width: f64,
        view_height: f64,
        padding: Padding,
    ) -> ContentArea {
        self.view_width = view_width;
        self.view_height = view_height;
        self.padding = padding;
        self.recalculate_content_area()
    }

    /// Recomputes the content area from the last reported geometry.
    pub fn recalculate_content_area(&mut self) -> ContentArea {
        self.content_area = calculate_content_area(self.view_width, self.view_height, self.padding);
        trace!(
            width = self.content_area.width(),
            height = self.content_area.height(),
            "content area recalculated"
        );
        self.content_area
    }

    pub fn init_max_viewport(&mut self, data: &LineChartData) -> Viewport {
        self.max_viewport = max_viewport_for(data, self.config.min_viewport_span);
        self.max_viewport
    }

    /// Shows the whole maximum viewport.
    pub fn init_current_viewport(&mut self) {
        self.current_viewport = self.max_viewport;
    }

    /// Refits the maximum viewport to `data` and carries the current one over.
    ///
    /// A current viewport that showed the full extent keeps doing so; a
    /// zoomed or panned one is clamped into the new extent.
    pub fn refresh_viewports(&mut self, data: &LineChartData) {
        let previous_max = self.max_viewport;
        self.init_max_viewport(data);
        if self.current_viewport == previous_max {
            self.init_current_viewport();
        } else {
            self.current_viewport = clamp_viewport(self.current_viewport, self.max_viewport);
        }
    }

    /// Replaces the current viewport with `candidate` clamped into the max.
    ///
    /// Degenerate candidates are rejected and leave the viewport untouched.
    /// Returns whether the viewport changed.
    pub fn set_current_viewport(&mut self, candidate: Viewport) -> ChartResult<bool> {
        if !candidate.has_min_span(self.config.min_viewport_span) {
            return Err(ChartError::DegenerateViewport {
                width: candidate.width(),
                height: candidate.height(),
            });
        }
        let clamped = clamp_viewport(candidate, self.max_viewport);
        let changed = clamped != self.current_viewport;
        self.current_viewport = clamped;
        Ok(changed)
    }

    /// Translates the current viewport so the data under `from` ends up under `to`.
    pub fn pan_by_pixels(&mut self, from: ScreenPoint, to: ScreenPoint) -> ChartResult<PanOutcome> {
        let anchor = self.pixel_to_data(from)?;
        let moved = self.pixel_to_data(to)?;
        let dx = anchor.x - moved.x;
        let dy = anchor.y - moved.y;
        if dx == 0.0 && dy == 0.0 {
            return Ok(PanOutcome::default());
        }

        let candidate = self.current_viewport.translated(dx, dy);
        let clamped = clamp_viewport(candidate, self.max_viewport);
        let outcome = PanOutcome {
            changed: clamped != self.current_viewport,
            clamped_x: clamped.left != candidate.left || clamped.right != candidate.right,
            clamped_y: clamped.bottom != candidate.bottom || clamped.top != candidate.top,
        };
        self.current_viewport = clamped;
        Ok(outcome)
    }

    pub fn data_to_pixel(&self, point: DataPoint) -> ChartResult<ScreenPoint> {
        data_to_pixel(self.current_viewport, self.content_area, point)
    }

    pub fn pixel_to_data(&self, pixel: ScreenPoint) -> ChartResult<DataPoint> {
        pixel_to_data(self.current_viewport, self.content_area, pixel)
    }
}
