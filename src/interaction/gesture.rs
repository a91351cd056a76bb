use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::core::{DataPoint, LineChartData, ScreenPoint, Viewport, ViewportCalculator};
use crate::interaction::{
    GestureConfig, GestureState, SelectedValue, TouchAction, TouchEvent, VelocityTracker,
    ZoomType, hit_test,
};

/// Pinches that start with fingers closer than this are treated as pans.
const MIN_PINCH_DISTANCE_PX: f64 = 10.0;

/// Session state a gesture may read or mutate for the duration of one event.
pub struct GestureTarget<'a> {
    pub calculator: &'a mut ViewportCalculator,
    pub data: &'a LineChartData,
    pub selection: &'a mut Option<SelectedValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(SelectedValue),
    Cleared,
}

/// What one event did, as reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureResponse {
    pub redraw: bool,
    pub selection: Option<SelectionChange>,
}

impl GestureResponse {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            redraw: false,
            selection: None,
        }
    }

    #[must_use]
    pub const fn redraw_if(changed: bool) -> Self {
        Self {
            redraw: changed,
            selection: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PressAnchor {
    position: ScreenPoint,
    time: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PinchAnchor {
    pointers: (u32, u32),
    distance: f64,
    anchor: DataPoint,
    viewport: Viewport,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct FlingMotion {
    velocity_x: f64,
    velocity_y: f64,
    last_tick: Duration,
}

/// Turns pointer sequences into pan, pinch-zoom, fling, and tap selection.
///
/// The handler holds only gesture bookkeeping. Viewports, data, and the
/// selection are lent to it per event through [`GestureTarget`].
#[derive(Debug, Clone, PartialEq)]
pub struct GestureHandler {
    config: GestureConfig,
    state: GestureState,
    active_pointer: u32,
    press: Option<PressAnchor>,
    last_position: ScreenPoint,
    slop_exceeded: bool,
    pinch: Option<PinchAnchor>,
    velocity: VelocityTracker,
    fling: Option<FlingMotion>,
}

impl GestureHandler {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: GestureState::Idle,
            active_pointer: 0,
            press: None,
            last_position: ScreenPoint::default(),
            slop_exceeded: false,
            pinch: None,
            velocity: VelocityTracker::default(),
            fling: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    #[must_use]
    pub fn is_flinging(&self) -> bool {
        self.state == GestureState::Flinging
    }

    /// Fling velocity in pixels per second, if flinging.
    #[must_use]
    pub fn fling_velocity(&self) -> Option<(f64, f64)> {
        self.fling.map(|motion| (motion.velocity_x, motion.velocity_y))
    }

    /// Drops all partial gesture state and returns to idle.
    pub fn cancel(&mut self) {
        if self.state != GestureState::Idle {
            trace!(state = ?self.state, "gesture cancelled");
        }
        self.reset();
    }

    pub fn handle_touch_event(
        &mut self,
        event: &TouchEvent,
        target: GestureTarget<'_>,
    ) -> GestureResponse {
        match event.action {
            TouchAction::Down => self.on_down(event),
            TouchAction::PointerDown { .. } => self.on_pointer_down(event, target.calculator),
            TouchAction::Move => match self.state {
                GestureState::Panning => self.on_pan_move(event, target.calculator),
                GestureState::Zooming => self.on_pinch_move(event, target.calculator),
                GestureState::Idle | GestureState::Flinging => GestureResponse::none(),
            },
            TouchAction::PointerUp { id } => self.on_pointer_up(event, id),
            TouchAction::Up => self.on_up(event, target),
            TouchAction::Cancel => {
                self.cancel();
                GestureResponse::none()
            }
        }
    }

    /// Advances an active fling to `now`. Returns whether the viewport moved.
    pub fn compute_scroll(&mut self, now: Duration, calculator: &mut ViewportCalculator) -> bool {
        if self.state != GestureState::Flinging {
            return false;
        }
        let Some(mut motion) = self.fling else {
            self.reset();
            return false;
        };

        let dt = now.saturating_sub(motion.last_tick).as_secs_f64();
        if dt <= 0.0 {
            return false;
        }
        motion.last_tick = now;

        let area = calculator.content_area();
        let from = ScreenPoint::new(area.left, area.top);
        let to = ScreenPoint::new(
            from.x + motion.velocity_x * dt,
            from.y + motion.velocity_y * dt,
        );
        let outcome = match calculator.pan_by_pixels(from, to) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(error = %err, "fling stopped: viewport cannot be translated");
                self.reset();
                return false;
            }
        };

        if outcome.clamped_x {
            motion.velocity_x = 0.0;
        }
        if outcome.clamped_y {
            motion.velocity_y = 0.0;
        }
        let decay = self.config.fling.decay_per_second.powf(dt);
        motion.velocity_x *= decay;
        motion.velocity_y *= decay;

        if motion.velocity_x.hypot(motion.velocity_y) < self.config.fling.stop_velocity_px_per_sec {
            debug!(
                edge_reached = outcome.clamped_x || outcome.clamped_y,
                "fling finished"
            );
            self.reset();
        } else {
            self.fling = Some(motion);
        }
        outcome.changed
    }

    fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.press = None;
        self.slop_exceeded = false;
        self.pinch = None;
        self.velocity.clear();
        self.fling = None;
    }

    fn on_down(&mut self, event: &TouchEvent) -> GestureResponse {
        let Some(pointer) = event.primary() else {
            return GestureResponse::none();
        };
        if self.state == GestureState::Flinging {
            debug!("fling interrupted by touch");
        }
        self.reset();

        let position = pointer.position();
        self.state = GestureState::Panning;
        self.active_pointer = pointer.id;
        self.press = Some(PressAnchor {
            position,
            time: event.time,
        });
        self.last_position = position;
        self.velocity.add(event.time, position);
        GestureResponse::none()
    }

    fn on_pointer_down(
        &mut self,
        event: &TouchEvent,
        calculator: &ViewportCalculator,
    ) -> GestureResponse {
        if self.state != GestureState::Panning {
            return GestureResponse::none();
        }
        // A second finger rules out a tap no matter what happens next.
        self.slop_exceeded = true;
        if !self.config.zoom_enabled {
            return GestureResponse::none();
        }
        let (Some(first), Some(second)) = (event.pointers.first(), event.pointers.get(1)) else {
            return GestureResponse::none();
        };

        let distance = first.position().distance_to(second.position());
        if distance.is_nan() || distance < MIN_PINCH_DISTANCE_PX {
            return GestureResponse::none();
        }
        let focus = first.position().midpoint(second.position());
        let Ok(anchor) = calculator.pixel_to_data(focus) else {
            return GestureResponse::none();
        };

        self.pinch = Some(PinchAnchor {
            pointers: (first.id, second.id),
            distance,
            anchor,
            viewport: calculator.current_viewport(),
        });
        self.velocity.clear();
        self.state = GestureState::Zooming;
        debug!(distance, "pinch zoom started");
        GestureResponse::none()
    }

    fn on_pan_move(
        &mut self,
        event: &TouchEvent,
        calculator: &mut ViewportCalculator,
    ) -> GestureResponse {
        let Some(pointer) = event.pointer(self.active_pointer).or_else(|| event.primary()) else {
            return GestureResponse::none();
        };
        let position = pointer.position();
        self.velocity.add(event.time, position);

        if !self.slop_exceeded {
            let origin = self.press.map_or(self.last_position, |press| press.position);
            if origin.distance_to(position) < self.config.touch_slop_px {
                return GestureResponse::none();
            }
            self.slop_exceeded = true;
            trace!("touch slop exceeded, panning");
        }

        let from = self.last_position;
        self.last_position = position;
        if !self.config.scroll_enabled {
            return GestureResponse::none();
        }
        match calculator.pan_by_pixels(from, position) {
            Ok(outcome) => GestureResponse::redraw_if(outcome.changed),
            Err(err) => {
                trace!(error = %err, "pan skipped");
                GestureResponse::none()
            }
        }
    }

    fn on_pinch_move(
        &mut self,
        event: &TouchEvent,
        calculator: &mut ViewportCalculator,
    ) -> GestureResponse {
        let Some(pinch) = self.pinch else {
            return GestureResponse::none();
        };
        let (Some(first), Some(second)) =
            (event.pointer(pinch.pointers.0), event.pointer(pinch.pointers.1))
        else {
            return GestureResponse::none();
        };
        let area = calculator.content_area();
        if area.is_empty() {
            return GestureResponse::none();
        }

        let distance = first.position().distance_to(second.position());
        let scale = distance / pinch.distance;
        if !scale.is_finite() || scale <= 0.0 {
            return GestureResponse::none();
        }
        let focus = first.position().midpoint(second.position());
        let focus_ratio = (
            (focus.x - area.left) / area.width(),
            (focus.y - area.top) / area.height(),
        );

        let candidate = zoom_viewport(
            pinch.viewport,
            pinch.anchor,
            focus_ratio,
            scale,
            self.config.zoom_type,
            calculator.max_viewport(),
            (self.config.min_zoom, self.config.max_zoom),
        );
        match calculator.set_current_viewport(candidate) {
            Ok(changed) => GestureResponse::redraw_if(changed),
            Err(err) => {
                warn!(error = %err, scale, "rejected degenerate pinch zoom");
                GestureResponse::none()
            }
        }
    }

    fn on_pointer_up(&mut self, event: &TouchEvent, id: u32) -> GestureResponse {
        let remaining = event.pointers.iter().copied().find(|pointer| pointer.id != id);
        match self.state {
            GestureState::Zooming => {
                self.pinch = None;
                let Some(pointer) = remaining else {
                    self.reset();
                    return GestureResponse::none();
                };
                debug!("pinch zoom ended, continuing as pan");
                self.state = GestureState::Panning;
                self.active_pointer = pointer.id;
                self.last_position = pointer.position();
                self.slop_exceeded = true;
                self.velocity.clear();
                self.velocity.add(event.time, pointer.position());
            }
            GestureState::Panning if id == self.active_pointer => {
                if let Some(pointer) = remaining {
                    self.active_pointer = pointer.id;
                    self.last_position = pointer.position();
                    self.velocity.clear();
                    self.velocity.add(event.time, pointer.position());
                }
            }
            _ => {}
        }
        GestureResponse::none()
    }

    fn on_up(&mut self, event: &TouchEvent, target: GestureTarget<'_>) -> GestureResponse {
        match self.state {
            GestureState::Panning => {}
            GestureState::Idle | GestureState::Zooming | GestureState::Flinging => {
                self.reset();
                return GestureResponse::none();
            }
        }

        let position = event
            .pointer(self.active_pointer)
            .or_else(|| event.primary())
            .map(|pointer| pointer.position());
        if let Some(position) = position {
            self.velocity.add(event.time, position);
        }

        let Some(press) = self.press else {
            self.reset();
            return GestureResponse::none();
        };
        let held = event.time.saturating_sub(press.time);
        let tap_timeout = Duration::from_millis(self.config.tap_timeout_ms);

        if !self.slop_exceeded {
            self.reset();
            if held < tap_timeout {
                return self.on_tap(position.unwrap_or(press.position), target);
            }
            return GestureResponse::none();
        }

        let (velocity_x, velocity_y) = self.velocity.velocity();
        self.reset();
        if !self.config.scroll_enabled
            || velocity_x.hypot(velocity_y) < self.config.fling.min_start_velocity_px_per_sec
        {
            return GestureResponse::none();
        }
        self.state = GestureState::Flinging;
        self.fling = Some(FlingMotion {
            velocity_x,
            velocity_y,
            last_tick: event.time,
        });
        debug!(velocity_x, velocity_y, "fling started");
        GestureResponse::redraw_if(true)
    }

    fn on_tap(&mut self, position: ScreenPoint, target: GestureTarget<'_>) -> GestureResponse {
        if !self.config.value_touch_enabled {
            return GestureResponse::none();
        }
        let hit = hit_test(
            target.data,
            target.calculator.current_viewport(),
            target.calculator.content_area(),
            position,
            self.config.touch_tolerance_px,
        );
        match hit {
            Some(value) => {
                debug!(
                    line_index = value.line_index,
                    point_index = value.point_index,
                    "value selected by tap"
                );
                *target.selection = Some(value);
                GestureResponse {
                    redraw: true,
                    selection: Some(SelectionChange::Selected(value)),
                }
            }
            None if target.selection.is_some() => {
                debug!("tap missed all values, selection cleared");
                *target.selection = None;
                GestureResponse {
                    redraw: true,
                    selection: Some(SelectionChange::Cleared),
                }
            }
            None => GestureResponse::none(),
        }
    }
}

/// Scales `base` by `1 / scale` around `anchor`.
///
/// `focus_ratio` is where the anchor should land, as fractions of the content
/// area measured from its left and top edges. Resulting spans are bounded so
/// the zoom level relative to `max` stays within `zoom_bounds`
/// (`(min_zoom, max_zoom)`, `min_zoom <= max_zoom`). Axes not covered by
/// `zoom_type` keep their bounds.
#[must_use]
pub fn zoom_viewport(
    base: Viewport,
    anchor: DataPoint,
    focus_ratio: (f64, f64),
    scale: f64,
    zoom_type: ZoomType,
    max: Viewport,
    zoom_bounds: (f64, f64),
) -> Viewport {
    let (min_zoom, max_zoom) = zoom_bounds;
    let mut result = base;

    if zoom_type.zooms_x() {
        let width = (base.width() / scale).clamp(max.width() / max_zoom, max.width() / min_zoom);
        result.left = anchor.x - focus_ratio.0 * width;
        result.right = result.left + width;
    }
    if zoom_type.zooms_y() {
        let height =
            (base.height() / scale).clamp(max.height() / max_zoom, max.height() / min_zoom);
        result.top = anchor.y + focus_ratio.1 * height;
        result.bottom = result.top - height;
    }
    result
}
