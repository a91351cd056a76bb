use std::time::Duration;

use tracing::{debug, warn};

use crate::core::{DataPoint, ScreenPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    GestureConfig, GestureState, GestureTarget, SelectedValue, SelectionChange, TouchEvent,
    zoom_viewport,
};
use crate::render::ChartRenderer;

use super::validation::validate_gesture_config;
use super::{ChartEngine, InvalidationTopic, RedrawHost, ValueSelectListener};

impl<R: ChartRenderer> ChartEngine<R> {
    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        self.gestures.config()
    }

    pub fn set_gesture_config(&mut self, config: GestureConfig) -> ChartResult<()> {
        validate_gesture_config(config)?;
        self.gestures.set_config(config);
        Ok(())
    }

    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.gestures.state()
    }

    pub fn set_value_select_listener(&mut self, listener: impl ValueSelectListener + 'static) {
        self.value_listener = Some(Box::new(listener));
    }

    pub fn clear_value_select_listener(&mut self) {
        self.value_listener = None;
    }

    pub fn set_redraw_host(&mut self, host: impl RedrawHost + 'static) {
        self.redraw_host = Some(Box::new(host));
    }

    pub fn clear_redraw_host(&mut self) {
        self.redraw_host = None;
    }

    /// Feeds one pointer event to the gesture state machine.
    ///
    /// Returns whether the viewport or selection changed, or a fling
    /// started, so the host should redraw.
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        let target = GestureTarget {
            calculator: &mut self.calculator,
            data: &self.data,
            selection: &mut self.selection,
        };
        let response = self.gestures.handle_touch_event(event, target);

        if let Some(change) = response.selection {
            self.notify_selection_change(change);
        }
        if response.redraw {
            let topic = if response.selection.is_some() {
                InvalidationTopic::Selection
            } else {
                InvalidationTopic::Viewport
            };
            self.request_redraw(topic);
        }
        response.redraw
    }

    /// Advances an active fling. Called once per frame while flinging.
    pub fn on_compute_scroll(&mut self, now: Duration) -> bool {
        let moved = self.gestures.compute_scroll(now, &mut self.calculator);
        if moved {
            self.request_redraw(InvalidationTopic::Viewport);
        }
        moved
    }

    #[must_use]
    pub fn selected_value(&self) -> Option<SelectedValue> {
        self.selection
    }

    /// Current value of the selected point, if the selection still resolves.
    #[must_use]
    pub fn selected_point(&self) -> Option<DataPoint> {
        let selection = self.selection?;
        self.data
            .point(selection.line_index, selection.point_index)
            .map(|point| point.current())
    }

    /// Deselects the highlighted point. Returns `false` when nothing was selected.
    pub fn clear_selection(&mut self) -> bool {
        if self.selection.take().is_none() {
            return false;
        }
        debug!("selection cleared");
        if let Some(listener) = self.value_listener.as_mut() {
            listener.on_value_deselected();
        }
        self.request_redraw(InvalidationTopic::Selection);
        true
    }

    #[must_use]
    pub fn current_viewport(&self) -> Viewport {
        self.calculator.current_viewport()
    }

    #[must_use]
    pub fn maximum_viewport(&self) -> Viewport {
        self.calculator.max_viewport()
    }

    /// Shows `viewport`, clamped into the maximum viewport.
    ///
    /// Degenerate viewports are rejected and leave the current one in place.
    pub fn set_current_viewport(&mut self, viewport: Viewport) -> ChartResult<bool> {
        let changed = self.calculator.set_current_viewport(viewport)?;
        if changed {
            self.request_redraw(InvalidationTopic::Viewport);
        }
        Ok(changed)
    }

    /// Zooms all the way out.
    pub fn reset_viewport(&mut self) -> bool {
        let before = self.calculator.current_viewport();
        self.calculator.init_current_viewport();
        let changed = self.calculator.current_viewport() != before;
        if changed {
            self.request_redraw(InvalidationTopic::Viewport);
        }
        changed
    }

    /// Ratio of the maximum span to the current span on the zoomed axis.
    ///
    /// Horizontal span is used unless zooming is vertical only.
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        let max = self.calculator.max_viewport();
        let current = self.calculator.current_viewport();
        if self.gestures.config().zoom_type.zooms_x() {
            max.width() / current.width()
        } else {
            max.height() / current.height()
        }
    }

    /// Zooms in by `factor` (`< 1` zooms out) keeping the data under `focus` fixed.
    ///
    /// Uses the same zoom type and bounds as pinch zoom.
    pub fn zoom_by(&mut self, factor: f64, focus: ScreenPoint) -> ChartResult<bool> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        let anchor = self.calculator.pixel_to_data(focus)?;
        let area = self.calculator.content_area();
        let focus_ratio = (
            (focus.x - area.left) / area.width(),
            (focus.y - area.top) / area.height(),
        );
        let config = self.gestures.config();
        let candidate = zoom_viewport(
            self.calculator.current_viewport(),
            anchor,
            focus_ratio,
            factor,
            config.zoom_type,
            self.calculator.max_viewport(),
            (config.min_zoom, config.max_zoom),
        );
        self.set_current_viewport(candidate)
    }

    fn notify_selection_change(&mut self, change: SelectionChange) {
        match change {
            SelectionChange::Selected(value) => {
                let Some(point) = self.data.point(value.line_index, value.point_index) else {
                    warn!(
                        line_index = value.line_index,
                        point_index = value.point_index,
                        "selection out of range, cleared"
                    );
                    self.selection = None;
                    if let Some(listener) = self.value_listener.as_mut() {
                        listener.on_value_deselected();
                    }
                    return;
                };
                let current = point.current();
                if let Some(listener) = self.value_listener.as_mut() {
                    listener.on_value_selected(value.line_index, value.point_index, current);
                }
            }
            SelectionChange::Cleared => {
                if let Some(listener) = self.value_listener.as_mut() {
                    listener.on_value_deselected();
                }
            }
        }
    }
}
