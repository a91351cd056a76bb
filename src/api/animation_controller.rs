use std::time::Duration;

use tracing::debug;

use crate::animation::{AnimationConfig, ChartAnimationListener};
use crate::render::ChartRenderer;

use super::{ChartEngine, InvalidationTopic};

impl<R: ChartRenderer> ChartEngine<R> {
    #[must_use]
    pub fn animation_config(&self) -> AnimationConfig {
        self.animator.config()
    }

    /// Takes effect from the next started animation.
    pub fn set_animation_config(&mut self, config: AnimationConfig) {
        self.animator.set_config(config);
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn set_animation_listener(&mut self, listener: impl ChartAnimationListener + 'static) {
        self.animation_listener = Some(Box::new(listener));
    }

    pub fn clear_animation_listener(&mut self) {
        self.animation_listener = None;
    }

    /// Starts animating every point from its original value toward its target.
    ///
    /// A running animation is cancelled first. The host then calls
    /// [`Self::on_animation_frame`] once per frame until it returns `false`.
    pub fn start_data_animation(&mut self, now: Duration) {
        self.cancel_data_animation();
        self.animator.start(now);
        debug!(
            duration_ms = self.animator.config().duration_ms,
            points = self.data.point_count(),
            "data animation started"
        );
        if let Some(listener) = self.animation_listener.as_mut() {
            listener.on_animation_started();
        }
    }

    /// Advances a running data animation to `now`.
    ///
    /// Returns whether data changed and a redraw is needed. The frame that
    /// completes the cycle settles every point on its target.
    pub fn on_animation_frame(&mut self, now: Duration) -> bool {
        let Some(tick) = self.animator.tick(now) else {
            return false;
        };

        self.data.update(tick.progress);
        if tick.finished {
            self.data.finish(true);
        }
        self.calculator.refresh_viewports(&self.data);

        if tick.finished {
            debug!("data animation finished");
            if let Some(listener) = self.animation_listener.as_mut() {
                listener.on_animation_finished(true);
            }
        }
        self.request_redraw(InvalidationTopic::Data);
        true
    }

    /// Stops a running data animation where it is.
    ///
    /// Interpolated values stay in place and become the baseline of the next
    /// cycle. Returns `false` when nothing was running.
    pub fn cancel_data_animation(&mut self) -> bool {
        if !self.animator.cancel() {
            return false;
        }
        self.data.finish(false);
        debug!("data animation cancelled");
        if let Some(listener) = self.animation_listener.as_mut() {
            listener.on_animation_finished(false);
        }
        true
    }
}
