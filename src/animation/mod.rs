//! Linear value animation for chart data.
//!
//! The animator only tracks normalized progress against host-supplied
//! timestamps. Applying progress to points and refreshing viewports is done
//! by the engine that owns the data.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub duration_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { duration_ms: 500 }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Progress reported by one animation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTick {
    /// Normalized progress in `[0, 1]`.
    pub progress: f64,
    /// Set on the tick that reaches `1.0`; the cycle is over afterwards.
    pub finished: bool,
}

/// Observer of animation cycles.
pub trait ChartAnimationListener {
    fn on_animation_started(&mut self);

    /// `success` is `false` when the cycle was cancelled before completing.
    fn on_animation_finished(&mut self, success: bool);
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct RunningCycle {
    started_at: Duration,
    progress: f64,
}

/// Single-cycle linear progress animator.
#[derive(Debug, Clone, PartialEq)]
pub struct DataAnimator {
    config: AnimationConfig,
    running: Option<RunningCycle>,
}

impl DataAnimator {
    #[must_use]
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            running: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> AnimationConfig {
        self.config
    }

    /// Takes effect from the next started cycle.
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Progress of the running cycle, `None` when idle.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.running.map(|cycle| cycle.progress)
    }

    /// Starts a cycle at `now` with progress `0`.
    ///
    /// The caller is responsible for cancelling a running cycle first.
    pub fn start(&mut self, now: Duration) {
        trace!(duration_ms = self.config.duration_ms, "animation cycle started");
        self.running = Some(RunningCycle {
            started_at: now,
            progress: 0.0,
        });
    }

    /// Stops the running cycle. Returns `false` when nothing was running.
    pub fn cancel(&mut self) -> bool {
        self.running.take().is_some()
    }

    /// Advances progress to `now`.
    ///
    /// Progress never decreases within a cycle, even if `now` goes backward,
    /// and the final tick reports exactly `1.0`.
    pub fn tick(&mut self, now: Duration) -> Option<AnimationTick> {
        let cycle = self.running.as_mut()?;
        let duration = self.config.duration();
        let elapsed = now.saturating_sub(cycle.started_at);
        let raw = if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
        };
        cycle.progress = cycle.progress.max(raw);

        let progress = cycle.progress;
        let finished = progress >= 1.0;
        if finished {
            self.running = None;
        }
        Some(AnimationTick {
            progress: if finished { 1.0 } else { progress },
            finished,
        })
    }
}
