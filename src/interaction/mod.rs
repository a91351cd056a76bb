mod gesture;
mod touch;
mod velocity;

use serde::{Deserialize, Serialize};

pub use gesture::{GestureHandler, GestureResponse, GestureTarget, SelectionChange, zoom_viewport};
pub use hit_test::{SelectedValue, hit_test};
pub use touch::{TouchAction, TouchEvent, TouchPointer};
pub use velocity::VelocityTracker;

/// Gesture state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// One pointer down. Tentatively a tap until it moves past the slop.
    Panning,
    /// Two-pointer pinch.
    Zooming,
    /// Momentum after release, advanced by `on_compute_scroll`.
    Flinging,
}

/// Axes affected by pinch zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ZoomType {
    Horizontal,
    Vertical,
    #[default]
    HorizontalAndVertical,
}

impl ZoomType {
    #[must_use]
    pub const fn zooms_x(self) -> bool {
        matches!(self, Self::Horizontal | Self::HorizontalAndVertical)
    }

    #[must_use]
    pub const fn zooms_y(self) -> bool {
        matches!(self, Self::Vertical | Self::HorizontalAndVertical)
    }
}

/// Tuning for post-release momentum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlingConfig {
    /// Multiplicative velocity decay per second.
    pub decay_per_second: f64,
    /// Minimum release speed that starts a fling.
    pub min_start_velocity_px_per_sec: f64,
    /// Fling stops when speed drops below this threshold.
    pub stop_velocity_px_per_sec: f64,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            decay_per_second: 0.05,
            min_start_velocity_px_per_sec: 50.0,
            stop_velocity_px_per_sec: 10.0,
        }
    }
}

/// Thresholds and switches for touch handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Movement below this distance keeps a press classified as a tap.
    pub touch_slop_px: f64,
    /// A press held longer than this is not a tap.
    pub tap_timeout_ms: u64,
    /// Maximum distance between a tap and a point for it to be selected.
    pub touch_tolerance_px: f64,
    /// Lower zoom bound, relative to the maximum viewport.
    pub min_zoom: f64,
    /// Upper zoom bound, relative to the maximum viewport.
    pub max_zoom: f64,
    pub zoom_type: ZoomType,
    pub zoom_enabled: bool,
    pub scroll_enabled: bool,
    pub value_touch_enabled: bool,
    pub fling: FlingConfig,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop_px: 8.0,
            tap_timeout_ms: 150,
            touch_tolerance_px: 24.0,
            min_zoom: 1.0,
            max_zoom: 20.0,
            zoom_type: ZoomType::default(),
            zoom_enabled: true,
            scroll_enabled: true,
            value_touch_enabled: true,
            fling: FlingConfig::default(),
        }
    }
}
