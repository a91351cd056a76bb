use serde::{Deserialize, Serialize};

use crate::animation::AnimationConfig;
use crate::core::ViewportConfig;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FlingConfig, GestureConfig, ZoomType};

use super::validation::validate_engine_config;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Missing JSON sections fall back
/// to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tap-vs-pan slop distance in pixels.
    #[must_use]
    pub fn with_touch_slop_px(mut self, slop_px: f64) -> Self {
        self.gesture.touch_slop_px = slop_px;
        self
    }

    /// Sets the longest press, in milliseconds, still classified as a tap.
    #[must_use]
    pub fn with_tap_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.gesture.tap_timeout_ms = timeout_ms;
        self
    }

    /// Sets the hit-test radius used for tap selection.
    #[must_use]
    pub fn with_touch_tolerance_px(mut self, tolerance_px: f64) -> Self {
        self.gesture.touch_tolerance_px = tolerance_px;
        self
    }

    /// Sets the `[min_zoom, max_zoom]` bounds relative to the maximum viewport.
    #[must_use]
    pub fn with_zoom_bounds(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.gesture.min_zoom = min_zoom;
        self.gesture.max_zoom = max_zoom;
        self
    }

    #[must_use]
    pub fn with_zoom_type(mut self, zoom_type: ZoomType) -> Self {
        self.gesture.zoom_type = zoom_type;
        self
    }

    #[must_use]
    pub fn with_zoom_enabled(mut self, enabled: bool) -> Self {
        self.gesture.zoom_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_scroll_enabled(mut self, enabled: bool) -> Self {
        self.gesture.scroll_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_value_touch_enabled(mut self, enabled: bool) -> Self {
        self.gesture.value_touch_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_fling_config(mut self, fling: FlingConfig) -> Self {
        self.gesture.fling = fling;
        self
    }

    /// Sets data animation duration in milliseconds.
    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration_ms: u64) -> Self {
        self.animation.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_min_viewport_span(mut self, min_span: f64) -> Self {
        self.viewport.min_viewport_span = min_span;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        validate_engine_config(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}
