use crate::core::ViewportConfig;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FlingConfig, GestureConfig};

use super::ChartEngineConfig;

pub(super) fn validate_engine_config(config: ChartEngineConfig) -> ChartResult<ChartEngineConfig> {
    validate_gesture_config(config.gesture)?;
    validate_viewport_config(config.viewport)?;
    Ok(config)
}

pub(super) fn validate_gesture_config(config: GestureConfig) -> ChartResult<GestureConfig> {
    if !config.touch_slop_px.is_finite() || config.touch_slop_px < 0.0 {
        return Err(ChartError::InvalidData(
            "touch slop must be finite and >= 0".to_owned(),
        ));
    }
    if !config.touch_tolerance_px.is_finite() || config.touch_tolerance_px < 0.0 {
        return Err(ChartError::InvalidData(
            "touch tolerance must be finite and >= 0".to_owned(),
        ));
    }
    if !config.min_zoom.is_finite() || config.min_zoom <= 0.0 || config.min_zoom > 1.0 {
        return Err(ChartError::InvalidData(
            "min zoom must be finite and in (0, 1]".to_owned(),
        ));
    }
    if !config.max_zoom.is_finite() || config.max_zoom < 1.0 {
        return Err(ChartError::InvalidData(
            "max zoom must be finite and >= 1".to_owned(),
        ));
    }
    validate_fling_config(config.fling)?;
    Ok(config)
}

pub(super) fn validate_fling_config(config: FlingConfig) -> ChartResult<FlingConfig> {
    if !config.decay_per_second.is_finite()
        || config.decay_per_second <= 0.0
        || config.decay_per_second >= 1.0
    {
        return Err(ChartError::InvalidData(
            "fling decay_per_second must be finite and in (0, 1)".to_owned(),
        ));
    }
    if !config.stop_velocity_px_per_sec.is_finite() || config.stop_velocity_px_per_sec <= 0.0 {
        return Err(ChartError::InvalidData(
            "fling stop velocity must be finite and > 0".to_owned(),
        ));
    }
    if !config.min_start_velocity_px_per_sec.is_finite()
        || config.min_start_velocity_px_per_sec < config.stop_velocity_px_per_sec
    {
        return Err(ChartError::InvalidData(
            "fling start velocity must be finite and >= stop velocity".to_owned(),
        ));
    }
    Ok(config)
}

pub(super) fn validate_viewport_config(config: ViewportConfig) -> ChartResult<ViewportConfig> {
    if !config.min_viewport_span.is_finite() || config.min_viewport_span <= 0.0 {
        return Err(ChartError::InvalidData(
            "min viewport span must be finite and > 0".to_owned(),
        ));
    }
    Ok(config)
}
