//! linechart-rs: interaction and animation engine for touch-driven line charts.
//!
//! The crate owns the parts of a line chart that are independent of any UI
//! toolkit: mapping a data-space viewport onto a pixel content area, turning
//! pointer sequences into pan, pinch-zoom, fling, and tap selection, and
//! animating point values between states. Drawing is delegated to a
//! [`render::ChartRenderer`] supplied by the host.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
