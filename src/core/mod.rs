pub mod calculator;
pub mod line_series;
pub mod types;
pub mod viewport;

pub use calculator::{
    PanOutcome, ViewportCalculator, ViewportConfig, calculate_content_area, clamp_viewport,
    data_to_pixel, max_viewport_for, pixel_to_data,
};
pub use line_series::{Line, LineChartData, LinePoint, LineSegment, project_line_segments};
pub use types::{DataPoint, Padding, ScreenPoint};
pub use viewport::{ContentArea, Viewport};
