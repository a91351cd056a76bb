use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid content area: width={width}, height={height}")]
    InvalidContentArea { width: f64, height: f64 },

    #[error("degenerate viewport: width={width}, height={height}")]
    DegenerateViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
