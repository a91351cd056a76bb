use serde::{Deserialize, Serialize};

use crate::core::calculator::data_to_pixel;
use crate::core::{ContentArea, DataPoint, Viewport};
use crate::error::{ChartError, ChartResult};

/// One animatable sample of a line.
///
/// `current` is what gets drawn and hit-tested. While an animation runs it
/// is interpolated from `original` toward `target`; once settled it equals
/// `target`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    original: DataPoint,
    target: DataPoint,
    current: DataPoint,
}

impl LinePoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        let point = DataPoint::new(x, y);
        Self {
            original: point,
            target: point,
            current: point,
        }
    }

    /// Sets the value the next animation moves toward.
    #[must_use]
    pub const fn with_target(mut self, x: f64, y: f64) -> Self {
        self.target = DataPoint::new(x, y);
        self
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = DataPoint::new(x, y);
    }

    #[must_use]
    pub fn original(&self) -> DataPoint {
        self.original
    }

    #[must_use]
    pub fn target(&self) -> DataPoint {
        self.target
    }

    #[must_use]
    pub fn current(&self) -> DataPoint {
        self.current
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.current.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.current.y
    }

    pub fn update(&mut self, progress: f64) {
        self.current = self.original.lerp(self.target, progress);
    }

    /// Settles the point after an animation cycle.
    ///
    /// A successful cycle promotes `target` to the new baseline. A cancelled
    /// one keeps the interpolated `current` and rebases `original` on it, so
    /// the next cycle starts where this one stopped.
    pub fn finish(&mut self, success: bool) {
        if success {
            self.original = self.target;
            self.current = self.target;
        } else {
            self.original = self.current;
        }
    }

    fn is_finite(&self) -> bool {
        self.original.is_finite() && self.target.is_finite() && self.current.is_finite()
    }
}

/// Ordered, optionally named series of points. Order defines draw order and
/// point indices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    #[serde(default)]
    pub name: Option<String>,
    pub points: Vec<LinePoint>,
}

impl Line {
    #[must_use]
    pub fn new(points: Vec<LinePoint>) -> Self {
        Self { name: None, points }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builds a line from plain `(x, y)` pairs.
    #[must_use]
    pub fn from_xy(values: &[(f64, f64)]) -> Self {
        Self::new(values.iter().map(|&(x, y)| LinePoint::new(x, y)).collect())
    }

    #[must_use]
    pub fn points(&self) -> &[LinePoint] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [LinePoint] {
        &mut self.points
    }
}

/// The dataset of a chart session: every line, in draw order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineChartData {
    pub lines: Vec<Line>,
}

impl LineChartData {
    #[must_use]
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Fixed single-line dataset `(1,1) (2,2) (3,3) (4,4)` shown when no
    /// data has been supplied.
    #[must_use]
    pub fn placeholder() -> Self {
        let points = (1..=4)
            .map(|i| LinePoint::new(f64::from(i), f64::from(i)))
            .collect();
        Self::new(vec![Line::new(points)])
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.lines.iter().map(|line| line.points.len()).sum()
    }

    /// No line holds any point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Bounds-checked lookup by `(line, point)` index.
    #[must_use]
    pub fn point(&self, line_index: usize, point_index: usize) -> Option<&LinePoint> {
        self.lines.get(line_index)?.points.get(point_index)
    }

    pub fn iter_points(&self) -> impl Iterator<Item = (usize, usize, &LinePoint)> {
        self.lines.iter().enumerate().flat_map(|(line_index, line)| {
            line.points
                .iter()
                .enumerate()
                .map(move |(point_index, point)| (line_index, point_index, point))
        })
    }

    /// Interpolates every point at `progress`.
    pub fn update(&mut self, progress: f64) {
        for point in self.lines.iter_mut().flat_map(|line| line.points.iter_mut()) {
            point.update(progress);
        }
    }

    pub fn finish(&mut self, success: bool) {
        for point in self.lines.iter_mut().flat_map(|line| line.points.iter_mut()) {
            point.finish(success);
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (line_index, point_index, point) in self.iter_points() {
            if !point.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "point {point_index} of line {line_index} must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects the current values of a line into adjacent pixel segments.
pub fn project_line_segments(
    points: &[LinePoint],
    viewport: Viewport,
    area: ContentArea,
) -> ChartResult<Vec<LineSegment>> {
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let mut mapped = Vec::with_capacity(points.len());
    for point in points {
        mapped.push(data_to_pixel(viewport, area, point.current())?);
    }

    Ok(mapped
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        })
        .collect())
}
