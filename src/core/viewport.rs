use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, ScreenPoint};

/// Rectangle in data space.
///
/// `top` is the upper data bound and `bottom` the lower one, so a valid
/// viewport has `right > left` and `top > bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::unit()
    }
}

impl Viewport {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// `(0, 0)-(1, 1)`, used when there is nothing to fit.
    #[must_use]
    pub const fn unit() -> Self {
        Self::new(0.0, 1.0, 1.0, 0.0)
    }

    /// Builds a viewport from its lower-left corner and spans.
    #[must_use]
    pub fn from_origin(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self::new(left, bottom + height, left + width, bottom)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.top - self.bottom
    }

    #[must_use]
    pub fn center(self) -> DataPoint {
        DataPoint::new(
            (self.left + self.right) * 0.5,
            (self.bottom + self.top) * 0.5,
        )
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }

    /// Finite with strictly positive width and height.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.is_finite() && self.width() > 0.0 && self.height() > 0.0
    }

    /// Both spans exceed `min_span`.
    #[must_use]
    pub fn has_min_span(self, min_span: f64) -> bool {
        self.is_finite() && self.width() > min_span && self.height() > min_span
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    #[must_use]
    pub fn contains_viewport(self, other: Self) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.bottom >= self.bottom
            && other.top <= self.top
    }

    #[must_use]
    pub fn contains_point(self, point: DataPoint) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.bottom
            && point.y <= self.top
    }
}

/// Rectangle in pixel space that the current viewport maps onto.
///
/// Pixel `y` grows downward, so `bottom >= top`. A zero-area rectangle is a
/// legal state: it is what undersized views degrade to.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ContentArea {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    #[must_use]
    pub fn contains(self, point: ScreenPoint) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}
