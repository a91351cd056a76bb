use crate::error::{ChartError, ChartResult};

/// Line color. Channels are normalized to `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    /// Opaque color.
    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    fn is_normalized(self) -> bool {
        [self.red, self.green, self.blue, self.alpha]
            .iter()
            .all(|channel| (0.0..=1.0).contains(channel))
    }
}

fn check_color(color: Color) -> ChartResult<()> {
    if color.is_normalized() {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "color channels must be in [0, 1], got {color:?}"
        )))
    }
}

fn check_positive(what: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} must be finite and > 0"
        )))
    }
}

/// One stroked segment of a series, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if ![self.x1, self.y1, self.x2, self.y2].iter().all(|v| v.is_finite()) {
            return Err(ChartError::InvalidData(
                "segment endpoints must be finite".to_owned(),
            ));
        }
        check_positive("stroke width", self.stroke_width)?;
        check_color(self.color)
    }
}

/// Filled circle in pixel space, used for point markers and selection halos.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, radius: f64, color: Color) -> Self {
        Self { x, y, radius, color }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        check_positive("circle radius", self.radius)?;
        check_color(self.color)
    }

    /// Same circle with its alpha multiplied by `factor`.
    #[must_use]
    pub fn faded(mut self, factor: f64) -> Self {
        self.color.alpha = (self.color.alpha * factor).clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{CirclePrimitive, Color, LinePrimitive};

    const BLUE: Color = Color::rgb(0.2, 0.7, 0.9);

    #[test]
    fn fading_scales_alpha_only() {
        let halo = CirclePrimitive::new(1.0, 2.0, 8.0, BLUE).faded(0.25);
        assert_eq!(halo.color.alpha, 0.25);
        assert_eq!(halo.color.red, BLUE.red);
        halo.validate().expect("faded halo is valid");
    }

    #[test]
    fn invalid_primitives_are_rejected() {
        assert!(LinePrimitive::new(0.0, 0.0, f64::NAN, 1.0, 1.0, BLUE).validate().is_err());
        assert!(LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 0.0, BLUE).validate().is_err());
        assert!(CirclePrimitive::new(0.0, 0.0, 2.0, Color::rgb(1.5, 0.0, 0.0)).validate().is_err());
    }
}
