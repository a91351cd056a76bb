use crate::core::ContentArea;
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, LinePrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// `lines` and `markers` belong to the clipped pass and must be clipped to
/// `clip` by whatever backend rasterizes the frame. `overlay` comes from the
/// unclipped pass and may extend past it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderFrame {
    pub clip: ContentArea,
    pub lines: Vec<LinePrimitive>,
    pub markers: Vec<CirclePrimitive>,
    pub overlay: Vec<CirclePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(clip: ContentArea) -> Self {
        Self {
            clip,
            ..Self::default()
        }
    }

    /// Empties the frame so it can be reused for the next pass.
    pub fn reset(&mut self, clip: ContentArea) {
        self.clip = clip;
        self.lines.clear();
        self.markers.clear();
        self.overlay.clear();
    }

    pub fn validate(&self) -> ChartResult<()> {
        for line in &self.lines {
            line.validate()?;
        }
        for marker in self.markers.iter().chain(&self.overlay) {
            marker.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.markers.is_empty() && self.overlay.is_empty()
    }
}
