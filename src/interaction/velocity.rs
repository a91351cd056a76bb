use std::time::Duration;

use smallvec::SmallVec;

use crate::core::ScreenPoint;

/// Samples older than this relative to the newest one are ignored.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// Estimates pointer velocity from recent move samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VelocityTracker {
    samples: SmallVec<[(Duration, ScreenPoint); 8]>,
}

impl VelocityTracker {
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn add(&mut self, time: Duration, position: ScreenPoint) {
        if let Some(&(last, _)) = self.samples.last()
            && time < last
        {
            self.samples.clear();
        }
        self.samples.push((time, position));
        self.samples
            .retain(|(sample_time, _)| time.saturating_sub(*sample_time) <= VELOCITY_WINDOW);
    }

    /// Velocity in pixels per second between the oldest and newest sample.
    #[must_use]
    pub fn velocity(&self) -> (f64, f64) {
        let (Some(&(first_time, first)), Some(&(last_time, last))) =
            (self.samples.first(), self.samples.last())
        else {
            return (0.0, 0.0);
        };
        let dt = last_time.saturating_sub(first_time).as_secs_f64();
        if dt <= 0.0 {
            return (0.0, 0.0);
        }
        ((last.x - first.x) / dt, (last.y - first.y) / dt)
    }
}
