use std::time::Duration;

use smallvec::{SmallVec, smallvec};

use crate::core::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPointer {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

impl TouchPointer {
    #[must_use]
    pub const fn new(id: u32, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    #[must_use]
    pub fn position(self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }
}

/// Pointer action carried by a [`TouchEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    /// First pointer went down.
    Down,
    /// An additional pointer went down.
    PointerDown { id: u32 },
    Move,
    /// A non-last pointer went up; it is still listed in `pointers`.
    PointerUp { id: u32 },
    /// Last pointer went up.
    Up,
    Cancel,
}

/// Raw pointer event forwarded by the host.
///
/// `pointers` lists every pointer that is down during the event, with its
/// position in view pixels. `time` is a monotonic timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub pointers: SmallVec<[TouchPointer; 2]>,
    pub time: Duration,
}

impl TouchEvent {
    #[must_use]
    pub fn new(action: TouchAction, pointers: &[TouchPointer], time: Duration) -> Self {
        Self {
            action,
            pointers: SmallVec::from_slice(pointers),
            time,
        }
    }

    #[must_use]
    pub fn down(time: Duration, x: f64, y: f64) -> Self {
        Self::single(TouchAction::Down, time, x, y)
    }

    #[must_use]
    pub fn move_to(time: Duration, x: f64, y: f64) -> Self {
        Self::single(TouchAction::Move, time, x, y)
    }

    #[must_use]
    pub fn up(time: Duration, x: f64, y: f64) -> Self {
        Self::single(TouchAction::Up, time, x, y)
    }

    #[must_use]
    pub fn cancel(time: Duration) -> Self {
        Self {
            action: TouchAction::Cancel,
            pointers: SmallVec::new(),
            time,
        }
    }

    fn single(action: TouchAction, time: Duration, x: f64, y: f64) -> Self {
        Self {
            action,
            pointers: smallvec![TouchPointer::new(0, x, y)],
            time,
        }
    }

    #[must_use]
    pub fn primary(&self) -> Option<TouchPointer> {
        self.pointers.first().copied()
    }

    #[must_use]
    pub fn pointer(&self, id: u32) -> Option<TouchPointer> {
        self.pointers.iter().copied().find(|pointer| pointer.id == id)
    }
}
