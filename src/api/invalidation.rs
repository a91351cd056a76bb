use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::render::ChartRenderer;

use super::ChartEngine;

/// Ordered repaint classes. Merging keeps the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    /// Only unclipped overlays changed, e.g. the selection halo.
    Overlay,
    /// The current viewport moved; series must be reprojected.
    Viewport,
    /// Data or geometry changed; size-derived attributes are stale too.
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

/// What caused a repaint request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    Data,
    Viewport,
    Selection,
    Layout,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Data => 1 << 0,
            Self::Viewport => 1 << 1,
            Self::Selection => 1 << 2,
            Self::Layout => 1 << 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::Data.bit()
        | InvalidationTopic::Viewport.bit()
        | InvalidationTopic::Selection.bit()
        | InvalidationTopic::Layout.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}

/// Coalesced repaint request drained by the host once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationMask {
    level: InvalidationLevel,
    #[serde(default)]
    topics: InvalidationTopics,
}

impl InvalidationMask {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            level: InvalidationLevel::None,
            topics: InvalidationTopics::none(),
        }
    }

    #[must_use]
    pub const fn full() -> Self {
        Self {
            level: InvalidationLevel::Full,
            topics: InvalidationTopics::all(),
        }
    }

    /// Smallest mask that covers a change to `topic`.
    #[must_use]
    pub const fn for_topic(topic: InvalidationTopic) -> Self {
        let level = match topic {
            InvalidationTopic::Selection => InvalidationLevel::Overlay,
            InvalidationTopic::Viewport => InvalidationLevel::Viewport,
            InvalidationTopic::Data | InvalidationTopic::Layout => InvalidationLevel::Full,
        };
        Self {
            level,
            topics: InvalidationTopics::from_topic(topic),
        }
    }

    #[must_use]
    pub const fn level(self) -> InvalidationLevel {
        self.level
    }

    #[must_use]
    pub const fn topics(self) -> InvalidationTopics {
        self.topics
    }

    #[must_use]
    pub const fn has_topic(self, topic: InvalidationTopic) -> bool {
        self.topics.contains_topic(topic)
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self.level, InvalidationLevel::None)
    }

    pub fn merge(&mut self, other: Self) {
        self.level = self.level.max(other.level);
        self.topics = self.topics.union(other.topics);
    }
}

impl<R: ChartRenderer> ChartEngine<R> {
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationMask {
        self.pending
    }

    #[must_use]
    pub fn has_pending_invalidation(&self) -> bool {
        !self.pending.is_none()
    }

    /// Returns the accumulated request and resets it.
    pub fn take_pending_invalidation(&mut self) -> InvalidationMask {
        std::mem::take(&mut self.pending)
    }

    pub(super) fn request_redraw(&mut self, topic: InvalidationTopic) {
        let was_pending = self.has_pending_invalidation();
        self.pending.merge(InvalidationMask::for_topic(topic));
        trace!(?topic, level = ?self.pending.level(), was_pending, "redraw requested");
        if let Some(host) = self.redraw_host.as_mut() {
            host.request_redraw();
        }
    }
}
