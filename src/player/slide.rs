//! Player domain: slide posture and collider reshaping.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Collider geometry: full size plus the offset from the body origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderShape {
    pub size: Vec2,
    pub offset: Vec2,
}

impl ColliderShape {
    pub fn new(size: Vec2, offset: Vec2) -> Self {
        Self { size, offset }
    }

    /// Crouched shape derived from the original: shorter, shifted down.
    pub fn slid(original: &ColliderShape, tuning: &SlideTuning) -> ColliderShape {
        ColliderShape {
            size: Vec2::new(original.size.x, original.size.y * tuning.height_ratio),
            offset: Vec2::new(
                original.offset.x,
                original.offset.y - original.size.y * tuning.offset_down_ratio,
            ),
        }
    }

    /// The restoration target is always the captured original itself.
    pub fn restored(original: &ColliderShape) -> ColliderShape {
        *original
    }
}

/// When the slide button starts a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlideTrigger {
    /// Press starts, release ends, grounded or not.
    #[default]
    EdgeTriggered,
    /// Holding starts (or re-asserts) the slide on every grounded tick.
    HeldWhileGrounded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideTuning {
    pub trigger: SlideTrigger,
    /// Fraction of the original height kept while sliding.
    pub height_ratio: f32,
    /// Downward offset shift, as a fraction of the original height.
    pub offset_down_ratio: f32,
}

impl Default for SlideTuning {
    fn default() -> Self {
        Self {
            trigger: SlideTrigger::EdgeTriggered,
            height_ratio: 0.55,
            offset_down_ratio: 0.2,
        }
    }
}

/// Slide button state for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlideButton {
    pub pressed: bool,
    pub released: bool,
    pub held: bool,
}

/// What the slide step decided this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideChange {
    Started,
    Ended,
}

/// Owns the current collider shape and the immutable original.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideState {
    original: ColliderShape,
    shape: ColliderShape,
    is_sliding: bool,
}

impl SlideState {
    pub fn new(original: ColliderShape) -> Self {
        Self {
            original,
            shape: original,
            is_sliding: false,
        }
    }

    pub fn is_sliding(&self) -> bool {
        self.is_sliding
    }

    pub fn shape(&self) -> ColliderShape {
        self.shape
    }

    pub fn original(&self) -> ColliderShape {
        self.original
    }

    /// No-op when already sliding.
    pub fn start(&mut self, tuning: &SlideTuning) -> bool {
        if self.is_sliding {
            return false;
        }
        self.is_sliding = true;
        self.shape = ColliderShape::slid(&self.original, tuning);
        true
    }

    /// No-op when not sliding.
    pub fn end(&mut self) -> bool {
        if !self.is_sliding {
            return false;
        }
        self.is_sliding = false;
        self.shape = ColliderShape::restored(&self.original);
        true
    }

    /// Applies the configured trigger policy to this tick's button state.
    ///
    /// A press and release in the same tick nets out to no slide.
    pub fn update(
        &mut self,
        button: SlideButton,
        grounded: bool,
        tuning: &SlideTuning,
    ) -> Option<SlideChange> {
        let wants_start = match tuning.trigger {
            SlideTrigger::EdgeTriggered => button.pressed,
            SlideTrigger::HeldWhileGrounded => (button.held || button.pressed) && grounded,
        };

        let started = wants_start && self.start(tuning);
        let ended = button.released && self.end();

        match (started, ended) {
            (true, false) => Some(SlideChange::Started),
            (false, true) => Some(SlideChange::Ended),
            _ => None,
        }
    }
}
