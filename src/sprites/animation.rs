//! Animation flags and the placeholder sprite look they drive.
//!
//! The player tick only raises flags; this module decides what they look
//! like on screen.

use bevy::prelude::*;

use crate::player::PlayerFrame;

/// Flags the player tick forwards to the animation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationFlag {
    Airborne,
    Sliding,
}

impl AnimationFlag {
    pub fn name(&self) -> &'static str {
        match self {
            AnimationFlag::Airborne => "airborne",
            AnimationFlag::Sliding => "sliding",
        }
    }
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationFlags {
    pub airborne: bool,
    pub sliding: bool,
}

impl AnimationFlags {
    pub fn set(&mut self, flag: AnimationFlag, value: bool) {
        match flag {
            AnimationFlag::Airborne => self.airborne = value,
            AnimationFlag::Sliding => self.sliding = value,
        }
    }

    pub fn get(&self, flag: AnimationFlag) -> bool {
        match flag {
            AnimationFlag::Airborne => self.airborne,
            AnimationFlag::Sliding => self.sliding,
        }
    }

    /// Sliding wins over airborne, so an edge-triggered slide in the air
    /// still reads as a slide.
    pub fn state(&self) -> AnimationState {
        if self.sliding {
            AnimationState::Slide
        } else if self.airborne {
            AnimationState::Jump
        } else {
            AnimationState::Run
        }
    }
}

/// Animation states for the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Run,
    Jump,
    Slide,
}

impl AnimationState {
    pub fn tint(&self) -> Color {
        match self {
            AnimationState::Run => Color::srgb(0.9, 0.9, 0.9),
            AnimationState::Jump => Color::srgb(0.75, 0.85, 1.0),
            AnimationState::Slide => Color::srgb(1.0, 0.8, 0.55),
        }
    }
}

/// Recolor and resize the placeholder sprite when the flags change.
pub(crate) fn apply_animation_state(
    mut query: Query<(&AnimationFlags, &PlayerFrame, &mut Sprite), Changed<AnimationFlags>>,
) {
    for (flags, frame, mut sprite) in &mut query {
        let state = flags.state();
        // Keep whatever opacity the sprite currently has
        let alpha = sprite.color.alpha();
        sprite.color = state.tint().with_alpha(alpha);
        sprite.custom_size = Some(frame.shape().size);

        debug!(
            "Animation: {}={}, {}={} -> {:?}",
            AnimationFlag::Airborne.name(),
            flags.airborne,
            AnimationFlag::Sliding.name(),
            flags.sliding,
            state
        );
    }
}
