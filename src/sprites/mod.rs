//! Sprites module: animation flags for the runner's placeholder sprite.

pub mod animation;

use bevy::prelude::*;

pub use animation::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, apply_animation_state);
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimationFlag, AnimationFlags, AnimationState};

    #[test]
    fn test_flags_default_to_running() {
        let flags = AnimationFlags::default();
        assert_eq!(flags.state(), AnimationState::Run);
    }

    #[test]
    fn test_set_and_get_flags() {
        let mut flags = AnimationFlags::default();
        flags.set(AnimationFlag::Airborne, true);
        assert!(flags.get(AnimationFlag::Airborne));
        assert_eq!(flags.state(), AnimationState::Jump);

        flags.set(AnimationFlag::Sliding, true);
        assert_eq!(flags.state(), AnimationState::Slide);

        flags.set(AnimationFlag::Sliding, false);
        flags.set(AnimationFlag::Airborne, false);
        assert_eq!(flags, AnimationFlags::default());
    }

    #[test]
    fn test_flag_names() {
        assert_eq!(AnimationFlag::Airborne.name(), "airborne");
        assert_eq!(AnimationFlag::Sliding.name(), "sliding");
    }
}
