//! Core domain: shared resources for pause control and run configuration.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active. Sources are never removed:
/// a paused run stays paused for the rest of its lifetime.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Returns true if this source was not already pausing gameplay.
    pub fn pause(&mut self, source: impl Into<String>) -> bool {
        self.sources.insert(source.into())
    }
}

/// Which systems honor the pause flag.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PausePolicy {
    /// Pause freezes the player tick and the world scroll.
    #[default]
    FullSimulation,
    /// Pause only stops the world scroll; the player keeps ticking.
    ScrollOnly,
}

impl PausePolicy {
    /// A full pause also stops rigid bodies mid-air.
    pub fn freezes_physics(&self) -> bool {
        *self == PausePolicy::FullSimulation
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

#[derive(Resource, Debug, Default)]
pub struct RunConfig {
    pub seed: u64,
}
