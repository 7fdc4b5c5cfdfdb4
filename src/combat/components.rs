//! Combat domain: obstacles and the goal trigger.

use bevy::prelude::*;

/// Hurts the player on contact, then is removed from the world
#[derive(Component, Debug, Clone, Copy)]
pub struct Obstacle {
    pub damage: u32,
}

/// Reaching this trigger clears the run
#[derive(Component, Debug, Clone, Copy)]
pub struct Goal;
