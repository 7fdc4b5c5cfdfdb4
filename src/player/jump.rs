//! Player domain: jump budget and vertical motion.

use bevy::prelude::*;

/// How many jumps may be chained before the player has to land again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpBudget {
    Limited(u32),
    /// Every press jumps, grounded or not.
    Unlimited,
}

impl JumpBudget {
    pub fn allows(&self, jump_count: u32) -> bool {
        match self {
            JumpBudget::Limited(max) => jump_count < *max,
            JumpBudget::Unlimited => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JumpTuning {
    /// Upward impulse applied per jump.
    pub jump_force: f32,
    pub max_jumps: JumpBudget,
    /// Body mass used to turn the impulse into a velocity change.
    pub mass: f32,
    /// Downward acceleration, applied every tick.
    pub gravity: f32,
    /// Hard floor for bodies without ground colliders.
    pub floor_y: Option<f32>,
    /// Keep the jump count while sliding on the ground.
    pub sliding_suppresses_reset: bool,
    pub sliding_blocks_jump: bool,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            jump_force: 12.0,
            max_jumps: JumpBudget::Limited(2),
            mass: 1.0,
            gravity: 30.0,
            floor_y: None,
            sliding_suppresses_reset: false,
            sliding_blocks_jump: false,
        }
    }
}

impl JumpTuning {
    /// Fixed-speed jumping against a flat floor: no budget, no ground check.
    pub fn floor_bound(jump_speed: f32, gravity: f32, floor_y: f32) -> Self {
        Self {
            jump_force: jump_speed,
            max_jumps: JumpBudget::Unlimited,
            mass: 1.0,
            gravity,
            floor_y: Some(floor_y),
            sliding_suppresses_reset: false,
            sliding_blocks_jump: false,
        }
    }

    /// Vertical speed right after a jump.
    pub fn launch_speed(&self) -> f32 {
        if self.mass > 0.0 {
            self.jump_force / self.mass
        } else {
            self.jump_force
        }
    }

    /// Apex height of a single jump: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        let v = self.launch_speed();
        v * v / (2.0 * self.gravity)
    }
}

/// Kinematic state the locomotion step reads and writes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JumpState {
    pub jump_count: u32,
}

impl JumpState {
    /// Resets the budget while grounded and not rising. Returns true when a
    /// spent budget was restored.
    ///
    /// Ground contact can linger for a few ticks after a jump; upward
    /// velocity keeps those ticks from handing the budget back.
    pub fn refresh(
        &mut self,
        grounded: bool,
        vertical_speed: f32,
        sliding: bool,
        tuning: &JumpTuning,
    ) -> bool {
        if !grounded || vertical_speed > 0.0 || (sliding && tuning.sliding_suppresses_reset) {
            return false;
        }
        let had_jumped = self.jump_count > 0;
        self.jump_count = 0;
        had_jumped
    }

    /// Spends one jump if the budget allows it.
    ///
    /// Vertical velocity is zeroed before the impulse so every jump reaches
    /// the same height no matter how fast the body was falling.
    pub fn try_jump(&mut self, body: &mut Body, sliding: bool, tuning: &JumpTuning) -> bool {
        if sliding && tuning.sliding_blocks_jump {
            return false;
        }
        if !tuning.max_jumps.allows(self.jump_count) {
            return false;
        }

        body.velocity.y = 0.0;
        body.velocity.y += tuning.launch_speed();
        if matches!(tuning.max_jumps, JumpBudget::Limited(_)) {
            self.jump_count += 1;
        }
        true
    }
}

/// Applies gravity for one tick and clamps the body to the floor, if any.
/// Returns true when the floor stopped the body this tick.
pub fn integrate_vertical(body: &mut Body, tuning: &JumpTuning, dt: f32) -> bool {
    if let Some(floor_y) = tuning.floor_y {
        if body.position.y < floor_y {
            body.position.y = floor_y;
            body.velocity.y = 0.0;
            return true;
        }
    }

    body.velocity.y -= tuning.gravity * dt;
    false
}
