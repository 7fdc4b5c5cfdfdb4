//! Data definitions for the runner configuration file.
//!
//! These structs mirror assets/data/runner.ron. Every section has defaults,
//! so a file only needs the values it overrides.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::PausePolicy;
use crate::player::{
    ColliderShape, GroundProbe, JumpBudget, JumpTuning, PlayerTuning, SlideTrigger, SlideTuning,
};

// ============================================================================
// Top level (runner.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub schema_version: u32,
    pub jump: JumpDef,
    pub slide: SlideDef,
    /// `None` disables ground sensing entirely.
    pub ground_probe: Option<GroundProbeDef>,
    pub collider: ColliderDef,
    pub max_health: u32,
    pub fall_y: f32,
    pub pause_policy: PausePolicy,
    pub scroll: ScrollDef,
    pub course: CourseDef,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            jump: JumpDef::default(),
            slide: SlideDef::default(),
            ground_probe: Some(GroundProbeDef::default()),
            collider: ColliderDef::default(),
            max_health: 3,
            fall_y: -6.0,
            pause_policy: PausePolicy::FullSimulation,
            scroll: ScrollDef::default(),
            course: CourseDef::default(),
        }
    }
}

impl RunnerConfig {
    pub fn player_tuning(&self) -> PlayerTuning {
        PlayerTuning {
            jump: self.jump.tuning(),
            slide: self.slide.tuning(),
            probe: self.ground_probe.as_ref().map(GroundProbeDef::probe),
            shape: self.collider.shape(),
            max_health: self.max_health,
            fall_y: self.fall_y,
        }
    }
}

// ============================================================================
// Jump
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct JumpDef {
    pub jump_force: f32,
    /// `None` means unlimited jumps.
    pub max_jumps: Option<u32>,
    pub mass: f32,
    pub gravity: f32,
    pub floor_y: Option<f32>,
    pub sliding_suppresses_reset: bool,
    pub sliding_blocks_jump: bool,
}

impl Default for JumpDef {
    fn default() -> Self {
        Self {
            jump_force: 12.0,
            max_jumps: Some(2),
            mass: 1.0,
            gravity: 30.0,
            floor_y: None,
            sliding_suppresses_reset: false,
            sliding_blocks_jump: false,
        }
    }
}

impl JumpDef {
    pub fn tuning(&self) -> JumpTuning {
        JumpTuning {
            jump_force: self.jump_force,
            max_jumps: match self.max_jumps {
                Some(max) => JumpBudget::Limited(max),
                None => JumpBudget::Unlimited,
            },
            mass: self.mass,
            gravity: self.gravity,
            floor_y: self.floor_y,
            sliding_suppresses_reset: self.sliding_suppresses_reset,
            sliding_blocks_jump: self.sliding_blocks_jump,
        }
    }
}

// ============================================================================
// Slide
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SlideDef {
    pub trigger: SlideTrigger,
    pub height_ratio: f32,
    pub offset_down_ratio: f32,
}

impl Default for SlideDef {
    fn default() -> Self {
        Self {
            trigger: SlideTrigger::EdgeTriggered,
            height_ratio: 0.55,
            offset_down_ratio: 0.2,
        }
    }
}

impl SlideDef {
    pub fn tuning(&self) -> SlideTuning {
        SlideTuning {
            trigger: self.trigger,
            height_ratio: self.height_ratio,
            offset_down_ratio: self.offset_down_ratio,
        }
    }
}

// ============================================================================
// Geometry
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroundProbeDef {
    pub offset_x: f32,
    pub offset_y: f32,
    pub radius: f32,
}

impl Default for GroundProbeDef {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: -0.5,
            radius: 0.15,
        }
    }
}

impl GroundProbeDef {
    pub fn probe(&self) -> GroundProbe {
        GroundProbe {
            offset: Vec2::new(self.offset_x, self.offset_y),
            radius: self.radius,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColliderDef {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for ColliderDef {
    fn default() -> Self {
        Self {
            width: 0.5,
            height: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ColliderDef {
    pub fn shape(&self) -> ColliderShape {
        ColliderShape::new(
            Vec2::new(self.width, self.height),
            Vec2::new(self.offset_x, self.offset_y),
        )
    }
}

// ============================================================================
// World
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollDef {
    /// World units per second the course moves left.
    pub speed: f32,
}

impl Default for ScrollDef {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CourseDef {
    pub seed: u64,
    pub segment_count: u32,
    pub segment_length: f32,
    pub ground_y: f32,
    /// Chance that a segment after the first is replaced by a pit.
    pub gap_chance: f32,
    /// Chance that a ground segment carries an obstacle.
    pub obstacle_chance: f32,
    pub obstacle_damage: u32,
}

impl Default for CourseDef {
    fn default() -> Self {
        Self {
            seed: 7,
            segment_count: 24,
            segment_length: 4.0,
            ground_y: -1.0,
            gap_chance: 0.15,
            obstacle_chance: 0.45,
            obstacle_damage: 1,
        }
    }
}
