//! World domain: seeded course layout and spawning.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::combat::{Goal, Obstacle};
use crate::content::{CourseDef, LoadedConfig};
use crate::core::RunConfig;
use crate::movement::{GameLayer, Ground};
use crate::world::Scroll;

const GROUND_THICKNESS: f32 = 1.0;
/// Segments at the start that never hold gaps or obstacles
const SAFE_SEGMENTS: u32 = 2;

const LOW_OBSTACLE_SIZE: Vec2 = Vec2::new(0.5, 0.6);
/// Bar hanging at head height: clears a slide, blocks a standing runner
const HIGH_OBSTACLE_SIZE: Vec2 = Vec2::new(0.8, 0.6);
const HIGH_OBSTACLE_CLEARANCE: f32 = 0.7;
const GOAL_SIZE: Vec2 = Vec2::new(0.5, 6.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Sits on the ground; jump over it
    Low,
    /// Hangs above the ground; slide under it
    High,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PieceKind {
    Ground,
    Obstacle { kind: ObstacleKind, damage: u32 },
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoursePiece {
    pub kind: PieceKind,
    pub center: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseLayout {
    pub pieces: Vec<CoursePiece>,
}

impl CourseLayout {
    /// Build a course from a seed. The same seed and settings always give
    /// the same layout.
    pub fn generate(seed: u64, settings: &CourseDef) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let gap_chance = settings.gap_chance.clamp(0.0, 1.0) as f64;
        let obstacle_chance = settings.obstacle_chance.clamp(0.0, 1.0) as f64;
        let length = settings.segment_length;
        let ground_top = settings.ground_y;

        let mut pieces = Vec::new();
        let mut previous_was_gap = false;

        for index in 0..settings.segment_count {
            let x = index as f32 * length;
            let is_last = index + 1 == settings.segment_count;
            let safe = index < SAFE_SEGMENTS || is_last;

            if !safe && !previous_was_gap && rng.random_bool(gap_chance) {
                previous_was_gap = true;
                continue;
            }
            previous_was_gap = false;

            pieces.push(CoursePiece {
                kind: PieceKind::Ground,
                center: Vec2::new(x, ground_top - GROUND_THICKNESS * 0.5),
                size: Vec2::new(length, GROUND_THICKNESS),
            });

            if !safe && rng.random_bool(obstacle_chance) {
                let kind = if rng.random_bool(0.5) {
                    ObstacleKind::Low
                } else {
                    ObstacleKind::High
                };
                let (size, bottom) = match kind {
                    ObstacleKind::Low => (LOW_OBSTACLE_SIZE, ground_top),
                    ObstacleKind::High => {
                        (HIGH_OBSTACLE_SIZE, ground_top + HIGH_OBSTACLE_CLEARANCE)
                    }
                };
                pieces.push(CoursePiece {
                    kind: PieceKind::Obstacle {
                        kind,
                        damage: settings.obstacle_damage,
                    },
                    center: Vec2::new(x, bottom + size.y * 0.5),
                    size,
                });
            }
        }

        let goal_x = settings.segment_count as f32 * length;
        pieces.push(CoursePiece {
            kind: PieceKind::Ground,
            center: Vec2::new(goal_x, ground_top - GROUND_THICKNESS * 0.5),
            size: Vec2::new(length, GROUND_THICKNESS),
        });
        pieces.push(CoursePiece {
            kind: PieceKind::Goal,
            center: Vec2::new(goal_x, ground_top + GOAL_SIZE.y * 0.5),
            size: GOAL_SIZE,
        });

        Self { pieces }
    }

    pub fn obstacle_count(&self) -> usize {
        self.pieces
            .iter()
            .filter(|piece| matches!(piece.kind, PieceKind::Obstacle { .. }))
            .count()
    }
}

pub(crate) fn spawn_course(
    mut commands: Commands,
    config: Res<LoadedConfig>,
    run_config: Res<RunConfig>,
) {
    let layout = CourseLayout::generate(run_config.seed, &config.0.course);
    let speed = config.0.scroll.speed;

    info!(
        "Spawning course: {} pieces, {} obstacles, seed {}",
        layout.pieces.len(),
        layout.obstacle_count(),
        run_config.seed
    );

    for piece in &layout.pieces {
        let base = (
            Scroll { speed },
            Sprite {
                color: piece_color(&piece.kind),
                custom_size: Some(piece.size),
                ..default()
            },
            Transform::from_xyz(piece.center.x, piece.center.y, 0.0),
            RigidBody::Kinematic,
            Collider::rectangle(piece.size.x, piece.size.y),
        );

        match piece.kind {
            PieceKind::Ground => {
                commands.spawn((
                    base,
                    Ground,
                    CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
                ));
            }
            PieceKind::Obstacle { damage, .. } => {
                commands.spawn((
                    base,
                    Obstacle { damage },
                    Sensor,
                    CollisionLayers::new(GameLayer::Obstacle, [GameLayer::Player]),
                ));
            }
            PieceKind::Goal => {
                commands.spawn((
                    base,
                    Goal,
                    Sensor,
                    CollisionLayers::new(GameLayer::Goal, [GameLayer::Player]),
                ));
            }
        }
    }
}

fn piece_color(kind: &PieceKind) -> Color {
    match kind {
        PieceKind::Ground => Color::srgb(0.4, 0.5, 0.4),
        PieceKind::Obstacle {
            kind: ObstacleKind::Low,
            ..
        } => Color::srgb(0.8, 0.3, 0.3),
        PieceKind::Obstacle {
            kind: ObstacleKind::High,
            ..
        } => Color::srgb(0.9, 0.5, 0.2),
        PieceKind::Goal => Color::srgba(0.95, 0.85, 0.3, 0.6),
    }
}
