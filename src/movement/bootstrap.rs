//! Movement domain: player bootstrap from the loaded configuration.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LoadedConfig;
use crate::movement::{GameLayer, Player, collider_for};
use crate::player::PlayerFrame;
use crate::sprites::AnimationFlags;

/// Player spawn point, a little above the first ground segment.
const SPAWN_POSITION: Vec2 = Vec2::new(0.0, 0.5);

/// Spawn the player for a new run.
/// This system runs on entering GameState::Run.
pub(crate) fn bootstrap_player(
    mut commands: Commands,
    config: Res<LoadedConfig>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let tuning = config.0.player_tuning();
    let shape = tuning.shape;

    info!(
        "Spawning player: health={}, jump_force={}, max_jumps={:?}, jump_height={:.2}, probe={:?}",
        tuning.max_health,
        tuning.jump.jump_force,
        tuning.jump.max_jumps,
        tuning.jump.single_jump_height(),
        tuning.probe
    );

    commands.spawn((
        // Identity & state
        (
            Player,
            PlayerFrame::new(tuning, SPAWN_POSITION),
            AnimationFlags::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(shape.size),
            ..default()
        },
        Transform::from_xyz(SPAWN_POSITION.x, SPAWN_POSITION.y, 1.0),
        Visibility::default(),
        // Physics
        (
            RigidBody::Dynamic,
            collider_for(&shape),
            // The world scrolls; the player only moves vertically
            LockedAxes::ROTATION_LOCKED.lock_translation_x(),
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is applied by the player tick
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Obstacle, GameLayer::Goal],
            ),
        ),
    ));
}
