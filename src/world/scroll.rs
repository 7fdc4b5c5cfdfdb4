//! World domain: constant leftward scroll of the course.

use bevy::prelude::*;

/// Pieces further left than this have left the screen for good.
const DESPAWN_X: f32 = -20.0;

/// Moves an entity left at a constant speed while gameplay is active.
#[derive(Component, Debug, Clone, Copy)]
pub struct Scroll {
    pub speed: f32,
}

impl Scroll {
    pub fn step(&self, x: f32, dt: f32) -> f32 {
        x - self.speed * dt
    }
}

pub(crate) fn scroll_world(time: Res<Time>, mut query: Query<(&Scroll, &mut Transform)>) {
    let dt = time.delta_secs();
    for (scroll, mut transform) in &mut query {
        transform.translation.x = scroll.step(transform.translation.x, dt);
    }
}

pub(crate) fn despawn_passed_pieces(
    mut commands: Commands,
    query: Query<(Entity, &Transform), With<Scroll>>,
) {
    for (entity, transform) in &query {
        if transform.translation.x < DESPAWN_X {
            commands.entity(entity).despawn();
        }
    }
}
