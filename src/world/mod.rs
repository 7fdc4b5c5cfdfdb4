//! World domain: the scrolling course the runner moves through.

mod course;
mod scroll;

#[cfg(test)]
mod tests;

pub use course::{CourseLayout, CoursePiece, ObstacleKind, PieceKind};
pub use scroll::Scroll;

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active, handle_run_ended, initialize_run};
use crate::world::course::spawn_course;
use crate::world::scroll::{despawn_passed_pieces, scroll_world};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Run), spawn_course.after(initialize_run))
            .add_systems(
                Update,
                (scroll_world, despawn_passed_pieces)
                    .chain()
                    .after(handle_run_ended)
                    .run_if(in_state(GameState::Run))
                    .run_if(gameplay_active),
            );
    }
}
