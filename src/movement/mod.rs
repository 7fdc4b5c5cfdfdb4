//! Movement domain: input, player bootstrap and the per-frame player tick.

mod bootstrap;
mod components;
mod resources;
mod systems;

#[cfg(feature = "dev-tools")]
mod dev;


pub use components::{GameLayer, Ground, Player};
pub use resources::RunnerInput;

pub(crate) use systems::collider_for;

use bevy::prelude::*;

use crate::combat::detect_player_contacts;
use crate::core::GameState;
use crate::movement::bootstrap::bootstrap_player;
use crate::movement::systems::{read_input, run_player_frame};

/// Ordering of the per-frame player pipeline.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlayerTickSet {
    Input,
    Contacts,
    Tick,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunnerInput>()
            .configure_sets(
                Update,
                (
                    PlayerTickSet::Input,
                    PlayerTickSet::Contacts,
                    PlayerTickSet::Tick,
                )
                    .chain()
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(OnEnter(GameState::Run), bootstrap_player)
            .add_systems(Update, read_input.in_set(PlayerTickSet::Input))
            .add_systems(
                Update,
                detect_player_contacts.in_set(PlayerTickSet::Contacts),
            )
            .add_systems(Update, run_player_frame.in_set(PlayerTickSet::Tick));

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::draw_ground_probe);
    }
}
