//! Core domain: run flow, pause control and camera.

mod events;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use events::RunEndedEvent;
pub use resources::{GameplayPaused, PausePolicy, RunConfig, gameplay_active};
pub use state::GameState;

pub(crate) use systems::{handle_run_ended, initialize_run};

use bevy::prelude::*;

use crate::core::systems::{setup_camera, transition_to_run};
use crate::movement::PlayerTickSet;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .init_resource::<GameplayPaused>()
            .init_resource::<PausePolicy>()
            .add_message::<RunEndedEvent>()
            .add_systems(Startup, (setup_camera, transition_to_run))
            .add_systems(OnEnter(GameState::Run), initialize_run)
            .add_systems(Update, handle_run_ended.after(PlayerTickSet::Tick));
    }
}
