//! Core domain: core run flow systems and setup.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::LoadedConfig;
use crate::core::events::RunEndedEvent;
use crate::core::resources::{GameplayPaused, PausePolicy, RunConfig};
use crate::core::state::GameState;

/// World units are meters; this many pixels make one meter on screen.
const PIXELS_PER_UNIT: f32 = 48.0;

const RUN_ENDED_PAUSE_SOURCE: &str = "run_ended";

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(4.0, 1.0, 0.0),
    ));
}

/// Start the run once configuration is in place
pub(crate) fn transition_to_run(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Run);
}

/// Initialize a new run from the loaded configuration
pub(crate) fn initialize_run(
    config: Res<LoadedConfig>,
    mut run_config: ResMut<RunConfig>,
    mut policy: ResMut<PausePolicy>,
) {
    run_config.seed = config.0.course.seed;
    *policy = config.0.pause_policy;

    info!(
        "Starting new run with seed: {}, pause policy: {:?}",
        run_config.seed, *policy
    );
}

/// Freeze the simulation when the run ends
pub(crate) fn handle_run_ended(
    mut events: MessageReader<RunEndedEvent>,
    mut paused: ResMut<GameplayPaused>,
    policy: Res<PausePolicy>,
    mut physics_time: Option<ResMut<Time<Physics>>>,
) {
    for event in events.read() {
        info!("Run ended: {:?} ({:?})", event.outcome(), event.cause);
        if !paused.pause(RUN_ENDED_PAUSE_SOURCE) {
            debug!("Run already paused, ignoring repeated end");
            continue;
        }

        if policy.freezes_physics() {
            if let Some(physics_time) = physics_time.as_mut() {
                physics_time.pause();
            }
        }
    }
}
