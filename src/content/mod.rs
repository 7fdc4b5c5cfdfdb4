//! Content domain: data-driven run configuration.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{
    ColliderDef, CourseDef, GroundProbeDef, JumpDef, RunnerConfig, ScrollDef, SlideDef,
};
pub use loader::{ConfigLoadError, load_config, parse_config};
pub use validation::{ValidationWarning, validate_config};

use bevy::prelude::*;
use std::path::Path;

const CONFIG_PATH: &str = "assets/data/runner.ron";

/// The configuration the current run was started with.
#[derive(Resource, Debug, Clone, Default)]
pub struct LoadedConfig(pub RunnerConfig);

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LoadedConfig>()
            .add_systems(Startup, load_runner_config);
    }
}

fn load_runner_config(mut loaded: ResMut<LoadedConfig>) {
    let mut config = match load_config(Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using default runner config", e);
            RunnerConfig::default()
        }
    };

    for warning in validate_config(&mut config) {
        warn!("Runner config: {}", warning);
    }

    info!(
        "Runner config loaded: max_jumps={:?}, max_health={}, fall_y={}, slide={:?}",
        config.jump.max_jumps, config.max_health, config.fall_y, config.slide.trigger
    );
    loaded.0 = config;
}
