//! UI domain: in-run HUD elements and the terminal banner.

mod hud_player;
mod outcome;

#[cfg(test)]
mod tests;

pub use hud_player::PlayerHealthText;
pub use outcome::OutcomeBannerUI;

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::PlayerTickSet;
use crate::ui::hud_player::{spawn_player_health_ui, update_player_health_text};
use crate::ui::outcome::show_outcome_banner;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Run), spawn_player_health_ui)
            .add_systems(
                Update,
                (update_player_health_text, show_outcome_banner).after(PlayerTickSet::Tick),
            );
    }
}
