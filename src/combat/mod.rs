//! Combat domain: obstacle damage and goal contacts.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Goal, Obstacle};
pub use events::HealthChangedEvent;
pub use resources::PendingContacts;

pub(crate) use systems::detect_player_contacts;

use bevy::prelude::*;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingContacts>()
            .add_message::<HealthChangedEvent>();
    }
}
