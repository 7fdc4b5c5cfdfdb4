//! UI domain: player HUD health text.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::HealthChangedEvent;
use crate::content::LoadedConfig;
use crate::player::Health;

pub(crate) const HUD_PADDING: f32 = 16.0;

/// Marker for the player's HUD health text
#[derive(Component)]
pub struct PlayerHealthText;

/// Text color for the health readout: green -> yellow -> red
pub(crate) fn health_color(health: &Health) -> Color {
    let percent = health.percent();

    if percent > 0.5 {
        let t = (percent - 0.5) * 2.0;
        Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
    } else {
        let t = percent * 2.0;
        Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
    }
}

pub(crate) fn spawn_player_health_ui(mut commands: Commands, config: Res<LoadedConfig>) {
    let health = Health::new(config.0.max_health);
    commands.spawn((
        PlayerHealthText,
        Text::new(health.label()),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(health_color(&health)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            ..default()
        },
    ));
}

pub(crate) fn update_player_health_text(
    mut events: MessageReader<HealthChangedEvent>,
    mut text_query: Query<(&mut Text, &mut TextColor), With<PlayerHealthText>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    // No HUD bound: nothing to update
    let Ok((mut text, mut color)) = text_query.single_mut() else {
        return;
    };

    text.0 = event.health.label();
    color.0 = health_color(&event.health);
}
