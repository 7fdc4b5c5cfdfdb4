//! UI domain: terminal banner for game over and stage clear.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::RunEndedEvent;
use crate::player::RunOutcome;

/// Marker for the terminal banner overlay
#[derive(Component)]
pub struct OutcomeBannerUI;

/// Text and color shown when the run ends. `None` while still playing.
pub(crate) fn banner_for(outcome: RunOutcome) -> Option<(&'static str, Color)> {
    match outcome {
        RunOutcome::Playing => None,
        RunOutcome::GameOver => Some(("GAME OVER", Color::WHITE)),
        RunOutcome::Cleared => Some(("STAGE CLEAR!", Color::srgb(0.95, 0.85, 0.3))),
    }
}

pub(crate) fn show_outcome_banner(
    mut commands: Commands,
    mut events: MessageReader<RunEndedEvent>,
    existing_banner: Query<Entity, With<OutcomeBannerUI>>,
) {
    let Some(event) = events.read().next() else {
        return;
    };

    // Only one banner per run
    if !existing_banner.is_empty() {
        return;
    }

    let Some((text, color)) = banner_for(event.outcome()) else {
        return;
    };

    commands
        .spawn((
            OutcomeBannerUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            // High z-index to be on top of everything
            ZIndex(100),
        ))
        .with_child((
            Text::new(text),
            TextFont {
                font_size: 72.0,
                ..default()
            },
            TextColor(color),
        ));
}
