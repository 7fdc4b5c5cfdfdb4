//! Movement domain: debug-only drawing helpers.

use bevy::prelude::*;

use crate::movement::Player;
use crate::player::PlayerFrame;

/// Draw the ground probe circle, green while grounded and yellow otherwise.
pub(crate) fn draw_ground_probe(mut gizmos: Gizmos, query: Query<&PlayerFrame, With<Player>>) {
    for frame in &query {
        let (Some(center), Some(probe)) = (
            frame.sensor().probe_center(frame.body.position),
            frame.sensor().probe,
        ) else {
            continue;
        };

        let color = if frame.grounded {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(1.0, 0.9, 0.1)
        };
        gizmos.circle_2d(center, probe.radius, color);
    }
}
