//! Movement domain: the per-frame player tick bridging ECS and the core.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{HealthChangedEvent, PendingContacts};
use crate::core::{GameplayPaused, PausePolicy, RunEndedEvent};
use crate::movement::systems::collisions::{collider_for, probe_ground};
use crate::movement::{Player, RunnerInput};
use crate::player::{PlayerFrame, SlideChange, TickContext};
use crate::sprites::{AnimationFlag, AnimationFlags};

pub(crate) fn run_player_frame(
    time: Res<Time>,
    input: Res<RunnerInput>,
    paused: Res<GameplayPaused>,
    policy: Res<PausePolicy>,
    spatial_query: SpatialQuery,
    mut pending: ResMut<PendingContacts>,
    mut health_events: MessageWriter<HealthChangedEvent>,
    mut run_ended_events: MessageWriter<RunEndedEvent>,
    mut query: Query<
        (
            &mut PlayerFrame,
            &mut Transform,
            &mut LinearVelocity,
            &mut Collider,
            Option<&mut AnimationFlags>,
            Option<&mut Sprite>,
            Option<&mut Visibility>,
        ),
        With<Player>,
    >,
) {
    let contacts = pending.take();
    let Ok((mut frame, mut transform, mut velocity, mut collider, flags, sprite, visibility)) =
        query.single_mut()
    else {
        return;
    };

    let ctx = TickContext {
        delta_secs: time.delta_secs(),
        paused: paused.is_paused(),
        pause_policy: *policy,
    };

    let position = transform.translation.truncate();
    frame.body.position = position;
    frame.body.velocity = velocity.0;

    let ground = |point: Vec2, radius: f32| probe_ground(&spatial_query, point, radius);
    let report = frame.tick(&ctx, &input.frame_input(), &contacts, &ground);
    if report.skipped {
        return;
    }

    velocity.0 = frame.body.velocity;
    if frame.body.position != position {
        transform.translation.x = frame.body.position.x;
        transform.translation.y = frame.body.position.y;
    }

    if report.landed {
        debug!("Landed at y={:.2}", frame.body.position.y);
    }
    if report.budget_restored {
        debug!("Jump budget restored: jump_count={}", frame.jump_count());
    }
    if report.jumped {
        debug!(
            "Jump: jump_count now {}, velocity.y={:.2}",
            frame.jump_count(),
            velocity.y
        );
    }

    if let Some(shape) = report.shape_change {
        *collider = collider_for(&shape);
    }
    match report.slide_change {
        Some(SlideChange::Started) => debug!("Slide started: collider {:?}", frame.shape()),
        Some(SlideChange::Ended) => debug!("Slide ended: collider restored"),
        None => {}
    }

    if report.restore_opacity {
        if let Some(mut sprite) = sprite {
            sprite.color.set_alpha(1.0);
        }
        if let Some(mut visibility) = visibility {
            *visibility = Visibility::Inherited;
        }
    }

    if let Some(mut flags) = flags {
        let mut next = *flags;
        next.set(AnimationFlag::Airborne, report.airborne);
        next.set(AnimationFlag::Sliding, report.sliding);
        flags.set_if_neq(next);
    }

    if let Some(current) = report.health_changed {
        debug!("Player took damage, health now {}", current);
        health_events.write(HealthChangedEvent {
            health: *frame.health(),
        });
    }

    if let Some(cause) = report.ended {
        run_ended_events.write(RunEndedEvent { cause });
    }
}
