//! Combat domain: collision classification for obstacles and the goal.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::components::{Goal, Obstacle};
use crate::combat::resources::PendingContacts;
use crate::movement::Player;
use crate::player::Contact;

/// What the other side of a player collision turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContactSource {
    Obstacle { damage: u32 },
    Goal,
}

/// Turn collision pairs into contacts for one player.
///
/// Each obstacle contributes at most once, even if it appears in several
/// pairs. Returns the contacts and the obstacles that must be removed.
pub(crate) fn classify_contacts(
    pairs: impl IntoIterator<Item = (Entity, Entity)>,
    player: Entity,
    mut lookup: impl FnMut(Entity) -> Option<ContactSource>,
) -> (Vec<Contact>, Vec<Entity>) {
    let mut contacts = Vec::new();
    let mut spent = Vec::new();

    for (a, b) in pairs {
        let other = if a == player {
            b
        } else if b == player {
            a
        } else {
            continue;
        };

        match lookup(other) {
            Some(ContactSource::Obstacle { damage }) => {
                if spent.contains(&other) {
                    continue;
                }
                spent.push(other);
                contacts.push(Contact::Obstacle { damage });
            }
            Some(ContactSource::Goal) => {
                if !contacts.contains(&Contact::Goal) {
                    contacts.push(Contact::Goal);
                }
            }
            None => {}
        }
    }

    (contacts, spent)
}

pub(crate) fn detect_player_contacts(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut pending: ResMut<PendingContacts>,
    player_query: Query<Entity, With<Player>>,
    obstacle_query: Query<&Obstacle>,
    goal_query: Query<(), With<Goal>>,
) {
    let Ok(player) = player_query.single() else {
        collision_events.clear();
        return;
    };

    let pairs = collision_events
        .read()
        .map(|event| (event.collider1, event.collider2));

    let (contacts, spent) = classify_contacts(pairs, player, |entity| {
        if let Ok(obstacle) = obstacle_query.get(entity) {
            Some(ContactSource::Obstacle {
                damage: obstacle.damage,
            })
        } else if goal_query.contains(entity) {
            Some(ContactSource::Goal)
        } else {
            None
        }
    });

    for entity in spent {
        debug!("Obstacle {:?} hit the player", entity);
        commands.entity(entity).despawn();
    }

    for contact in contacts {
        pending.push(contact);
    }
}
