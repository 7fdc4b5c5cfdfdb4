//! Combat domain: tests for contact classification.

use bevy::prelude::Entity;

use super::systems::{ContactSource, classify_contacts};
use crate::player::Contact;

fn entity(bits: u64) -> Entity {
    Entity::from_bits(bits)
}

fn lookup(target: Entity) -> Option<ContactSource> {
    match target.to_bits() {
        10 => Some(ContactSource::Obstacle { damage: 1 }),
        11 => Some(ContactSource::Obstacle { damage: 2 }),
        20 => Some(ContactSource::Goal),
        _ => None,
    }
}

#[test]
fn test_obstacle_contacts_in_either_order() {
    let player = entity(1);
    let pairs = [(player, entity(10)), (entity(11), player)];

    let (contacts, spent) = classify_contacts(pairs, player, lookup);
    assert_eq!(
        contacts,
        vec![
            Contact::Obstacle { damage: 1 },
            Contact::Obstacle { damage: 2 }
        ]
    );
    assert_eq!(spent, vec![entity(10), entity(11)]);
}

#[test]
fn test_same_obstacle_damages_once() {
    let player = entity(1);
    let pairs = [(player, entity(10)), (entity(10), player), (player, entity(10))];

    let (contacts, spent) = classify_contacts(pairs, player, lookup);
    assert_eq!(contacts, vec![Contact::Obstacle { damage: 1 }]);
    assert_eq!(spent, vec![entity(10)]);
}

#[test]
fn test_goal_contact_is_not_removed() {
    let player = entity(1);
    let pairs = [(player, entity(20)), (entity(20), player)];

    let (contacts, spent) = classify_contacts(pairs, player, lookup);
    assert_eq!(contacts, vec![Contact::Goal]);
    assert!(spent.is_empty());
}

#[test]
fn test_pairs_without_player_are_ignored() {
    let player = entity(1);
    let pairs = [(entity(10), entity(20)), (player, entity(30))];

    let (contacts, spent) = classify_contacts(pairs, player, lookup);
    assert!(contacts.is_empty());
    assert!(spent.is_empty());
}
