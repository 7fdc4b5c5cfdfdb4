//! Combat domain: combat-related events.

use bevy::ecs::message::Message;

use crate::player::Health;

/// Event emitted whenever damage changes the player's health
#[derive(Debug, Clone, Copy)]
pub struct HealthChangedEvent {
    pub health: Health,
}

impl Message for HealthChangedEvent {}
