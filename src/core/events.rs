//! Core domain: events for run flow.

use bevy::ecs::message::Message;

use crate::player::{EndCause, RunOutcome};

/// Event fired once, on the tick the run leaves `Playing`
#[derive(Debug, Clone, Copy)]
pub struct RunEndedEvent {
    pub cause: EndCause,
}

impl RunEndedEvent {
    pub fn outcome(&self) -> RunOutcome {
        self.cause.outcome()
    }
}

impl Message for RunEndedEvent {}
