//! Movement domain: system modules for the runner tick.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::collider_for;
pub(crate) use input::read_input;
pub(crate) use movement::run_player_frame;
