//! Movement domain: input resources.

use bevy::prelude::*;

use crate::player::{FrameInput, SlideButton};

/// Button edges and levels for the two runner actions, sampled once per frame.
#[derive(Resource, Debug, Default)]
pub struct RunnerInput {
    pub jump_just_pressed: bool,
    pub slide_just_pressed: bool,
    pub slide_just_released: bool,
    pub slide_held: bool,
}

impl RunnerInput {
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            jump_pressed: self.jump_just_pressed,
            slide: SlideButton {
                pressed: self.slide_just_pressed,
                released: self.slide_just_released,
                held: self.slide_held,
            },
        }
    }
}
