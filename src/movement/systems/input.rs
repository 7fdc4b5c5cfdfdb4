//! Movement domain: input sampling for the runner actions.

use bevy::prelude::*;

use crate::movement::RunnerInput;

const JUMP_KEYS: [KeyCode; 1] = [KeyCode::Space];
const SLIDE_KEYS: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::ShiftRight];

pub(crate) fn read_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut input: ResMut<RunnerInput>,
) {
    // No keyboard this frame means no input, not an error
    let Some(keyboard) = keyboard else {
        *input = RunnerInput::default();
        return;
    };

    input.jump_just_pressed = keyboard.any_just_pressed(JUMP_KEYS);

    input.slide_just_pressed = keyboard.any_just_pressed(SLIDE_KEYS);
    input.slide_just_released =
        keyboard.any_just_released(SLIDE_KEYS) && !keyboard.any_pressed(SLIDE_KEYS);
    input.slide_held = keyboard.any_pressed(SLIDE_KEYS);
}
