use bevy::prelude::*;

use super::types::KeyBindings;
use crate::gameplay::cat::Cat;

/// Map key presses to the cat's direction. Unbound keys are ignored and
/// releases are never looked at, so the direction sticks until the next bound press.
pub fn system_apply_key_bindings(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    bindings: Res<KeyBindings>,
    mut q_cat: Query<&mut Cat>,
) {
    let Some(keys) = keys else { return; };
    for key in keys.get_just_pressed() {
        let Some(direction) = bindings.direction_for(*key) else { continue; };
        for mut cat in &mut q_cat {
            if cat.direction != direction {
                debug!(target: "input", "{:?} -> cat {:?}", key, direction);
                cat.direction = direction;
            }
        }
    }
}
