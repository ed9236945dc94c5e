//! Modifier resolution from hardware key events

use crate::types::{HardwareKeyEvent, KeyEventKind};

use super::state::KeyboardState;

/// Applies a hardware key transition to the modifier flags.
///
/// Returns a new state; the input is never mutated and buffer/caret are
/// untouched. The combined shift flag always mirrors the event's
/// hardware-reported value; the per-side flags follow down/up transitions
/// of the matching shift key only.
///
/// CapsLock is mirrored from the hardware-reported value on *every*
/// event, not only CapsLock keystrokes: the lock can be toggled while
/// this instance is not observing (before focus, for example), so the
/// stored value is never flipped internally, only overwritten with
/// hardware truth.
pub fn resolve(state: &KeyboardState, event: &HardwareKeyEvent) -> KeyboardState {
    let mut next = state.clone();
    next.shift_pressed = event.shift;
    let held = event.kind == KeyEventKind::Down;
    match event.code.as_str() {
        "ShiftLeft" => next.left_shift_pressed = held,
        "ShiftRight" => next.right_shift_pressed = held,
        _ => {}
    }
    next.caps_lock_on = event.caps_lock;
    next
}
