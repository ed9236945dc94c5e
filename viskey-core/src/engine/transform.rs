//! Character transformation and layout-grid selection
//!
//! Letters and symbols are governed by different predicates. Letters
//! follow `effective_shift` (Shift XOR CapsLock), matching physical
//! keyboard firmware where holding Shift under CapsLock cancels out.
//! Symbols follow the shift map iff Shift alone is held; CapsLock never
//! affects them. The displayed grid reuses `effective_shift`.

use crate::types::layout::shifted_symbol;

use super::state::KeyboardState;

/// Which glyph grid is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutGrid {
    Default,
    Shift,
}

/// Transforms a raw glyph according to the current modifier flags.
///
/// Alphabetic input is case-insensitive on the way in; the output case is
/// decided entirely by `effective_shift`.
pub fn transform_char(raw: char, state: &KeyboardState) -> char {
    if raw.is_ascii_alphabetic() {
        if state.effective_shift() {
            raw.to_ascii_uppercase()
        } else {
            raw.to_ascii_lowercase()
        }
    } else if state.shift_pressed {
        shifted_symbol(raw).unwrap_or(raw)
    } else {
        raw
    }
}

/// Selects the displayed grid for the current modifier flags.
pub fn select_grid(state: &KeyboardState) -> LayoutGrid {
    if state.effective_shift() {
        LayoutGrid::Shift
    } else {
        LayoutGrid::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(shift: bool, caps: bool) -> KeyboardState {
        KeyboardState {
            shift_pressed: shift,
            caps_lock_on: caps,
            ..KeyboardState::new()
        }
    }

    #[test]
    fn letters_follow_shift_xor_caps() {
        for (shift, caps) in [(false, false), (true, false), (false, true), (true, true)] {
            let expected = if shift != caps { 'A' } else { 'a' };
            assert_eq!(transform_char('a', &flags(shift, caps)), expected);
            // incoming case is irrelevant
            assert_eq!(transform_char('A', &flags(shift, caps)), expected);
        }
    }

    #[test]
    fn symbols_follow_shift_alone() {
        assert_eq!(transform_char('1', &flags(true, true)), '!');
        assert_eq!(transform_char('1', &flags(true, false)), '!');
        assert_eq!(transform_char('1', &flags(false, true)), '1');
        assert_eq!(transform_char('1', &flags(false, false)), '1');
    }

    #[test]
    fn unmapped_symbols_pass_through() {
        assert_eq!(transform_char('!', &flags(true, false)), '!');
        assert_eq!(transform_char('é', &flags(true, false)), 'é');
    }

    #[test]
    fn grid_selection_uses_effective_shift() {
        assert_eq!(select_grid(&flags(false, false)), LayoutGrid::Default);
        assert_eq!(select_grid(&flags(true, false)), LayoutGrid::Shift);
        assert_eq!(select_grid(&flags(false, true)), LayoutGrid::Shift);
        assert_eq!(select_grid(&flags(true, true)), LayoutGrid::Default);
    }
}
