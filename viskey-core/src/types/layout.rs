//! Static layout tables and the symbol shift map
//!
//! Both grids are process-wide constants, constructed once and never
//! written after initialization. Cell `[r][c]` of the default grid and
//! cell `[r][c]` of the shift grid are counterparts; the renderer mounts
//! one element per cell carrying both glyphs.

use crate::error::{Error, Result};

/// The two index-aligned key grids of the displayed layout.
pub struct LayoutTable {
    pub default: &'static [&'static [&'static str]],
    pub shift: &'static [&'static [&'static str]],
}

#[rustfmt::skip]
const DEFAULT_GRID: &[&[&str]] = &[
    &["`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "=", "Backspace"],
    &["Tab", "q", "w", "e", "r", "t", "y", "u", "i", "o", "p", "[", "]", "\\"],
    &["CapsLock", "a", "s", "d", "f", "g", "h", "j", "k", "l", ";", "'", "Enter"],
    &["ShiftLeft", "z", "x", "c", "v", "b", "n", "m", ",", ".", "/", "ShiftRight"],
    &["Space"],
];

#[rustfmt::skip]
const SHIFT_GRID: &[&[&str]] = &[
    &["~", "!", "@", "#", "$", "%", "^", "&", "*", "(", ")", "_", "+", "Backspace"],
    &["Tab", "Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P", "{", "}", "|"],
    &["CapsLock", "A", "S", "D", "F", "G", "H", "J", "K", "L", ":", "\"", "Enter"],
    &["ShiftLeft", "Z", "X", "C", "V", "B", "N", "M", "<", ">", "?", "ShiftRight"],
    &["Space"],
];

static LAYOUT: LayoutTable = LayoutTable {
    default: DEFAULT_GRID,
    shift: SHIFT_GRID,
};

/// The shared layout table, immutable for the process lifetime.
pub fn layout() -> &'static LayoutTable {
    &LAYOUT
}

impl LayoutTable {
    /// Verifies the two grids are structurally identical. Run at mount;
    /// a mismatch is a configuration error, not a panic.
    pub fn check_aligned(&self) -> Result<()> {
        if self.default.len() != self.shift.len() {
            return Err(Error::Config(format!(
                "layout grids disagree on row count: {} vs {}",
                self.default.len(),
                self.shift.len()
            )));
        }
        for (row, (d, s)) in self.default.iter().zip(self.shift).enumerate() {
            if d.len() != s.len() {
                return Err(Error::Config(format!(
                    "layout grids disagree on row {row} width: {} vs {}",
                    d.len(),
                    s.len()
                )));
            }
        }
        Ok(())
    }
}

/// Shifted counterpart of an unshifted symbol glyph, if it has one.
/// Symbols without a mapped shifted form pass through unchanged.
pub fn shifted_symbol(ch: char) -> Option<char> {
    let shifted = match ch {
        '`' => '~',
        '1' => '!',
        '2' => '@',
        '3' => '#',
        '4' => '$',
        '5' => '%',
        '6' => '^',
        '7' => '&',
        '8' => '*',
        '9' => '(',
        '0' => ')',
        '-' => '_',
        '=' => '+',
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        ';' => ':',
        '\'' => '"',
        ',' => '<',
        '.' => '>',
        '/' => '?',
        _ => return None,
    };
    Some(shifted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KeyToken;

    #[test]
    fn grids_are_aligned() {
        layout().check_aligned().unwrap();
    }

    #[test]
    fn every_cell_parses_to_a_token() {
        for grid in [layout().default, layout().shift] {
            for row in grid {
                for cell in *row {
                    assert!(
                        KeyToken::from_layout_token(cell).is_some(),
                        "unparseable cell {cell:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn control_cells_match_across_grids() {
        for (d, s) in layout().default.iter().zip(layout().shift) {
            for (dc, sc) in d.iter().zip(*s) {
                if dc.chars().count() > 1 {
                    assert_eq!(dc, sc, "control token differs between grids");
                }
            }
        }
    }

    #[test]
    fn shift_map_covers_the_symbol_row() {
        assert_eq!(shifted_symbol('1'), Some('!'));
        assert_eq!(shifted_symbol('/'), Some('?'));
        assert_eq!(shifted_symbol('a'), None);
        assert_eq!(shifted_symbol('!'), None);
    }
}
