//! Hardware key events and the physical key map

use std::collections::HashMap;
use std::sync::OnceLock;

use super::key_token::KeyToken;

/// Direction of a physical key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Down,
    Up,
}

/// A native event reporting a physical key transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardwareKeyEvent {
    pub kind: KeyEventKind,
    /// Hardware key identifier, e.g. `"KeyA"` or `"ShiftLeft"`
    pub code: String,
    /// Combined shift flag, true while either physical shift key is held
    pub shift: bool,
    /// CapsLock state as reported by the hardware at event time
    pub caps_lock: bool,
}

impl HardwareKeyEvent {
    pub fn down(code: &str, shift: bool, caps_lock: bool) -> Self {
        Self {
            kind: KeyEventKind::Down,
            code: code.to_string(),
            shift,
            caps_lock,
        }
    }

    pub fn up(code: &str, shift: bool, caps_lock: bool) -> Self {
        Self {
            kind: KeyEventKind::Up,
            code: code.to_string(),
            shift,
            caps_lock,
        }
    }
}

/// Maps a hardware key identifier to its canonical token.
///
/// Unknown identifiers return `None`; callers ignore them silently and
/// never synthesize an event for an unmapped key.
pub fn physical_key_to_token(code: &str) -> Option<KeyToken> {
    physical_key_map().get(code).copied()
}

/// Fixed table covering the standard alphanumeric block, punctuation, and
/// the named control keys. Letters map to their unshifted glyph; casing is
/// applied later by the character transformer.
const PHYSICAL_KEYS: &[(&str, KeyToken)] = &[
    ("KeyA", KeyToken::Char('a')),
    ("KeyB", KeyToken::Char('b')),
    ("KeyC", KeyToken::Char('c')),
    ("KeyD", KeyToken::Char('d')),
    ("KeyE", KeyToken::Char('e')),
    ("KeyF", KeyToken::Char('f')),
    ("KeyG", KeyToken::Char('g')),
    ("KeyH", KeyToken::Char('h')),
    ("KeyI", KeyToken::Char('i')),
    ("KeyJ", KeyToken::Char('j')),
    ("KeyK", KeyToken::Char('k')),
    ("KeyL", KeyToken::Char('l')),
    ("KeyM", KeyToken::Char('m')),
    ("KeyN", KeyToken::Char('n')),
    ("KeyO", KeyToken::Char('o')),
    ("KeyP", KeyToken::Char('p')),
    ("KeyQ", KeyToken::Char('q')),
    ("KeyR", KeyToken::Char('r')),
    ("KeyS", KeyToken::Char('s')),
    ("KeyT", KeyToken::Char('t')),
    ("KeyU", KeyToken::Char('u')),
    ("KeyV", KeyToken::Char('v')),
    ("KeyW", KeyToken::Char('w')),
    ("KeyX", KeyToken::Char('x')),
    ("KeyY", KeyToken::Char('y')),
    ("KeyZ", KeyToken::Char('z')),
    ("Digit0", KeyToken::Char('0')),
    ("Digit1", KeyToken::Char('1')),
    ("Digit2", KeyToken::Char('2')),
    ("Digit3", KeyToken::Char('3')),
    ("Digit4", KeyToken::Char('4')),
    ("Digit5", KeyToken::Char('5')),
    ("Digit6", KeyToken::Char('6')),
    ("Digit7", KeyToken::Char('7')),
    ("Digit8", KeyToken::Char('8')),
    ("Digit9", KeyToken::Char('9')),
    ("Backquote", KeyToken::Char('`')),
    ("Minus", KeyToken::Char('-')),
    ("Equal", KeyToken::Char('=')),
    ("BracketLeft", KeyToken::Char('[')),
    ("BracketRight", KeyToken::Char(']')),
    ("Backslash", KeyToken::Char('\\')),
    ("Semicolon", KeyToken::Char(';')),
    ("Quote", KeyToken::Char('\'')),
    ("Comma", KeyToken::Char(',')),
    ("Period", KeyToken::Char('.')),
    ("Slash", KeyToken::Char('/')),
    ("Backspace", KeyToken::Backspace),
    ("Enter", KeyToken::Enter),
    ("Space", KeyToken::Space),
    ("Tab", KeyToken::Tab),
    ("CapsLock", KeyToken::CapsLock),
    ("ShiftLeft", KeyToken::ShiftLeft),
    ("ShiftRight", KeyToken::ShiftRight),
];

/// Process-wide lookup map, built on first use, read-only afterwards.
fn physical_key_map() -> &'static HashMap<&'static str, KeyToken> {
    static MAP: OnceLock<HashMap<&'static str, KeyToken>> = OnceLock::new();
    MAP.get_or_init(|| PHYSICAL_KEYS.iter().copied().collect())
}
