//! Canonical virtual key tokens

/// Canonical identifier for a key, independent of whether it arrived as an
/// on-screen click or a hardware key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyToken {
    /// Literal glyph key (letters, digits, punctuation)
    Char(char),
    Backspace,
    Enter,
    Space,
    Tab,
    CapsLock,
    ShiftLeft,
    ShiftRight,
}

impl KeyToken {
    /// Parses a layout-table cell.
    ///
    /// Single-character tokens are literal glyphs; multi-character tokens
    /// name control or modifier keys. Unknown multi-character tokens
    /// return `None` and are rejected when the grid is mounted.
    pub fn from_layout_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Some(KeyToken::Char(ch));
        }
        match token {
            "Backspace" => Some(KeyToken::Backspace),
            "Enter" => Some(KeyToken::Enter),
            "Space" => Some(KeyToken::Space),
            "Tab" => Some(KeyToken::Tab),
            "CapsLock" => Some(KeyToken::CapsLock),
            "ShiftLeft" => Some(KeyToken::ShiftLeft),
            "ShiftRight" => Some(KeyToken::ShiftRight),
            _ => None,
        }
    }

    /// Whether this token names a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            KeyToken::CapsLock | KeyToken::ShiftLeft | KeyToken::ShiftRight
        )
    }
}
