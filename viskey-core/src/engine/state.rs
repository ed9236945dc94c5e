//! Keyboard state record

/// Complete state of one keyboard instance.
///
/// A value record: every accepted change replaces it wholesale through the
/// state store; nothing mutates it in place. Snapshots handed to external
/// subscribers are clones, so holders cannot corrupt engine state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyboardState {
    /// Accumulated input, at most the configured maximum length
    pub buffer: String,
    /// Caret position in characters, always within `0..=char_len()`
    pub caret: usize,
    /// Combined shift flag as reported by the hardware event
    pub shift_pressed: bool,
    /// Left shift key held; tracked for highlighting only
    pub left_shift_pressed: bool,
    /// Right shift key held; tracked for highlighting only
    pub right_shift_pressed: bool,
    /// CapsLock state mirrored from hardware, never flipped internally
    pub caps_lock_on: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift XOR CapsLock. Governs alphabetic casing and which layout
    /// grid is displayed; symbols ignore it and follow `shift_pressed`
    /// alone.
    pub fn effective_shift(&self) -> bool {
        self.shift_pressed != self.caps_lock_on
    }

    /// Buffer length in characters.
    pub fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }
}
