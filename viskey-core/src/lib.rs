//! VisKey Core - on-screen keyboard input engine
//!
//! This crate maintains a text buffer and caret, resolves modifier state
//! from hardware key events, transforms characters according to the
//! Shift/CapsLock rules, and keeps a mounted key grid synchronized through
//! class toggles instead of rebuilds. Hosts supply a [`RenderBackend`] for
//! the key grid and optionally a [`TextSink`] to mirror during capture.

pub mod error;
pub mod types;
pub mod engine;
pub mod render;
pub mod keyboard;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{physical_key_to_token, HardwareKeyEvent, KeyEventKind, KeyToken};
pub use types::layout::{layout, shifted_symbol, LayoutTable};
pub use engine::{KeyboardState, LayoutGrid};
pub use render::{KeyElementRegistry, KeyGridRenderer, KeyHandle, RenderBackend};
pub use keyboard::{
    Callbacks, CapturePolicy, KeyboardOptions, TextSink, VirtualKeyboard,
    DEFAULT_MAX_INPUT_LENGTH,
};
