//! Shared data types: key tokens, hardware events, layout tables

pub mod hardware;
pub mod key_token;
pub mod layout;

pub use hardware::{physical_key_to_token, HardwareKeyEvent, KeyEventKind};
pub use key_token::KeyToken;
