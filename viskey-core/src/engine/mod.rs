//! VisKey engine - buffer, caret, and modifier processing
//!
//! The engine is a set of pure functions (modifier resolution, character
//! transformation, buffer editing) funneled through a single-writer
//! [`StateStore`]. No component other than the store replaces the live
//! [`KeyboardState`].

pub mod editor;
pub mod modifiers;
pub mod state;
pub mod store;
pub mod transform;

pub use state::KeyboardState;
pub use store::{StateStore, StateSubscriber};
pub use transform::LayoutGrid;
