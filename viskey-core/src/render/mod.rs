//! Differential rendering of the key grid
//!
//! The grid is built exactly once against a host-supplied
//! [`RenderBackend`]; every later update is a class toggle. The
//! token-to-handle registry, not the element tree, is the identity source
//! for highlight operations.

pub mod backend;
pub mod registry;
pub mod renderer;

pub use backend::{KeyHandle, RenderBackend};
pub use registry::KeyElementRegistry;
pub use renderer::KeyGridRenderer;
