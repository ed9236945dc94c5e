//! Rendering backend seam

use crate::types::KeyToken;

/// Opaque identity of one rendered key element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyHandle(pub u32);

/// Host-side rendering surface for the key grid.
///
/// The engine calls [`create_key`](RenderBackend::create_key) once per
/// layout cell at mount and never again; all later calls only toggle
/// presentation state. Implementations map these calls onto their element
/// tree and state classes. Clicks flow back the other way: the host
/// resolves its single delegated container listener to a grid position
/// and hands it to `VirtualKeyboard::handle_pointer_click`.
pub trait RenderBackend {
    /// Creates the element for one layout cell. The element carries both
    /// glyphs; the container-level shift class selects which is shown.
    fn create_key(
        &mut self,
        row: usize,
        col: usize,
        token: KeyToken,
        default_label: &str,
        shift_label: &str,
    ) -> KeyHandle;

    /// Toggles the container-level "shift layout active" class.
    fn set_shift_layout(&mut self, active: bool);

    /// Toggles the highlight class on a single key element.
    fn set_key_highlight(&mut self, handle: KeyHandle, on: bool);

    /// Drops every created element. Called from `destroy`.
    fn clear(&mut self);
}
