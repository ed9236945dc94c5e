//! Differential key-grid renderer
//!
//! Rebuilding the grid on every modifier toggle is the dominant cost in a
//! rapid-typing workload, so the renderer builds once and afterwards only
//! compares against the last pushed presentation state, emitting backend
//! calls for the keys that actually changed.

use std::collections::HashMap;

use crate::engine::state::KeyboardState;
use crate::error::{Error, Result};
use crate::types::layout;
use crate::types::KeyToken;

use super::backend::RenderBackend;
use super::registry::KeyElementRegistry;

pub struct KeyGridRenderer {
    backend: Box<dyn RenderBackend>,
    registry: KeyElementRegistry,
    shift_layout_active: bool,
    highlights: HashMap<KeyToken, bool>,
    mounted: bool,
}

impl KeyGridRenderer {
    pub fn new(backend: Box<dyn RenderBackend>) -> Self {
        Self {
            backend,
            registry: KeyElementRegistry::new(),
            shift_layout_active: false,
            highlights: HashMap::new(),
            mounted: false,
        }
    }

    /// Builds the grid: one element per layout cell, registered by token.
    /// Runs once; a second call is a no-op.
    pub fn mount(&mut self) -> Result<()> {
        if self.mounted {
            return Ok(());
        }
        let table = layout::layout();
        table.check_aligned()?;
        for (row, cells) in table.default.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let token = KeyToken::from_layout_token(cell).ok_or_else(|| {
                    Error::Config(format!("unknown layout token {cell:?} at [{row}][{col}]"))
                })?;
                let shift_label = table.shift[row][col];
                let handle = self.backend.create_key(row, col, token, cell, shift_label);
                self.registry.register(token, handle);
            }
        }
        self.backend.set_shift_layout(false);
        self.mounted = true;
        Ok(())
    }

    /// Resolves a delegated container click back to its key token via
    /// grid position.
    pub fn token_at(&self, row: usize, col: usize) -> Option<KeyToken> {
        layout::layout()
            .default
            .get(row)
            .and_then(|cells| cells.get(col))
            .and_then(|cell| KeyToken::from_layout_token(cell))
    }

    /// Toggles the container-level shift-layout class, skipping the call
    /// when it is already in the requested state.
    pub fn set_shift_layout(&mut self, active: bool) {
        if !self.mounted || active == self.shift_layout_active {
            return;
        }
        self.backend.set_shift_layout(active);
        self.shift_layout_active = active;
    }

    /// Refreshes modifier-key highlights, touching only keys whose
    /// presentation changed.
    pub fn refresh_modifier_highlights(&mut self, state: &KeyboardState) {
        self.apply_highlight(KeyToken::ShiftLeft, state.left_shift_pressed);
        self.apply_highlight(KeyToken::ShiftRight, state.right_shift_pressed);
        self.apply_highlight(KeyToken::CapsLock, state.caps_lock_on);
    }

    fn apply_highlight(&mut self, token: KeyToken, on: bool) {
        if !self.mounted {
            return;
        }
        let current = self.highlights.get(&token).copied().unwrap_or(false);
        if current == on {
            return;
        }
        if let Some(handle) = self.registry.handle(token) {
            self.backend.set_key_highlight(handle, on);
            self.highlights.insert(token, on);
        }
    }

    /// Tears the grid down. Subsequent updates are no-ops until a new
    /// mount; `destroy` never remounts.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.backend.clear();
        self.registry.clear();
        self.highlights.clear();
        self.shift_layout_active = false;
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn registry(&self) -> &KeyElementRegistry {
        &self.registry
    }
}
