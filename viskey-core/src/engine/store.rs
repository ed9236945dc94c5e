//! Single-writer state store

use std::panic::{catch_unwind, AssertUnwindSafe};

use log::error;

use crate::render::KeyGridRenderer;

use super::state::KeyboardState;

/// External subscriber invoked with a snapshot after every transition.
pub type StateSubscriber = Box<dyn FnMut(&KeyboardState)>;

/// Sole owner and writer of the live [`KeyboardState`].
///
/// Every transition funnels through [`StateStore::set_state`] with a fully
/// formed next state; no other component replaces or mutates the record.
/// This rules out the lost-update interleaving two independent writers
/// could otherwise produce, with run-to-completion dispatch covering the
/// rest.
pub struct StateStore {
    state: KeyboardState,
    renderer: KeyGridRenderer,
    subscriber: Option<StateSubscriber>,
}

impl StateStore {
    pub fn new(renderer: KeyGridRenderer) -> Self {
        Self {
            state: KeyboardState::new(),
            renderer,
            subscriber: None,
        }
    }

    pub fn state(&self) -> &KeyboardState {
        &self.state
    }

    /// Owned snapshot for external holders.
    pub fn snapshot(&self) -> KeyboardState {
        self.state.clone()
    }

    pub fn renderer(&self) -> &KeyGridRenderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut KeyGridRenderer {
        &mut self.renderer
    }

    pub fn set_subscriber(&mut self, subscriber: StateSubscriber) {
        self.subscriber = Some(subscriber);
    }

    pub fn clear_subscriber(&mut self) {
        self.subscriber = None;
    }

    /// Replaces the live state and synchronizes presentation.
    ///
    /// The layout class is touched only when a modifier feeding it
    /// changed; modifier highlights are refreshed on every transition
    /// (the renderer skips keys whose presentation did not change). The
    /// subscriber receives a cloned snapshot after the swap.
    pub fn set_state(&mut self, next: KeyboardState) {
        let layout_changed = next.shift_pressed != self.state.shift_pressed
            || next.caps_lock_on != self.state.caps_lock_on;
        if layout_changed {
            self.renderer.set_shift_layout(next.effective_shift());
        }
        self.renderer.refresh_modifier_highlights(&next);
        self.state = next;

        if let Some(subscriber) = self.subscriber.as_mut() {
            let snapshot = self.state.clone();
            invoke_isolated("on_state_change", || subscriber(&snapshot));
        }
    }
}

/// Runs an external callback inside its own failure boundary.
///
/// A panicking callback is logged and swallowed; the state transition
/// that triggered it is kept. Returns whether the callback completed.
pub(crate) fn invoke_isolated<F: FnOnce()>(name: &'static str, f: F) -> bool {
    let completed = catch_unwind(AssertUnwindSafe(f)).is_ok();
    if !completed {
        error!("{name} callback panicked; transition kept");
    }
    completed
}
