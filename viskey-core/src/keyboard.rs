//! Public facade for a virtual keyboard instance
//!
//! [`VirtualKeyboard`] wires the pure engine functions, the single-writer
//! state store, and the differential renderer behind the operations a
//! host calls: feed hardware events, deliver delegated clicks, get/set
//! the buffer and caret, and tear down. Every instance owns its backend,
//! registry, and callbacks, so concurrent instances never cross-deliver
//! events.

use log::{debug, error, warn};

use crate::engine::store::{invoke_isolated, StateStore};
use crate::engine::{editor, modifiers, transform, KeyboardState};
use crate::error::{Error, Result};
use crate::render::{KeyGridRenderer, RenderBackend};
use crate::types::{physical_key_to_token, HardwareKeyEvent, KeyEventKind, KeyToken};

pub const DEFAULT_MAX_INPUT_LENGTH: usize = 10_000;

/// Policy gating whether hardware key events are consumed at all.
///
/// The source systems disagreed on always-on versus hover-scoped capture,
/// so it is an option rather than a fixed behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePolicy {
    /// Consume every hardware event delivered to this instance.
    Always,
    /// Consume only while the capture scope is active.
    #[default]
    Scoped,
    /// Never consume hardware events; on-screen clicks still work.
    Disabled,
}

/// External text sink mirrored while capture is active.
pub trait TextSink {
    fn get_text(&self) -> String;
    fn set_text(&mut self, text: &str);
}

/// Subscriber callbacks.
///
/// Each invocation runs in its own failure boundary: a panicking callback
/// is logged, surfaced through `on_error`, and never aborts the internal
/// transition that triggered it.
#[derive(Default)]
pub struct Callbacks {
    pub on_change: Option<Box<dyn FnMut(&str)>>,
    pub on_key_press: Option<Box<dyn FnMut(KeyToken, Option<&HardwareKeyEvent>)>>,
    pub on_key_release: Option<Box<dyn FnMut(KeyToken, Option<&HardwareKeyEvent>)>>,
    pub on_state_change: Option<Box<dyn FnMut(&KeyboardState)>>,
    pub on_capture_scope_change: Option<Box<dyn FnMut(bool)>>,
    pub on_error: Option<Box<dyn FnMut(&Error)>>,
}

/// Construction options.
pub struct KeyboardOptions {
    pub max_input_length: usize,
    pub capture_policy: CapturePolicy,
    pub debug: bool,
    /// External text sink snapshotted on scope entry and mirrored while
    /// capture is active.
    pub target: Option<Box<dyn TextSink>>,
    pub callbacks: Callbacks,
}

impl Default for KeyboardOptions {
    fn default() -> Self {
        Self {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            capture_policy: CapturePolicy::default(),
            debug: false,
            target: None,
            callbacks: Callbacks::default(),
        }
    }
}

/// One on-screen keyboard instance.
pub struct VirtualKeyboard {
    store: StateStore,
    max_input_length: usize,
    capture_policy: CapturePolicy,
    debug: bool,
    target: Option<Box<dyn TextSink>>,
    callbacks: Callbacks,
    capture_active: bool,
    destroyed: bool,
}

impl VirtualKeyboard {
    /// Constructs an instance and mounts the key grid on `backend`.
    ///
    /// Configuration errors (zero maximum length, malformed layout data)
    /// abort construction; nothing is left mounted on failure.
    pub fn new(backend: Box<dyn RenderBackend>, options: KeyboardOptions) -> Result<Self> {
        let KeyboardOptions {
            max_input_length,
            capture_policy,
            debug,
            target,
            mut callbacks,
        } = options;
        if max_input_length == 0 {
            return Err(Error::Config("max_input_length must be positive".to_string()));
        }

        let mut renderer = KeyGridRenderer::new(backend);
        renderer.mount()?;

        let mut store = StateStore::new(renderer);
        if let Some(on_state_change) = callbacks.on_state_change.take() {
            store.set_subscriber(on_state_change);
        }

        Ok(Self {
            store,
            max_input_length,
            capture_policy,
            debug,
            target,
            callbacks,
            capture_active: false,
            destroyed: false,
        })
    }

    // ------------------------------------------------------------------
    // Event entry points
    // ------------------------------------------------------------------

    /// Feeds one hardware key event into the engine.
    ///
    /// Events arriving after `destroy`, or while the capture policy keeps
    /// this instance out of scope, are ignored entirely. Modifier flags
    /// are resolved on every consumed event, including events whose key
    /// has no mapping.
    pub fn handle_hardware_event(&mut self, event: &HardwareKeyEvent) {
        if self.destroyed || !self.captures_hardware() {
            return;
        }
        if self.debug {
            debug!("hardware {:?} {}", event.kind, event.code);
        }

        let next = modifiers::resolve(self.store.state(), event);
        self.store.set_state(next);

        // Unmapped codes resolve modifiers above but synthesize nothing.
        let Some(token) = physical_key_to_token(&event.code) else {
            return;
        };
        match event.kind {
            KeyEventKind::Down => {
                self.emit_key_press(token, Some(event));
                self.apply_key(token);
            }
            KeyEventKind::Up => self.emit_key_release(token, Some(event)),
        }
    }

    /// Resolves the delegated container click at a grid position.
    ///
    /// This is the single click entry point for the whole grid; positions
    /// outside the layout are ignored.
    pub fn handle_pointer_click(&mut self, row: usize, col: usize) {
        if self.destroyed {
            return;
        }
        let Some(token) = self.store.renderer().token_at(row, col) else {
            return;
        };
        self.press_virtual_key(token);
    }

    /// Activates a key as if its on-screen element were clicked.
    pub fn press_virtual_key(&mut self, token: KeyToken) {
        if self.destroyed {
            return;
        }
        if self.debug {
            debug!("virtual press {token:?}");
        }
        self.emit_key_press(token, None);
        match token {
            KeyToken::ShiftLeft | KeyToken::ShiftRight => self.toggle_sticky_shift(token),
            // An on-screen CapsLock click cannot change the lock; its
            // state only mirrors what the hardware reports.
            KeyToken::CapsLock => {}
            _ => self.apply_key(token),
        }
    }

    /// Enters or leaves the capture scope.
    ///
    /// Entering snapshots the target sink's content into the buffer;
    /// leaving stops hardware consumption and preserves the buffer.
    pub fn set_capture_scope_active(&mut self, active: bool) {
        if self.destroyed || active == self.capture_active {
            return;
        }
        self.capture_active = active;
        if active {
            if let Some(text) = self.target.as_ref().map(|sink| sink.get_text()) {
                match editor::validate_input(&text, self.max_input_length) {
                    Ok(buffer) => {
                        let caret = buffer.chars().count();
                        self.commit_buffer(buffer, caret);
                    }
                    Err(err) => self.report_error(&err),
                }
            }
        }
        let panicked = match self.callbacks.on_capture_scope_change.as_mut() {
            Some(cb) => !invoke_isolated("on_capture_scope_change", || cb(active)),
            None => false,
        };
        if panicked {
            self.report_error(&Error::Callback("on_capture_scope_change"));
        }
    }

    // ------------------------------------------------------------------
    // Buffer and caret operations
    // ------------------------------------------------------------------

    pub fn get_input(&self) -> &str {
        &self.store.state().buffer
    }

    /// Replaces the buffer, moving the caret to the end.
    ///
    /// Validation failures are reported through `on_error` and the
    /// returned error; state is left untouched. Oversize input is
    /// truncated, which is a warning, not an error.
    pub fn set_input(&mut self, text: &str) -> Result<()> {
        if self.destroyed {
            return Ok(());
        }
        match editor::validate_input(text, self.max_input_length) {
            Ok(buffer) => {
                let caret = buffer.chars().count();
                self.commit_buffer(buffer, caret);
                Ok(())
            }
            Err(err) => {
                self.report_error(&err);
                Err(err)
            }
        }
    }

    pub fn clear_input(&mut self) {
        if self.destroyed {
            return;
        }
        self.commit_buffer(String::new(), 0);
    }

    pub fn get_caret_position(&self) -> usize {
        self.store.state().caret
    }

    /// Moves the caret, clamping out-of-range values. Never fails.
    pub fn set_caret_position(&mut self, caret: isize) {
        if self.destroyed {
            return;
        }
        let mut next = self.store.snapshot();
        next.caret = editor::clamp_caret(caret, next.char_len());
        self.store.set_state(next);
    }

    /// Returns a defensive copy of the current state.
    pub fn get_state(&self) -> KeyboardState {
        self.store.snapshot()
    }

    pub fn is_capture_scope_active(&self) -> bool {
        self.capture_active
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Tears down rendering and listener state.
    ///
    /// Idempotent: a second call is a no-op. Afterwards no hardware event
    /// or click changes state, and no callback or registry entry is left
    /// behind.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.capture_active = false;
        self.store.renderer_mut().unmount();
        self.store.clear_subscriber();
        self.callbacks = Callbacks::default();
        self.target = None;
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn captures_hardware(&self) -> bool {
        match self.capture_policy {
            CapturePolicy::Always => true,
            CapturePolicy::Scoped => self.capture_active,
            CapturePolicy::Disabled => false,
        }
    }

    fn mirrors_to_sink(&self) -> bool {
        self.capture_active || self.capture_policy == CapturePolicy::Always
    }

    /// Applies the edit a key token stands for. Modifier tokens carry no
    /// edit; their handling happened during resolution.
    fn apply_key(&mut self, token: KeyToken) {
        let state = self.store.state();
        let edited = match token {
            KeyToken::Char(raw) => {
                let ch = transform::transform_char(raw, state);
                Some(editor::insert_at_caret(&state.buffer, state.caret, ch))
            }
            KeyToken::Backspace => Some(editor::delete_before_caret(&state.buffer, state.caret)),
            KeyToken::Enter => Some(editor::insert_at_caret(&state.buffer, state.caret, '\n')),
            KeyToken::Space => Some(editor::insert_at_caret(&state.buffer, state.caret, ' ')),
            KeyToken::Tab => Some(editor::insert_at_caret(&state.buffer, state.caret, '\t')),
            KeyToken::CapsLock | KeyToken::ShiftLeft | KeyToken::ShiftRight => None,
        };
        if let Some((buffer, caret)) = edited {
            self.commit_buffer(buffer, caret);
        }
    }

    /// On-screen shift affordance: clicking a shift key latches it until
    /// clicked again. The combined flag is the OR of both sides.
    fn toggle_sticky_shift(&mut self, token: KeyToken) {
        let mut next = self.store.snapshot();
        match token {
            KeyToken::ShiftLeft => next.left_shift_pressed = !next.left_shift_pressed,
            KeyToken::ShiftRight => next.right_shift_pressed = !next.right_shift_pressed,
            _ => return,
        }
        next.shift_pressed = next.left_shift_pressed || next.right_shift_pressed;
        self.store.set_state(next);
    }

    /// Routes a buffer replacement through the store, enforcing the
    /// length cap and caret bounds, then mirrors and notifies.
    fn commit_buffer(&mut self, mut buffer: String, caret: usize) {
        let mut len = buffer.chars().count();
        if len > self.max_input_length {
            warn!(
                "buffer of {len} characters truncated to {}",
                self.max_input_length
            );
            buffer = buffer.chars().take(self.max_input_length).collect();
            len = self.max_input_length;
        }
        let caret = editor::clamp_caret(caret as isize, len);

        let mut next = self.store.snapshot();
        let changed = next.buffer != buffer;
        next.buffer = buffer;
        next.caret = caret;
        self.store.set_state(next);

        if changed {
            self.after_buffer_change();
        }
    }

    fn after_buffer_change(&mut self) {
        let text = self.store.state().buffer.clone();
        if self.mirrors_to_sink() {
            if let Some(sink) = self.target.as_mut() {
                sink.set_text(&text);
            }
        }
        let panicked = match self.callbacks.on_change.as_mut() {
            Some(cb) => !invoke_isolated("on_change", || cb(&text)),
            None => false,
        };
        if panicked {
            self.report_error(&Error::Callback("on_change"));
        }
    }

    fn emit_key_press(&mut self, token: KeyToken, event: Option<&HardwareKeyEvent>) {
        let panicked = match self.callbacks.on_key_press.as_mut() {
            Some(cb) => !invoke_isolated("on_key_press", || cb(token, event)),
            None => false,
        };
        if panicked {
            self.report_error(&Error::Callback("on_key_press"));
        }
    }

    fn emit_key_release(&mut self, token: KeyToken, event: Option<&HardwareKeyEvent>) {
        let panicked = match self.callbacks.on_key_release.as_mut() {
            Some(cb) => !invoke_isolated("on_key_release", || cb(token, event)),
            None => false,
        };
        if panicked {
            self.report_error(&Error::Callback("on_key_release"));
        }
    }

    fn report_error(&mut self, err: &Error) {
        error!("{err}");
        if let Some(cb) = self.callbacks.on_error.as_mut() {
            // A panicking on_error is only logged; no further reporting.
            invoke_isolated("on_error", || cb(err));
        }
    }
}

impl Drop for VirtualKeyboard {
    fn drop(&mut self) {
        self.destroy();
    }
}
