#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use viskey_core::{
    HardwareKeyEvent, KeyHandle, KeyToken, KeyboardOptions, RenderBackend, TextSink,
    VirtualKeyboard,
};

/// Everything the backend was asked to do, for assertions on render
/// traffic.
#[derive(Debug, Default)]
pub struct RenderLog {
    pub created: Vec<(usize, usize, KeyToken, String, String)>,
    pub shift_layout_calls: Vec<bool>,
    pub highlight_calls: Vec<(KeyHandle, bool)>,
    pub clear_calls: usize,
}

/// Recording backend; the log stays inspectable after the backend is
/// moved into the keyboard.
pub struct RecordingBackend {
    log: Rc<RefCell<RenderLog>>,
    next_id: u32,
}

impl RecordingBackend {
    pub fn new() -> (Self, Rc<RefCell<RenderLog>>) {
        let log = Rc::new(RefCell::new(RenderLog::default()));
        (
            Self {
                log: Rc::clone(&log),
                next_id: 0,
            },
            log,
        )
    }
}

impl RenderBackend for RecordingBackend {
    fn create_key(
        &mut self,
        row: usize,
        col: usize,
        token: KeyToken,
        default_label: &str,
        shift_label: &str,
    ) -> KeyHandle {
        let handle = KeyHandle(self.next_id);
        self.next_id += 1;
        self.log.borrow_mut().created.push((
            row,
            col,
            token,
            default_label.to_string(),
            shift_label.to_string(),
        ));
        handle
    }

    fn set_shift_layout(&mut self, active: bool) {
        self.log.borrow_mut().shift_layout_calls.push(active);
    }

    fn set_key_highlight(&mut self, handle: KeyHandle, on: bool) {
        self.log.borrow_mut().highlight_calls.push((handle, on));
    }

    fn clear(&mut self) {
        self.log.borrow_mut().clear_calls += 1;
    }
}

/// Shared-text sink standing in for the external target input.
#[derive(Clone, Default)]
pub struct SharedSink(pub Rc<RefCell<String>>);

impl SharedSink {
    pub fn with_text(text: &str) -> Self {
        SharedSink(Rc::new(RefCell::new(text.to_string())))
    }

    pub fn text(&self) -> String {
        self.0.borrow().clone()
    }
}

impl TextSink for SharedSink {
    fn get_text(&self) -> String {
        self.0.borrow().clone()
    }

    fn set_text(&mut self, text: &str) {
        *self.0.borrow_mut() = text.to_string();
    }
}

/// Keyboard with default options and a recording backend.
pub fn new_keyboard() -> (VirtualKeyboard, Rc<RefCell<RenderLog>>) {
    new_keyboard_with(KeyboardOptions::default())
}

pub fn new_keyboard_with(options: KeyboardOptions) -> (VirtualKeyboard, Rc<RefCell<RenderLog>>) {
    let (backend, log) = RecordingBackend::new();
    let keyboard = VirtualKeyboard::new(Box::new(backend), options).unwrap();
    (keyboard, log)
}

/// Keyboard that consumes hardware events unconditionally.
pub fn new_capturing_keyboard() -> (VirtualKeyboard, Rc<RefCell<RenderLog>>) {
    new_keyboard_with(KeyboardOptions {
        capture_policy: viskey_core::CapturePolicy::Always,
        ..KeyboardOptions::default()
    })
}

/// Delivers a full down/up pair for one physical key.
pub fn press(keyboard: &mut VirtualKeyboard, code: &str, shift: bool, caps: bool) {
    keyboard.handle_hardware_event(&HardwareKeyEvent::down(code, shift, caps));
    keyboard.handle_hardware_event(&HardwareKeyEvent::up(code, shift, caps));
}
