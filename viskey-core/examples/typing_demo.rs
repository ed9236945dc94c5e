//! Minimal demo: a stdout render backend and a short typing session.
//!
//! Run with: cargo run --example typing_demo

use viskey_core::{
    CapturePolicy, HardwareKeyEvent, KeyHandle, KeyToken, KeyboardOptions, RenderBackend,
    VirtualKeyboard,
};

struct StdoutBackend {
    next_id: u32,
}

impl RenderBackend for StdoutBackend {
    fn create_key(
        &mut self,
        row: usize,
        col: usize,
        _token: KeyToken,
        default_label: &str,
        shift_label: &str,
    ) -> KeyHandle {
        let handle = KeyHandle(self.next_id);
        self.next_id += 1;
        println!("create [{row}][{col}] {default_label:?}/{shift_label:?}");
        handle
    }

    fn set_shift_layout(&mut self, active: bool) {
        println!("shift layout: {active}");
    }

    fn set_key_highlight(&mut self, handle: KeyHandle, on: bool) {
        println!("highlight {handle:?}: {on}");
    }

    fn clear(&mut self) {
        println!("clear");
    }
}

fn main() {
    let mut keyboard = VirtualKeyboard::new(
        Box::new(StdoutBackend { next_id: 0 }),
        KeyboardOptions {
            capture_policy: CapturePolicy::Always,
            ..Default::default()
        },
    )
    .expect("construction");

    for code in ["KeyH", "KeyI", "Space"] {
        keyboard.handle_hardware_event(&HardwareKeyEvent::down(code, false, false));
        keyboard.handle_hardware_event(&HardwareKeyEvent::up(code, false, false));
    }
    keyboard.handle_hardware_event(&HardwareKeyEvent::down("KeyA", true, false));
    keyboard.handle_hardware_event(&HardwareKeyEvent::up("KeyA", false, false));

    println!("buffer: {:?}", keyboard.get_input());
    keyboard.destroy();
}
