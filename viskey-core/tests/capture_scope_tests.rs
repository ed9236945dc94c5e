mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::*;
use pretty_assertions::assert_eq;
use viskey_core::{Callbacks, CapturePolicy, HardwareKeyEvent, KeyboardOptions};

#[test]
fn scoped_policy_consumes_only_inside_the_scope() {
    let (mut kb, _log) = new_keyboard_with(KeyboardOptions {
        capture_policy: CapturePolicy::Scoped,
        ..Default::default()
    });
    press(&mut kb, "KeyA", false, false);
    assert_eq!(kb.get_input(), "");

    kb.set_capture_scope_active(true);
    press(&mut kb, "KeyA", false, false);
    assert_eq!(kb.get_input(), "a");

    // leaving detaches consumption but preserves the buffer
    kb.set_capture_scope_active(false);
    press(&mut kb, "KeyB", false, false);
    assert_eq!(kb.get_input(), "a");
}

#[test]
fn always_policy_needs_no_scope() {
    let (mut kb, _log) = new_keyboard_with(KeyboardOptions {
        capture_policy: CapturePolicy::Always,
        ..Default::default()
    });
    press(&mut kb, "KeyA", false, false);
    assert_eq!(kb.get_input(), "a");
}

#[test]
fn disabled_policy_ignores_hardware_but_keeps_clicks() {
    let (mut kb, _log) = new_keyboard_with(KeyboardOptions {
        capture_policy: CapturePolicy::Disabled,
        ..Default::default()
    });
    kb.set_capture_scope_active(true);
    press(&mut kb, "KeyA", false, false);
    assert_eq!(kb.get_input(), "");

    kb.handle_pointer_click(1, 1); // "q"
    assert_eq!(kb.get_input(), "q");
}

#[test]
fn entering_the_scope_snapshots_the_target_sink() {
    let sink = SharedSink::with_text("prefilled");
    let (mut kb, _log) = new_keyboard_with(KeyboardOptions {
        target: Some(Box::new(sink.clone())),
        ..Default::default()
    });
    assert_eq!(kb.get_input(), "");

    kb.set_capture_scope_active(true);
    assert_eq!(kb.get_input(), "prefilled");
    assert_eq!(kb.get_caret_position(), 9);
}

#[test]
fn edits_mirror_to_the_sink_while_captured() {
    let sink = SharedSink::with_text("");
    let (mut kb, _log) = new_keyboard_with(KeyboardOptions {
        target: Some(Box::new(sink.clone())),
        ..Default::default()
    });
    kb.set_capture_scope_active(true);
    press(&mut kb, "KeyH", false, false);
    press(&mut kb, "KeyI", false, false);
    assert_eq!(sink.text(), "hi");

    kb.set_capture_scope_active(false);
    kb.set_input("detached").unwrap();
    // outside the scope the sink is left alone
    assert_eq!(sink.text(), "hi");
}

#[test]
fn scope_transitions_notify_the_subscriber() {
    let seen: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
    let seen_cb = Rc::clone(&seen);
    let (mut kb, _log) = new_keyboard_with(KeyboardOptions {
        callbacks: Callbacks {
            on_capture_scope_change: Some(Box::new(move |active| {
                seen_cb.borrow_mut().push(active);
            })),
            ..Default::default()
        },
        ..Default::default()
    });
    kb.set_capture_scope_active(true);
    kb.set_capture_scope_active(true); // no transition, no callback
    kb.set_capture_scope_active(false);
    assert_eq!(*seen.borrow(), vec![true, false]);
}

#[test]
fn sibling_instances_do_not_cross_deliver() {
    let (mut left, _) = new_capturing_keyboard();
    let (mut right, _) = new_capturing_keyboard();
    left.handle_hardware_event(&HardwareKeyEvent::down("KeyA", false, false));
    assert_eq!(left.get_input(), "a");
    assert_eq!(right.get_input(), "");
    assert_eq!(right.get_state(), viskey_core::KeyboardState::new());
}
