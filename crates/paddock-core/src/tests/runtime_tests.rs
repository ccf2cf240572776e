use super::*;
use crate::{MutableState, FRAME_INTERVAL_NANOS};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn callbacks_run_once_in_registration_order() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let log = Rc::new(RefCell::new(Vec::new()));

    for label in ["a", "b", "c"] {
        let log = Rc::clone(&log);
        handle.register_frame_callback(move |time| log.borrow_mut().push((label, time)));
    }

    handle.drain_frame_callbacks(FRAME_INTERVAL_NANOS);
    handle.drain_frame_callbacks(2 * FRAME_INTERVAL_NANOS);

    assert_eq!(
        log.borrow().as_slice(),
        &[
            ("a", FRAME_INTERVAL_NANOS),
            ("b", FRAME_INTERVAL_NANOS),
            ("c", FRAME_INTERVAL_NANOS)
        ]
    );
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn callbacks_registered_during_drain_wait_for_next_frame() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let hits = Rc::new(RefCell::new(Vec::new()));

    {
        let hits = Rc::clone(&hits);
        let inner_handle = handle.clone();
        handle.register_frame_callback(move |time| {
            hits.borrow_mut().push(time);
            let hits = Rc::clone(&hits);
            inner_handle.register_frame_callback(move |time| hits.borrow_mut().push(time));
        });
    }

    handle.drain_frame_callbacks(10);
    assert_eq!(hits.borrow().as_slice(), &[10]);
    assert!(handle.has_frame_callbacks());

    handle.drain_frame_callbacks(20);
    assert_eq!(hits.borrow().as_slice(), &[10, 20]);
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::new();
    let clock = runtime.frame_clock();
    let fired = Rc::new(RefCell::new(false));

    let registration = {
        let fired = Rc::clone(&fired);
        clock.with_frame_nanos(move |_| *fired.borrow_mut() = true)
    };
    assert!(registration.is_active());
    drop(registration);

    runtime.handle().drain_frame_callbacks(FRAME_INTERVAL_NANOS);
    assert!(!*fired.borrow());
}

#[test]
fn frame_millis_are_derived_from_nanos() {
    let runtime = Runtime::new();
    let seen = Rc::new(RefCell::new(None));
    let _registration = {
        let seen = Rc::clone(&seen);
        runtime
            .frame_clock()
            .with_frame_millis(move |millis| *seen.borrow_mut() = Some(millis))
    };
    runtime.handle().drain_frame_callbacks(48_000_000);
    assert_eq!(*seen.borrow(), Some(48));
}

#[test]
fn frame_time_never_goes_backwards() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    handle.drain_frame_callbacks(1_000);

    let seen = Rc::new(RefCell::new(0u64));
    {
        let seen = Rc::clone(&seen);
        handle.register_frame_callback(move |time| *seen.borrow_mut() = time);
    }
    handle.drain_frame_callbacks(500);
    assert_eq!(*seen.borrow(), 1_000);
    assert_eq!(handle.last_frame_nanos(), Some(1_000));
}

#[test]
fn handle_outliving_runtime_is_inert() {
    let handle = {
        let runtime = Runtime::new();
        runtime.handle()
    };
    assert!(!handle.is_alive());
    assert!(handle.register_frame_callback(|_| {}).is_none());
    let registration = handle.frame_clock().with_frame_nanos(|_| {});
    assert!(!registration.is_active());
    handle.drain_frame_callbacks(FRAME_INTERVAL_NANOS);
}

#[test]
fn state_versions_track_writes() {
    let state = MutableState::new(0.0f32);
    let view = state.as_state();
    assert_eq!(view.version(), 0);

    state.set_value(-42.0);
    state.update(|value| *value -= 8.0);

    assert_eq!(view.get(), -50.0);
    assert_eq!(view.version(), 2);
}
