use super::*;

const WIDTH: f32 = 400.0;

fn tracker() -> HorizontalSwipeTracker {
    HorizontalSwipeTracker::new(SwipeTrackerConfig::for_viewport(WIDTH))
}

fn at(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

fn drag(tracker: &mut HorizontalSwipeTracker, dx: f32, dy: f32, t: i64) -> SwipeGestureEvent {
    tracker.on_pointer_event(&PointerEvent::moved(at(300.0 + dx, 40.0 + dy), t))
}

fn press(tracker: &mut HorizontalSwipeTracker) -> SwipeGestureEvent {
    tracker.on_pointer_event(&PointerEvent::down(at(300.0, 40.0), 0))
}

#[test]
fn down_starts_pending_gesture() {
    let mut tracker = tracker();
    assert_eq!(
        press(&mut tracker),
        SwipeGestureEvent::Pending(GestureSample::default())
    );
    assert!(tracker.is_tracking());
    assert!(!tracker.is_dragging());
}

#[test]
fn jitter_below_slop_is_not_admitted() {
    let mut tracker = tracker();
    press(&mut tracker);
    let event = drag(&mut tracker, -5.0, 0.0, 16);
    assert_eq!(
        event,
        SwipeGestureEvent::Pending(GestureSample::new(-5.0, 0.0))
    );
    assert!(!tracker.is_dragging());
}

#[test]
fn horizontal_drag_is_admitted_once() {
    let mut tracker = tracker();
    press(&mut tracker);

    let first = drag(&mut tracker, -6.0, 2.0, 16);
    assert_eq!(
        first,
        SwipeGestureEvent::Drag(DragUpdate {
            sample: GestureSample::new(-6.0, 2.0),
            admitted_now: true,
        })
    );

    let second = drag(&mut tracker, -60.0, 4.0, 32);
    assert_eq!(
        second,
        SwipeGestureEvent::Drag(DragUpdate {
            sample: GestureSample::new(-60.0, 4.0),
            admitted_now: false,
        })
    );
}

#[test]
fn vertical_scroll_is_never_admitted() {
    let mut tracker = tracker();
    press(&mut tracker);
    assert!(matches!(
        drag(&mut tracker, -80.0, 50.0, 16),
        SwipeGestureEvent::Pending(_)
    ));
    let release = tracker.on_pointer_event(&PointerEvent::up(at(220.0, 90.0), 32));
    assert_eq!(release, SwipeGestureEvent::Cancelled);
}

#[test]
fn admitted_events_are_consumed() {
    let mut tracker = tracker();
    press(&mut tracker);

    let pending = PointerEvent::moved(at(298.0, 40.0), 16);
    tracker.on_pointer_event(&pending);
    assert!(!pending.is_consumed());

    let admitted = PointerEvent::moved(at(280.0, 40.0), 32);
    tracker.on_pointer_event(&admitted);
    assert!(admitted.is_consumed());

    let up = PointerEvent::up(at(280.0, 40.0), 48);
    tracker.on_pointer_event(&up);
    assert!(up.is_consumed());
}

#[test]
fn short_press_is_a_tap() {
    let mut tracker = tracker();
    press(&mut tracker);
    drag(&mut tracker, 2.0, 1.0, 16);
    let event = tracker.on_pointer_event(&PointerEvent::up(at(302.0, 41.0), 80));
    assert_eq!(event, SwipeGestureEvent::Tap(at(302.0, 41.0)));
    assert!(!tracker.is_tracking());
}

#[test]
fn release_reports_sample_and_leftward_velocity() {
    let mut tracker = tracker();
    press(&mut tracker);
    for step in 1..=5 {
        drag(&mut tracker, -30.0 * step as f32, 0.0, 10 * step);
    }
    let event = tracker.on_pointer_event(&PointerEvent::up(at(150.0, 40.0), 50));
    let SwipeGestureEvent::Released(release) = event else {
        panic!("expected release, got {event:?}");
    };
    assert_eq!(release.sample, GestureSample::new(-150.0, 0.0));
    assert!(!release.aborted);
    assert!(release.velocity < -2_000.0, "velocity {}", release.velocity);
    assert!(release.velocity >= -MAX_FLING_VELOCITY);
}

#[test]
fn cancel_after_admission_releases_at_last_sample() {
    let mut tracker = tracker();
    press(&mut tracker);
    drag(&mut tracker, -40.0, 0.0, 16);
    drag(&mut tracker, -110.0, 3.0, 32);

    let event = tracker.on_pointer_event(&PointerEvent::cancel(at(0.0, 0.0), 48));
    assert_eq!(
        event,
        SwipeGestureEvent::Released(ReleaseSample {
            sample: GestureSample::new(-110.0, 3.0),
            velocity: 0.0,
            aborted: true,
        })
    );
    assert!(!tracker.is_tracking());
}

#[test]
fn cancel_before_admission_is_cancelled() {
    let mut tracker = tracker();
    press(&mut tracker);
    let event = tracker.on_pointer_event(&PointerEvent::cancel(at(300.0, 40.0), 16));
    assert_eq!(event, SwipeGestureEvent::Cancelled);
}

#[test]
fn second_down_interrupts_active_drag() {
    let mut tracker = tracker();
    press(&mut tracker);
    drag(&mut tracker, -90.0, 0.0, 16);

    let second = PointerEvent::down(at(10.0, 10.0), 32).with_id(7);
    let event = tracker.on_pointer_event(&second);
    assert!(matches!(
        event,
        SwipeGestureEvent::Released(ReleaseSample { aborted: true, .. })
    ));
    assert!(!tracker.is_tracking());
}

#[test]
fn foreign_pointer_is_ignored() {
    let mut tracker = tracker();
    press(&mut tracker);
    let other = PointerEvent::moved(at(100.0, 40.0), 16).with_id(3);
    assert_eq!(tracker.on_pointer_event(&other), SwipeGestureEvent::Ignored);
    assert!(!tracker.is_dragging());
}

#[test]
fn events_without_press_are_ignored() {
    let mut tracker = tracker();
    assert_eq!(
        drag(&mut tracker, -50.0, 0.0, 16),
        SwipeGestureEvent::Ignored
    );
    assert_eq!(
        tracker.on_pointer_event(&PointerEvent::up(at(0.0, 0.0), 32)),
        SwipeGestureEvent::Ignored
    );
    assert_eq!(tracker.abort(), SwipeGestureEvent::Ignored);
}

#[test]
fn live_offset_clamps_and_ignores_rightward() {
    let tracker = tracker();
    assert_eq!(
        tracker.live_offset(0.0, &GestureSample::new(-150.0, 0.0)),
        Some(-150.0)
    );
    assert_eq!(
        tracker.live_offset(0.0, &GestureSample::new(-500.0, 0.0)),
        Some(-320.0)
    );
    assert_eq!(tracker.live_offset(0.0, &GestureSample::new(40.0, 0.0)), None);
    assert_eq!(
        tracker.live_offset(-120.0, &GestureSample::new(-30.0, 0.0)),
        Some(-120.0)
    );
    assert_eq!(
        tracker.live_offset(-120.0, &GestureSample::new(-150.0, 0.0)),
        Some(-150.0)
    );
    assert_eq!(
        tracker.live_offset(-120.0, &GestureSample::new(200.0, 0.0)),
        None
    );
}

#[test]
fn viewport_change_updates_clamp() {
    let mut tracker = tracker();
    tracker.set_max_drag_distance(100.0);
    assert_eq!(
        tracker.live_offset(0.0, &GestureSample::new(-300.0, 0.0)),
        Some(-100.0)
    );
}
