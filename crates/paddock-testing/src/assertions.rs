//! Assertion helpers for robot tests.

use paddock_ui::{ListSubject, SubjectStore, SwipeState, SwipeVisuals};

use crate::robot::ScreenRobot;

/// Assert that a value is within `tolerance` of `expected`.
///
/// Spring positions land on their target only within the spring's position
/// threshold, so exact comparisons on mid-flight values are brittle.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a card is settled in `state` at `offset`, fully opaque and
/// unscaled.
pub fn assert_at_rest(visuals: SwipeVisuals, state: SwipeState, offset: f32) {
    assert_eq!(visuals.state, state, "state of {visuals:?}");
    assert_approx_eq(visuals.offset, offset, 0.01, "offset");
    assert_approx_eq(visuals.opacity, 1.0, 0.001, "opacity");
    assert_approx_eq(visuals.scale, 1.0, 0.001, "scale");
}

/// Assert the listed ids, in order.
pub fn assert_order<S, St>(robot: &ScreenRobot<S, St>, expected: &[&str])
where
    S: ListSubject,
    St: SubjectStore<S>,
{
    let actual: Vec<&str> = robot.screen().ids().collect();
    assert_eq!(actual, expected, "list order");
}
