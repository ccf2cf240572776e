//! Horizontal swipe recogniser.
//!
//! Turns the raw pointer stream of one list row into gesture samples and
//! decides when a drag is a swipe, when it is a vertical scroll, and when a
//! press was just a tap. The recogniser never touches application state.

use crate::gesture_constants::{
    ADMISSION_SLOP, MAX_DRAG_FRACTION, MAX_FLING_VELOCITY, TAP_SLOP, VERTICAL_TOLERANCE,
};
use crate::input::{PointerEvent, PointerEventKind, PointerId};
use crate::velocity_tracker::VelocityTracker1D;
use paddock_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeTrackerConfig {
    /// |dx| must exceed this before a drag is admitted.
    pub admission_slop: f32,
    /// |dy| must stay below this for a drag to be admitted.
    pub vertical_tolerance: f32,
    /// Press/release travel up to this distance is a tap.
    pub tap_slop: f32,
    /// How far left a card may be dragged.
    pub max_drag_distance: f32,
    pub max_fling_velocity: f32,
}

impl SwipeTrackerConfig {
    pub fn for_viewport(viewport_width: f32) -> Self {
        Self {
            admission_slop: ADMISSION_SLOP,
            vertical_tolerance: VERTICAL_TOLERANCE,
            tap_slop: TAP_SLOP,
            max_drag_distance: viewport_width * MAX_DRAG_FRACTION,
            max_fling_velocity: MAX_FLING_VELOCITY,
        }
    }
}

/// Cumulative displacement since the pointer went down.
///
/// Negative `horizontal_delta` is leftward. `vertical_delta` only serves to
/// tell swipes from scrolls.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GestureSample {
    pub horizontal_delta: f32,
    pub vertical_delta: f32,
}

impl GestureSample {
    pub fn new(horizontal_delta: f32, vertical_delta: f32) -> Self {
        Self {
            horizontal_delta,
            vertical_delta,
        }
    }

    fn between(origin: Point, position: Point) -> Self {
        let delta = position - origin;
        Self::new(delta.x, delta.y)
    }

    fn travel(&self) -> f32 {
        self.horizontal_delta.hypot(self.vertical_delta)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragUpdate {
    pub sample: GestureSample,
    /// True for the move that passed the admission gate.
    pub admitted_now: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseSample {
    pub sample: GestureSample,
    /// Horizontal velocity at release in px/s (0 for aborted gestures).
    pub velocity: f32,
    /// The platform cancelled the pointer; `sample` is the last one seen.
    pub aborted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeGestureEvent {
    /// Not for this tracker (no press in progress, or a different pointer).
    Ignored,
    /// Pressed, but not (yet) admitted as a swipe. No visual change.
    Pending(GestureSample),
    /// Admitted swipe movement.
    Drag(DragUpdate),
    /// An admitted swipe ended.
    Released(ReleaseSample),
    /// Press and release without meaningful travel.
    Tap(Point),
    /// A press that ended without becoming a swipe or a tap.
    Cancelled,
}

#[derive(Clone, Copy, Debug)]
struct ActiveGesture {
    pointer: PointerId,
    origin: Point,
    last: GestureSample,
    admitted: bool,
    max_travel: f32,
}

/// One recogniser per list row, alive as long as the row.
#[derive(Clone, Debug)]
pub struct HorizontalSwipeTracker {
    config: SwipeTrackerConfig,
    active: Option<ActiveGesture>,
    velocity: VelocityTracker1D,
}

impl HorizontalSwipeTracker {
    pub fn new(config: SwipeTrackerConfig) -> Self {
        Self {
            config,
            active: None,
            velocity: VelocityTracker1D::new(),
        }
    }

    pub fn config(&self) -> &SwipeTrackerConfig {
        &self.config
    }

    pub fn set_max_drag_distance(&mut self, max_drag_distance: f32) {
        self.config.max_drag_distance = max_drag_distance;
    }

    /// A pointer is down on this row.
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// A pointer is down and has been admitted as a swipe.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some_and(|active| active.admitted)
    }

    /// The admission gate: horizontal intent, not a vertical scroll.
    pub fn admits(&self, sample: &GestureSample) -> bool {
        sample.horizontal_delta.abs() > self.config.admission_slop
            && sample.vertical_delta.abs() < self.config.vertical_tolerance
    }

    /// Card offset for an admitted sample, or `None` for a rightward sample,
    /// which leaves the card where it is.
    ///
    /// The offset is the finger's displacement clamped to
    /// `max_drag_distance`. `origin_offset` is where the card sat when the
    /// drag was admitted (0 at rest); the card holds there until the finger
    /// has travelled past it.
    pub fn live_offset(&self, origin_offset: f32, sample: &GestureSample) -> Option<f32> {
        let follow = sample
            .horizontal_delta
            .max(-self.config.max_drag_distance);
        (follow < 0.0).then(|| follow.min(origin_offset))
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> SwipeGestureEvent {
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_up(event),
            PointerEventKind::Cancel => self.on_cancel(event),
        }
    }

    /// End the current gesture as if the platform had cancelled it.
    pub fn abort(&mut self) -> SwipeGestureEvent {
        match self.active.take() {
            Some(active) => self.finish_aborted(active),
            None => SwipeGestureEvent::Ignored,
        }
    }

    fn owns(&self, event: &PointerEvent) -> bool {
        self.active.is_some_and(|active| active.pointer == event.id)
    }

    fn on_down(&mut self, event: &PointerEvent) -> SwipeGestureEvent {
        if self.active.is_some() {
            // A second finger (or a lost Up) interrupts the gesture in flight.
            log::debug!("pointer {} interrupted an active swipe", event.id);
            return self.abort();
        }

        self.velocity.reset();
        self.velocity
            .add_data_point(event.uptime_millis, event.position.x);
        self.active = Some(ActiveGesture {
            pointer: event.id,
            origin: event.position,
            last: GestureSample::default(),
            admitted: false,
            max_travel: 0.0,
        });
        SwipeGestureEvent::Pending(GestureSample::default())
    }

    fn on_move(&mut self, event: &PointerEvent) -> SwipeGestureEvent {
        if !self.owns(event) {
            return SwipeGestureEvent::Ignored;
        }
        self.velocity
            .add_data_point(event.uptime_millis, event.position.x);

        let Some(mut active) = self.active else {
            return SwipeGestureEvent::Ignored;
        };
        let sample = GestureSample::between(active.origin, event.position);
        active.max_travel = active.max_travel.max(sample.travel());
        active.last = sample;

        let result = if active.admitted {
            event.consume();
            log::trace!("swipe sample dx={:.1} dy={:.1}", sample.horizontal_delta, sample.vertical_delta);
            SwipeGestureEvent::Drag(DragUpdate {
                sample,
                admitted_now: false,
            })
        } else if self.admits(&sample) {
            active.admitted = true;
            event.consume();
            log::debug!(
                "swipe admitted at dx={:.1} dy={:.1}",
                sample.horizontal_delta,
                sample.vertical_delta
            );
            SwipeGestureEvent::Drag(DragUpdate {
                sample,
                admitted_now: true,
            })
        } else {
            SwipeGestureEvent::Pending(sample)
        };

        self.active = Some(active);
        result
    }

    fn on_up(&mut self, event: &PointerEvent) -> SwipeGestureEvent {
        if !self.owns(event) {
            return SwipeGestureEvent::Ignored;
        }
        self.velocity
            .add_data_point(event.uptime_millis, event.position.x);
        let Some(active) = self.active.take() else {
            return SwipeGestureEvent::Ignored;
        };

        let sample = GestureSample::between(active.origin, event.position);
        if active.admitted {
            event.consume();
            let velocity = self
                .velocity
                .calculate_velocity_with_max(self.config.max_fling_velocity);
            log::debug!(
                "swipe released at dx={:.1} velocity={:.0}px/s",
                sample.horizontal_delta,
                velocity
            );
            return SwipeGestureEvent::Released(ReleaseSample {
                sample,
                velocity,
                aborted: false,
            });
        }

        if active.max_travel.max(sample.travel()) <= self.config.tap_slop {
            SwipeGestureEvent::Tap(event.position)
        } else {
            SwipeGestureEvent::Cancelled
        }
    }

    fn on_cancel(&mut self, event: &PointerEvent) -> SwipeGestureEvent {
        if !self.owns(event) {
            return SwipeGestureEvent::Ignored;
        }
        self.abort()
    }

    fn finish_aborted(&mut self, active: ActiveGesture) -> SwipeGestureEvent {
        self.velocity.reset();
        if active.admitted {
            log::debug!(
                "swipe aborted, releasing at last sample dx={:.1}",
                active.last.horizontal_delta
            );
            SwipeGestureEvent::Released(ReleaseSample {
                sample: active.last,
                velocity: 0.0,
                aborted: true,
            })
        } else {
            SwipeGestureEvent::Cancelled
        }
    }
}

#[cfg(test)]
#[path = "../tests/swipe_tracker_tests.rs"]
mod tests;
