//! Robot-style driver for list screens.
//!
//! A [`ScreenRobot`] owns the frame runtime, a [`ListScreen`] and a virtual
//! clock. Gestures are synthesised as pointer event sequences with 60 Hz
//! timestamps, and a frame is drained between consecutive pointer samples
//! the way a real host interleaves input and rendering.
//!
//! # Example
//!
//! ```
//! use paddock_testing::{fixtures, InMemoryStore, ScreenRobot};
//! use paddock_ui::SwipeState;
//!
//! let store = InMemoryStore::new(fixtures::notifications(3));
//! let mut robot = ScreenRobot::new(store, 400.0).unwrap();
//!
//! robot.swipe("n1", -150.0);
//! robot.wait_for_idle();
//! assert_eq!(robot.visuals("n1").unwrap().state, SwipeState::Revealed);
//! ```

use paddock_core::{Runtime, FRAME_INTERVAL_NANOS};
use paddock_foundation::PointerEvent;
use paddock_ui::{
    DeleteConfirmation, ListScreen, ListSubject, Presentation, ScreenEffect, ScreenError,
    SubjectStore, SwipeConfig, SwipeState, SwipeVisuals,
};
use paddock_ui_graphics::Point;

use crate::fixtures::reference_now;

/// Height of one card; rows are stacked from y = 0.
pub const ROW_HEIGHT: f32 = 88.0;

/// Pointer samples per synthesised drag.
const DRAG_STEPS: usize = 5;
/// Frames `wait_for_idle` runs before giving up.
const IDLE_FRAME_LIMIT: usize = 600;

#[derive(Debug, Clone)]
struct Press {
    id: String,
    start: Point,
    position: Point,
}

/// Programmatic control over one list screen.
pub struct ScreenRobot<S: ListSubject, St: SubjectStore<S>> {
    runtime: Runtime,
    screen: ListScreen<S, St>,
    frame_nanos: u64,
    press: Option<Press>,
}

impl<S: ListSubject, St: SubjectStore<S>> ScreenRobot<S, St> {
    /// Create a screen over `store` for the given viewport width and load it.
    pub fn new(store: St, viewport_width: f32) -> Result<Self, ScreenError> {
        Self::with_config(store, SwipeConfig::for_viewport(viewport_width))
    }

    pub fn with_config(store: St, config: SwipeConfig) -> Result<Self, ScreenError> {
        let runtime = Runtime::new();
        let mut screen =
            ListScreen::new(store, runtime.handle(), config)?.with_clock(reference_now);
        screen.refresh()?;
        Ok(Self {
            runtime,
            screen,
            frame_nanos: 0,
            press: None,
        })
    }

    pub fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.screen.set_presentation(presentation);
        self
    }

    pub fn with_confirmation(mut self, confirmation: DeleteConfirmation) -> Self {
        self.screen = self.screen.with_confirmation(confirmation);
        self
    }

    pub fn screen(&self) -> &ListScreen<S, St> {
        &self.screen
    }

    /// Get access to the underlying screen for advanced scenarios.
    pub fn screen_mut(&mut self) -> &mut ListScreen<S, St> {
        &mut self.screen
    }

    pub fn store(&self) -> &St {
        self.screen.store()
    }

    pub fn store_mut(&mut self) -> &mut St {
        self.screen.store_mut()
    }

    pub fn visuals(&self, id: &str) -> Option<SwipeVisuals> {
        self.screen.visuals(id)
    }

    pub fn state(&self, id: &str) -> Option<SwipeState> {
        self.visuals(id).map(|visuals| visuals.state)
    }

    /// Timestamp of the last drained frame.
    pub fn frame_nanos(&self) -> u64 {
        self.frame_nanos
    }

    fn uptime_millis(&self) -> i64 {
        i64::try_from(self.frame_nanos / 1_000_000).unwrap_or(i64::MAX)
    }

    /// Centre-right of the card, where a thumb usually starts a swipe.
    fn anchor(&self, id: &str) -> Point {
        let row = self.screen.ids().position(|other| other == id).unwrap_or(0);
        Point::new(
            self.screen.config().viewport_width - 40.0,
            row as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0,
        )
    }

    fn send(&mut self, id: &str, event: PointerEvent) -> SwipeState {
        match self.screen.pointer_event(id, &event) {
            Ok(state) => state,
            Err(err) => panic!("pointer event for {id}: {err}"),
        }
    }

    /// Put a finger down on the card.
    pub fn press(&mut self, id: &str) -> SwipeState {
        assert!(self.press.is_none(), "a pointer is already down");
        let start = self.anchor(id);
        self.press = Some(Press {
            id: id.to_string(),
            start,
            position: start,
        });
        let event = PointerEvent::down(start, self.uptime_millis());
        self.send(id, event)
    }

    /// Move the pressed finger to `(dx, dy)` from where it went down, after
    /// one frame.
    pub fn move_to(&mut self, dx: f32, dy: f32) -> SwipeState {
        self.advance_frames(1);
        let press = self.press.as_mut().expect("no pointer is down");
        press.position = Point::new(press.start.x + dx, press.start.y + dy);
        let (id, position) = (press.id.clone(), press.position);
        let event = PointerEvent::moved(position, self.uptime_millis());
        self.send(&id, event)
    }

    /// Lift the pressed finger where it is, after one frame.
    pub fn release(&mut self) -> SwipeState {
        self.advance_frames(1);
        self.lift()
    }

    fn lift(&mut self) -> SwipeState {
        let press = self.press.take().expect("no pointer is down");
        let event = PointerEvent::up(press.position, self.uptime_millis());
        self.send(&press.id, event)
    }

    /// The platform takes the pointer away (e.g. the list starts scrolling).
    pub fn cancel(&mut self) -> SwipeState {
        let press = self.press.take().expect("no pointer is down");
        let event = PointerEvent::cancel(press.position, self.uptime_millis());
        self.send(&press.id, event)
    }

    /// Press and drag horizontally by `dx` in even steps without lifting.
    pub fn drag(&mut self, id: &str, dx: f32) -> SwipeState {
        self.press(id);
        let mut state = SwipeState::Resting;
        for step in 1..=DRAG_STEPS {
            state = self.move_to(dx * step as f32 / DRAG_STEPS as f32, 0.0);
        }
        state
    }

    /// A full swipe: press, drag by `dx`, release.
    pub fn swipe(&mut self, id: &str, dx: f32) -> SwipeState {
        self.drag(id, dx);
        self.release()
    }

    /// A swipe that lifts while the finger is still moving, so the release
    /// carries the full drag velocity.
    pub fn fling(&mut self, id: &str, dx: f32) -> SwipeState {
        self.drag(id, dx);
        self.lift()
    }

    /// A vertical drag over the card, as when scrolling the list.
    pub fn scroll(&mut self, id: &str, dy: f32) -> SwipeState {
        self.press(id);
        for step in 1..=DRAG_STEPS {
            self.move_to(0.0, dy * step as f32 / DRAG_STEPS as f32);
        }
        self.release()
    }

    /// Press and release in place.
    pub fn click(&mut self, id: &str) -> SwipeState {
        self.press(id);
        self.release()
    }

    pub fn tap_delete_affordance(&mut self, id: &str) -> bool {
        match self.screen.tap_delete_affordance(id) {
            Ok(started) => started,
            Err(err) => panic!("delete affordance of {id}: {err}"),
        }
    }

    pub fn tap_delete_button(&mut self, id: &str) -> bool {
        match self.screen.tap_delete_button(id) {
            Ok(fired) => fired,
            Err(err) => panic!("delete button of {id}: {err}"),
        }
    }

    /// Advance frame time by `count` frames of 60 Hz.
    pub fn advance_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.frame_nanos += FRAME_INTERVAL_NANOS;
            self.screen.frame(self.frame_nanos);
        }
    }

    /// Advance frame time by at least `millis`.
    pub fn advance_time(&mut self, millis: u64) {
        let nanos = millis * 1_000_000;
        let frames = nanos.div_ceil(FRAME_INTERVAL_NANOS);
        self.advance_frames(frames as usize);
    }

    /// Run frames until no animation is pending. Returns the number of
    /// frames it took.
    ///
    /// Panics if the screen does not settle within ten seconds of frames.
    pub fn wait_for_idle(&mut self) -> usize {
        let handle = self.runtime.handle();
        for frames in 0..IDLE_FRAME_LIMIT {
            if !handle.has_frame_callbacks() {
                return frames;
            }
            self.advance_frames(1);
        }
        panic!("screen still animating after {IDLE_FRAME_LIMIT} frames");
    }

    pub fn drain_effects(&mut self) -> Vec<ScreenEffect> {
        self.screen.drain_effects()
    }
}

impl<S: ListSubject, St: SubjectStore<S>> std::fmt::Debug for ScreenRobot<S, St> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenRobot")
            .field("screen", &self.screen)
            .field("frame_nanos", &self.frame_nanos)
            .field("press", &self.press)
            .finish()
    }
}
