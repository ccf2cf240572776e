//! Foundation elements for Paddock: pointer input and gesture recognition

pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod velocity_tracker;

pub use gestures::swipe::{
    DragUpdate, GestureSample, HorizontalSwipeTracker, ReleaseSample, SwipeGestureEvent,
    SwipeTrackerConfig,
};
pub use input::{PointerDispatcher, PointerEvent, PointerEventKind, PointerId, PointerPhase};
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::gestures::swipe::{
        GestureSample, HorizontalSwipeTracker, ReleaseSample, SwipeGestureEvent,
        SwipeTrackerConfig,
    };
    pub use crate::input::prelude::*;
}
