pub mod swipe;

pub use swipe::HorizontalSwipeTracker;
