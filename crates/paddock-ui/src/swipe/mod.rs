//! Swipe-to-reveal / swipe-to-delete list items.

pub mod animator;
pub mod classifier;
pub mod config;
pub mod dispatcher;
pub mod item;
pub mod presentation;
pub mod state;

pub use animator::{affordance_opacity_for, drag_scale_for, CardVariant, PositionAnimator};
pub use classifier::ThresholdClassifier;
pub use config::{FlingConfig, SwipeConfig, SwipeConfigError, DEFAULT_VIEWPORT_WIDTH};
pub use dispatcher::{ActionDispatcher, DeleteTrigger, SwipeCallbacks};
pub use item::{SwipeableListItem, TapOutcome};
pub use presentation::{Presentation, SwipeVisuals};
pub use state::{ReleaseOutcome, SwipeState};
