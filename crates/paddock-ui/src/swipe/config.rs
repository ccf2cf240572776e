//! Geometry and motion parameters for swipeable list items.

use paddock_animation::{AnimationSpec, Easing, SpringSpec};
use paddock_foundation::gesture_constants::MAX_DRAG_FRACTION;
use paddock_foundation::SwipeTrackerConfig;
use thiserror::Error;

/// Phone-sized layout width used when no viewport has been measured yet.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 400.0;

/// Offset a revealed card is pinned to, as a positive width.
pub const DEFAULT_ACTION_WIDTH: f32 = 120.0;

/// Offsets more negative than `-DEFAULT_TAP_EPSILON` turn a tap into a snap back.
pub const DEFAULT_TAP_EPSILON: f32 = 10.0;

pub const DEFAULT_EXIT_DURATION_MILLIS: u64 = 200;

/// Velocity-based commit for short, fast swipes.
///
/// A leftward release faster than `velocity_threshold` (px/s) that travelled
/// past the reveal threshold commits the delete even below the delete
/// threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingConfig {
    pub velocity_threshold: f32,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            velocity_threshold: 1_200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwipeConfigError {
    #[error("viewport width must be finite and positive, got {0}")]
    InvalidViewportWidth(f32),
    #[error("{name} must be in (0, 1], got {value}")]
    FractionOutOfRange { name: &'static str, value: f32 },
    #[error("reveal fraction {reveal} must be below delete fraction {delete}")]
    RevealNotBelowDelete { reveal: f32, delete: f32 },
    #[error("action width must be finite and positive, got {0}")]
    InvalidActionWidth(f32),
    #[error("action width {action_width} exceeds the drag limit {max_drag}")]
    ActionWidthExceedsDrag { action_width: f32, max_drag: f32 },
    #[error("action width {action_width} reaches the delete threshold {delete_threshold}")]
    ActionWidthExceedsDelete {
        action_width: f32,
        delete_threshold: f32,
    },
    #[error("tap epsilon must be finite and non-negative, got {0}")]
    InvalidTapEpsilon(f32),
    #[error("exit scale must be in (0, 1], got {0}")]
    InvalidExitScale(f32),
    #[error("fling velocity threshold must be finite and positive, got {0}")]
    InvalidFlingVelocity(f32),
}

/// Swipe configuration shared by every item of a list.
///
/// Thresholds are fractions of `viewport_width`. Use [`SwipeConfig::validate`]
/// (list items do so on construction) before relying on the derived values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    pub viewport_width: f32,
    /// Release past this fraction reveals the delete action.
    pub reveal_fraction: f32,
    /// Release past this fraction commits the delete.
    pub delete_fraction: f32,
    pub max_drag_fraction: f32,
    pub action_width: f32,
    pub tap_epsilon: f32,
    /// Reveal and snap-back motion.
    pub settle_spring: SpringSpec,
    /// Scale recovery of the notification card.
    pub scale_spring: SpringSpec,
    pub exit_duration_millis: u64,
    pub exit_easing: Easing,
    pub exit_scale: f32,
    pub fling: Option<FlingConfig>,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            reveal_fraction: 0.25,
            delete_fraction: 0.5,
            max_drag_fraction: MAX_DRAG_FRACTION,
            action_width: DEFAULT_ACTION_WIDTH,
            tap_epsilon: DEFAULT_TAP_EPSILON,
            settle_spring: SpringSpec::from_tension_friction(100.0, 8.0),
            scale_spring: SpringSpec::from_tension_friction(40.0, 7.0),
            exit_duration_millis: DEFAULT_EXIT_DURATION_MILLIS,
            exit_easing: Easing::EaseInOut,
            exit_scale: 0.8,
            fling: None,
        }
    }
}

impl SwipeConfig {
    pub fn for_viewport(viewport_width: f32) -> Self {
        Self::default().with_viewport_width(viewport_width)
    }

    pub fn with_viewport_width(mut self, viewport_width: f32) -> Self {
        self.viewport_width = viewport_width;
        self
    }

    pub fn with_thresholds(mut self, reveal_fraction: f32, delete_fraction: f32) -> Self {
        self.reveal_fraction = reveal_fraction;
        self.delete_fraction = delete_fraction;
        self
    }

    pub fn with_action_width(mut self, action_width: f32) -> Self {
        self.action_width = action_width;
        self
    }

    pub fn with_tap_epsilon(mut self, tap_epsilon: f32) -> Self {
        self.tap_epsilon = tap_epsilon;
        self
    }

    pub fn with_settle_spring(mut self, spring: SpringSpec) -> Self {
        self.settle_spring = spring;
        self
    }

    pub fn with_exit(mut self, duration_millis: u64, easing: Easing) -> Self {
        self.exit_duration_millis = duration_millis;
        self.exit_easing = easing;
        self
    }

    pub fn with_fling(mut self, fling: FlingConfig) -> Self {
        self.fling = Some(fling);
        self
    }

    pub fn reveal_threshold(&self) -> f32 {
        self.viewport_width * self.reveal_fraction
    }

    pub fn delete_threshold(&self) -> f32 {
        self.viewport_width * self.delete_fraction
    }

    pub fn max_drag_distance(&self) -> f32 {
        self.viewport_width * self.max_drag_fraction
    }

    pub fn exit_animation(&self) -> AnimationSpec {
        AnimationSpec::tween(self.exit_duration_millis, self.exit_easing)
    }

    pub fn tracker_config(&self) -> SwipeTrackerConfig {
        let mut tracker = SwipeTrackerConfig::for_viewport(self.viewport_width);
        tracker.max_drag_distance = self.max_drag_distance();
        tracker
    }

    pub fn validate(&self) -> Result<(), SwipeConfigError> {
        if !self.viewport_width.is_finite() || self.viewport_width <= 0.0 {
            return Err(SwipeConfigError::InvalidViewportWidth(self.viewport_width));
        }
        for (name, value) in [
            ("reveal fraction", self.reveal_fraction),
            ("delete fraction", self.delete_fraction),
            ("max drag fraction", self.max_drag_fraction),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(SwipeConfigError::FractionOutOfRange { name, value });
            }
        }
        if self.reveal_fraction >= self.delete_fraction {
            return Err(SwipeConfigError::RevealNotBelowDelete {
                reveal: self.reveal_fraction,
                delete: self.delete_fraction,
            });
        }
        if !self.action_width.is_finite() || self.action_width <= 0.0 {
            return Err(SwipeConfigError::InvalidActionWidth(self.action_width));
        }
        if self.action_width > self.max_drag_distance() {
            return Err(SwipeConfigError::ActionWidthExceedsDrag {
                action_width: self.action_width,
                max_drag: self.max_drag_distance(),
            });
        }
        // A revealed card must sit inside the reveal band.
        if self.action_width >= self.delete_threshold() {
            return Err(SwipeConfigError::ActionWidthExceedsDelete {
                action_width: self.action_width,
                delete_threshold: self.delete_threshold(),
            });
        }
        if !self.tap_epsilon.is_finite() || self.tap_epsilon < 0.0 {
            return Err(SwipeConfigError::InvalidTapEpsilon(self.tap_epsilon));
        }
        if !(self.exit_scale > 0.0 && self.exit_scale <= 1.0) {
            return Err(SwipeConfigError::InvalidExitScale(self.exit_scale));
        }
        if let Some(fling) = self.fling {
            if !fling.velocity_threshold.is_finite() || fling.velocity_threshold <= 0.0 {
                return Err(SwipeConfigError::InvalidFlingVelocity(
                    fling.velocity_threshold,
                ));
            }
        }
        Ok(())
    }
}
