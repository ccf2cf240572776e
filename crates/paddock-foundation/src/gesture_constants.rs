//! Shared gesture thresholds.
//!
//! Values are in logical (density-independent) pixels.

/// Horizontal travel required before a swipe is recognised.
///
/// Anything below this is finger jitter and must not move the card.
pub const ADMISSION_SLOP: f32 = 5.0;

/// Vertical travel at or beyond which a movement reads as a list scroll
/// instead of a swipe.
pub const VERTICAL_TOLERANCE: f32 = 50.0;

/// Maximum travel between press and release that still counts as a tap.
///
/// Matches the usual touch slop (Android uses ~8dp for ViewConfiguration.TOUCH_SLOP).
pub const TAP_SLOP: f32 = 8.0;

/// Fraction of the viewport width a card may be dragged.
pub const MAX_DRAG_FRACTION: f32 = 0.8;

/// Maximum fling velocity in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
