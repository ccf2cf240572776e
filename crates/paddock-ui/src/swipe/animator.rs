//! Offset, opacity and scale channels of a swipeable card.
//!
//! The renderer binds to the [`State`] handles; the list item drives the
//! channels either directly from the finger (live mode) or through springs
//! and tweens toward a target (animated mode).

use paddock_animation::{
    Animatable, AnimationEnd, AnimationSpec, AnimationType, ParallelAnimations, SpringSpec,
};
use paddock_core::{RuntimeHandle, State};

use super::config::SwipeConfig;

/// Scale removed at the delete threshold during a notification drag.
const DRAG_SHRINK: f32 = 0.1;
/// Smallest scale reached while dragging.
const DRAG_SCALE_FLOOR: f32 = 0.9;
/// Affordance opacity at the reveal threshold.
const REVEAL_AFFORDANCE_OPACITY: f32 = 0.7;

/// Which card family an item renders.
///
/// Notification cards shrink while dragged and fade their delete
/// affordance in with the drag; conversation cards only translate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardVariant {
    Conversation,
    Notification,
}

impl CardVariant {
    pub fn has_scale_channel(self) -> bool {
        self == CardVariant::Notification
    }
}

pub struct PositionAnimator {
    variant: CardVariant,
    offset: Animatable<f32>,
    opacity: Animatable<f32>,
    scale: Animatable<f32>,
    settle_spring: SpringSpec,
    scale_spring: SpringSpec,
    exit: AnimationSpec,
    exit_scale: f32,
    viewport_width: f32,
    reveal_threshold: f32,
    delete_threshold: f32,
}

impl PositionAnimator {
    pub fn new(variant: CardVariant, config: &SwipeConfig, runtime: RuntimeHandle) -> Self {
        Self {
            variant,
            offset: Animatable::new(0.0, runtime.clone()),
            opacity: Animatable::new(1.0, runtime.clone()),
            scale: Animatable::new(1.0, runtime),
            settle_spring: config.settle_spring,
            scale_spring: config.scale_spring,
            exit: config.exit_animation(),
            exit_scale: config.exit_scale,
            viewport_width: config.viewport_width,
            reveal_threshold: config.reveal_threshold(),
            delete_threshold: config.delete_threshold(),
        }
    }

    pub(crate) fn reconfigure(&mut self, config: &SwipeConfig) {
        self.settle_spring = config.settle_spring;
        self.scale_spring = config.scale_spring;
        self.exit = config.exit_animation();
        self.exit_scale = config.exit_scale;
        self.viewport_width = config.viewport_width;
        self.reveal_threshold = config.reveal_threshold();
        self.delete_threshold = config.delete_threshold();
    }

    pub fn variant(&self) -> CardVariant {
        self.variant
    }

    pub fn offset(&self) -> f32 {
        self.offset.value()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    pub fn offset_state(&self) -> State<f32> {
        self.offset.state()
    }

    pub fn opacity_state(&self) -> State<f32> {
        self.opacity.state()
    }

    pub fn scale_state(&self) -> State<f32> {
        self.scale.state()
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_running() || self.opacity.is_running() || self.scale.is_running()
    }

    /// Opacity of the delete affordance behind the card.
    ///
    /// Conversation cards always draw it fully; notification cards fade it in
    /// across `[0, -reveal, -delete] -> [0, 0.7, 1]`, clamped at both ends.
    pub fn affordance_opacity(&self) -> f32 {
        match self.variant {
            CardVariant::Conversation => 1.0,
            CardVariant::Notification => affordance_opacity_for(
                self.offset(),
                self.reveal_threshold,
                self.delete_threshold,
            ),
        }
    }

    /// Live mode: follow the finger 1:1.
    pub fn set_live(&mut self, offset: f32) {
        self.offset.snapTo(offset);
        if self.variant.has_scale_channel() {
            self.scale
                .snapTo(drag_scale_for(offset, self.delete_threshold));
        }
    }

    /// Freeze every channel where it is. Returns the offset.
    pub fn halt(&mut self) -> f32 {
        self.opacity.stop();
        self.scale.stop();
        self.offset.stop()
    }

    /// Spring the card to `target` and restore its scale.
    pub fn settle(&mut self, target: f32) {
        log::trace!("settling offset {:.1} -> {target:.1}", self.offset());
        self.offset
            .animateTo(target, AnimationType::Spring(self.settle_spring));
        if self.variant.has_scale_channel() {
            self.scale
                .animateTo(1.0, AnimationType::Spring(self.scale_spring));
        }
    }

    /// Run the exit animation; `on_end` fires once every channel has ended.
    pub fn exit(&mut self, on_end: impl FnOnce(AnimationEnd) + 'static) {
        let tween = AnimationType::Tween(self.exit);
        let mut group = ParallelAnimations::new();
        group.add(&mut self.opacity, 0.0, tween);
        group.add(&mut self.offset, -self.viewport_width, tween);
        if self.variant.has_scale_channel() {
            group.add(&mut self.scale, self.exit_scale, tween);
        }
        group.start(on_end);
    }

    /// Put every channel back at rest without animating.
    pub fn reset(&mut self) {
        self.offset.snapTo(0.0);
        self.opacity.snapTo(1.0);
        self.scale.snapTo(1.0);
    }
}

impl std::fmt::Debug for PositionAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionAnimator")
            .field("variant", &self.variant)
            .field("offset", &self.offset())
            .field("opacity", &self.opacity())
            .field("scale", &self.scale())
            .finish()
    }
}

/// `max(1 - 0.1 * |offset| / delete_threshold, 0.9)`.
pub fn drag_scale_for(offset: f32, delete_threshold: f32) -> f32 {
    let progress = offset.abs() / delete_threshold;
    (1.0 - progress * DRAG_SHRINK).max(DRAG_SCALE_FLOOR)
}

pub fn affordance_opacity_for(offset: f32, reveal_threshold: f32, delete_threshold: f32) -> f32 {
    let distance = -offset;
    if distance <= 0.0 {
        0.0
    } else if distance <= reveal_threshold {
        REVEAL_AFFORDANCE_OPACITY * distance / reveal_threshold
    } else if distance <= delete_threshold {
        let span = delete_threshold - reveal_threshold;
        REVEAL_AFFORDANCE_OPACITY
            + (1.0 - REVEAL_AFFORDANCE_OPACITY) * (distance - reveal_threshold) / span
    } else {
        1.0
    }
}

#[cfg(test)]
#[path = "../tests/animator_tests.rs"]
mod tests;
