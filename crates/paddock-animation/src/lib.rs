//! Animation system for Paddock
//!
//! Tweens, springs and easing curves driven by the runtime's frame clock.

#![allow(non_snake_case)]

pub mod animation;
pub mod easing;
pub mod group;

pub use animation::*;
pub use easing::Easing;
pub use group::ParallelAnimations;

pub mod prelude {
    pub use crate::animation::{
        Animatable, AnimationEnd, AnimationSpec, AnimationType, Lerp, SpringScalar, SpringSpec,
    };
    pub use crate::easing::Easing;
    pub use crate::group::ParallelAnimations;
}
