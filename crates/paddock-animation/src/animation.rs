//! Animatable values driven by the runtime's frame clock.
//!
//! Method names (`animateTo`, `snapTo`) follow the Compose API.

use std::cell::RefCell;
use std::rc::Rc;

use paddock_core::{FrameCallbackRegistration, MutableState, RuntimeHandle, State};

use crate::easing::Easing;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Trait for values that can participate in spring animations.
pub trait SpringScalar: Lerp + Clone {
    /// Convert the value to `f32` for physics calculations.
    fn to_f32(&self) -> f32;

    /// Rebuild a value from the physics representation.
    fn from_f32(value: f32) -> Self;

    /// Whether `current` is close enough to `target` to stop a spring.
    fn is_near_target(current: &Self, target: &Self, threshold: f32) -> bool {
        (current.to_f32() - target.to_f32()).abs() < threshold
    }
}

impl SpringScalar for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }

    fn from_f32(value: f32) -> Self {
        value
    }
}

impl SpringScalar for f64 {
    fn to_f32(&self) -> f32 {
        *self as f32
    }

    fn from_f32(value: f32) -> Self {
        value as f64
    }
}

/// Tween specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Spring animation configuration (unit mass).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Speed (units/s) below which the spring may come to rest.
    pub velocity_threshold: f32,
    /// Distance from the target below which the spring may come to rest.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            ..Self::default_spring()
        }
    }

    pub fn stiff() -> Self {
        Self {
            stiffness: 3000.0,
            ..Self::default_spring()
        }
    }

    /// Build a spring from the Origami tension/friction pair used by mobile
    /// toolkits.
    ///
    /// stiffness = (tension - 30) * 3.62 + 194, damping = (friction - 8) * 3 + 25.
    pub fn from_tension_friction(tension: f32, friction: f32) -> Self {
        let stiffness = ((tension - 30.0) * 3.62 + 194.0).max(1.0);
        let damping = ((friction - 8.0) * 3.0 + 25.0).max(0.0);
        Self {
            damping_ratio: damping / (2.0 * stiffness.sqrt()),
            stiffness,
            velocity_threshold: 0.001,
            position_threshold: 0.001,
        }
    }

    /// Viscous damping coefficient for unit mass.
    pub fn damping(&self) -> f32 {
        2.0 * self.damping_ratio * self.stiffness.sqrt()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    /// Time-based tween animation.
    Tween(AnimationSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// How an animation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEnd {
    /// Reached its target.
    Finished,
    /// Replaced by another animation, stopped, or snapped.
    Interrupted,
}

impl AnimationEnd {
    pub fn is_finished(self) -> bool {
        self == AnimationEnd::Finished
    }
}

pub(crate) type EndCallback = Box<dyn FnOnce(AnimationEnd) + 'static>;

/// Maximum integration sub-step for springs.
const SPRING_TIMESTEP_SECS: f32 = 0.016;

/// Generic animatable value holder.
///
/// Clones share the same underlying animation.
pub struct Animatable<T: SpringScalar + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: SpringScalar + 'static> {
    state: MutableState<T>,
    runtime: RuntimeHandle,
    current: T,
    /// Units per second; carried across spring retargets.
    velocity: f32,
    start: T,
    target: T,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    /// Bumped on every start/stop so stale frame callbacks are ignored.
    job: u64,
    running: bool,
    on_end: Option<EndCallback>,
}

impl<T: SpringScalar + 'static> AnimatableInner<T> {
    /// Cancel the pending frame and hand back the callback of the run being cut short.
    fn interrupt(&mut self) -> Option<EndCallback> {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
        self.running = false;
        self.job = self.job.wrapping_add(1);
        self.on_end.take()
    }

    fn settle_at_target(&mut self) {
        self.current = self.target.clone();
        self.start = self.target.clone();
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.state.set_value(self.target.clone());
    }

    fn advance_tween(&mut self, spec: AnimationSpec, frame_time_nanos: u64) -> bool {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let delay_nanos = spec.delay_millis * 1_000_000;
        if elapsed_nanos < delay_nanos {
            return false;
        }

        let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
        let linear_progress =
            ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0);
        if linear_progress >= 1.0 {
            self.settle_at_target();
            return true;
        }

        let progress = spec.easing.transform(linear_progress);
        let value = self.start.lerp(&self.target, progress);
        self.current = value.clone();
        self.state.set_value(value);
        false
    }

    fn advance_spring(&mut self, spec: SpringSpec, frame_time_nanos: u64) -> bool {
        // The first frame only anchors the clock.
        let Some(last_frame) = self.last_frame_nanos.replace(frame_time_nanos) else {
            return false;
        };

        let mut remaining = frame_time_nanos.saturating_sub(last_frame) as f32 / 1_000_000_000.0;
        let target = self.target.to_f32();
        let damping = spec.damping();
        let mut position = self.current.to_f32();
        let mut velocity = self.velocity;

        // Semi-implicit Euler: F = -k * x - c * v
        while remaining > 0.0 {
            let step = remaining.min(SPRING_TIMESTEP_SECS);
            let force = -spec.stiffness * (position - target) - damping * velocity;
            velocity += force * step;
            position += velocity * step;
            remaining -= step;
        }

        self.velocity = velocity;
        self.current = T::from_f32(position);

        let at_rest = velocity.abs() < spec.velocity_threshold;
        let near_target = T::is_near_target(&self.current, &self.target, spec.position_threshold);
        if at_rest && near_target {
            self.settle_at_target();
            return true;
        }

        self.state.set_value(self.current.clone());
        false
    }
}

impl<T: SpringScalar + 'static> Animatable<T> {
    /// Create a new animatable with the given initial value.
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            state: MutableState::new(initial.clone()),
            runtime,
            current: initial.clone(),
            velocity: 0.0,
            start: initial.clone(),
            target: initial,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            registration: None,
            job: 0,
            running: false,
            on_end: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate from the current value to `target`.
    pub fn animateTo(&mut self, target: T, animation: AnimationType) {
        self.start_animation(target, animation, None);
    }

    /// Animate to `target` and call `on_end` exactly once when the run ends.
    pub fn animateToWithEnd(
        &mut self,
        target: T,
        animation: AnimationType,
        on_end: impl FnOnce(AnimationEnd) + 'static,
    ) {
        self.start_animation(target, animation, Some(Box::new(on_end)));
    }

    fn start_animation(&mut self, target: T, animation: AnimationType, on_end: Option<EndCallback>) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();
            let interrupted = inner.interrupt();
            inner.start = inner.current.clone();
            inner.target = target;
            if matches!(animation, AnimationType::Tween(_)) {
                inner.velocity = 0.0;
            }
            inner.animation_type = animation;
            inner.start_time_nanos = None;
            inner.last_frame_nanos = None;
            inner.running = true;
            inner.on_end = on_end;
            interrupted
        };

        if let Some(callback) = interrupted {
            callback(AnimationEnd::Interrupted);
        }
        Self::schedule_frame(&self.inner);
    }

    /// Halt any running animation at its current value and return it.
    pub fn stop(&mut self) -> T {
        let (value, interrupted) = {
            let mut inner = self.inner.borrow_mut();
            let interrupted = inner.interrupt();
            inner.velocity = 0.0;
            inner.start = inner.current.clone();
            inner.target = inner.current.clone();
            inner.start_time_nanos = None;
            inner.last_frame_nanos = None;
            (inner.current.clone(), interrupted)
        };
        if let Some(callback) = interrupted {
            callback(AnimationEnd::Interrupted);
        }
        value
    }

    /// Snap immediately to `value` without animating.
    pub fn snapTo(&mut self, value: T) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();
            let interrupted = inner.interrupt();
            inner.target = value;
            inner.settle_at_target();
            interrupted
        };
        if let Some(callback) = interrupted {
            callback(AnimationEnd::Interrupted);
        }
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn velocity(&self) -> f32 {
        self.inner.borrow().velocity
    }

    pub fn animation_type(&self) -> AnimationType {
        self.inner.borrow().animation_type
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    pub fn state(&self) -> State<T> {
        self.inner.borrow().state.as_state()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let (runtime, job) = {
            let inner = this.borrow();
            if inner.registration.is_some() || !inner.running {
                return;
            }
            (inner.runtime.clone(), inner.job)
        };

        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, job, time);
            }
        });

        if registration.is_active() {
            this.borrow_mut().registration = Some(registration);
            return;
        }

        // No runtime left to tick us; land on the target right away.
        log::debug!("frame runtime is gone, snapping animation to its target");
        let finished = {
            let mut inner = this.borrow_mut();
            inner.running = false;
            inner.settle_at_target();
            inner.on_end.take()
        };
        if let Some(callback) = finished {
            callback(AnimationEnd::Finished);
        }
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, job: u64, frame_time_nanos: u64) {
        let finished = {
            let mut inner = this.borrow_mut();
            if inner.job != job || !inner.running {
                return;
            }
            inner.registration = None;

            let done = match inner.animation_type {
                AnimationType::Tween(spec) => inner.advance_tween(spec, frame_time_nanos),
                AnimationType::Spring(spec) => inner.advance_spring(spec, frame_time_nanos),
            };
            if !done {
                None
            } else {
                inner.running = false;
                Some(inner.on_end.take())
            }
        };

        match finished {
            Some(callback) => {
                if let Some(callback) = callback {
                    callback(AnimationEnd::Finished);
                }
            }
            None => Self::schedule_frame(this),
        }
    }
}

impl<T: SpringScalar + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: SpringScalar + std::fmt::Debug + 'static> std::fmt::Debug for Animatable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Animatable")
            .field("current", &inner.current)
            .field("target", &inner.target)
            .field("running", &inner.running)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
