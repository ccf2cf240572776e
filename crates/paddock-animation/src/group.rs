//! Joined completion for animations started together.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::animation::{Animatable, AnimationEnd, AnimationType, EndCallback, SpringScalar};

/// Runs several animations side by side and reports a single outcome.
///
/// The outcome is `Finished` once every member finished, or `Interrupted`
/// as soon as any member is cut short. The callback given to
/// [`ParallelAnimations::start`] fires at most once.
///
/// ```ignore
/// let mut exit = ParallelAnimations::new();
/// exit.add(&mut offset, -400.0, AnimationType::Tween(AnimationSpec::linear(200)));
/// exit.add(&mut opacity, 0.0, AnimationType::Tween(AnimationSpec::linear(200)));
/// exit.start(|end| if end.is_finished() { /* remove the row */ });
/// ```
#[derive(Default)]
pub struct ParallelAnimations {
    shared: Rc<GroupShared>,
}

#[derive(Default)]
struct GroupShared {
    remaining: Cell<usize>,
    started: Cell<bool>,
    outcome: Cell<Option<AnimationEnd>>,
    on_end: RefCell<Option<EndCallback>>,
}

impl GroupShared {
    fn member_ended(&self, end: AnimationEnd) {
        self.remaining.set(self.remaining.get().saturating_sub(1));
        if self.outcome.get().is_none() {
            match end {
                AnimationEnd::Interrupted => self.outcome.set(Some(AnimationEnd::Interrupted)),
                AnimationEnd::Finished if self.remaining.get() == 0 => {
                    self.outcome.set(Some(AnimationEnd::Finished))
                }
                AnimationEnd::Finished => {}
            }
        }
        self.fire();
    }

    fn fire(&self) {
        if !self.started.get() {
            return;
        }
        let Some(outcome) = self.outcome.get() else {
            return;
        };
        let callback = self.on_end.borrow_mut().take();
        if let Some(callback) = callback {
            callback(outcome);
        }
    }
}

impl ParallelAnimations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating `animatable` towards `target` as a member of the group.
    pub fn add<T: SpringScalar + 'static>(
        &mut self,
        animatable: &mut Animatable<T>,
        target: T,
        animation: AnimationType,
    ) {
        self.shared.remaining.set(self.shared.remaining.get() + 1);
        let shared = Rc::clone(&self.shared);
        animatable.animateToWithEnd(target, animation, move |end| shared.member_ended(end));
    }

    pub fn len(&self) -> usize {
        self.shared.remaining.get()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Seal the group. An empty group finishes immediately.
    pub fn start(self, on_end: impl FnOnce(AnimationEnd) + 'static) {
        *self.shared.on_end.borrow_mut() = Some(Box::new(on_end));
        if self.shared.remaining.get() == 0 && self.shared.outcome.get().is_none() {
            self.shared.outcome.set(Some(AnimationEnd::Finished));
        }
        self.shared.started.set(true);
        self.shared.fire();
    }
}

impl std::fmt::Debug for ParallelAnimations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelAnimations")
            .field("remaining", &self.shared.remaining.get())
            .field("outcome", &self.shared.outcome.get())
            .finish()
    }
}
