//! The swipeable list item: gesture tracker, position animator, threshold
//! classifier and action dispatcher wired into one state machine.
//!
//! ```text
//! Resting  --admitted left drag-->  Dragging
//! Dragging --release-->             Resting | Revealed | Removing
//! Revealed --tap card-->            Resting
//! Revealed --tap affordance-->      Removing --exit finished--> on_delete
//! Resting  --tap card-->            on_open
//! ```
//!
//! Each item owns its own state. Sibling items share nothing but the frame
//! runtime, so one card springing back never affects another.

use std::rc::Rc;

use paddock_core::RuntimeHandle;
use paddock_foundation::{
    DragUpdate, HorizontalSwipeTracker, PointerEvent, PointerEventKind, ReleaseSample,
    SwipeGestureEvent,
};

use super::animator::{CardVariant, PositionAnimator};
use super::classifier::ThresholdClassifier;
use super::config::{SwipeConfig, SwipeConfigError};
use super::dispatcher::{ActionDispatcher, DeleteTrigger, SwipeCallbacks};
use super::presentation::{Presentation, SwipeVisuals};
use super::state::{ReleaseOutcome, SwipeState};

/// What a tap on the card body did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// `on_open` ran.
    Opened,
    /// The card was displaced; it springs back instead of opening.
    SnappedBack,
    /// The card is being removed.
    Ignored,
}

pub struct SwipeableListItem<S: 'static> {
    config: SwipeConfig,
    presentation: Presentation,
    state: SwipeState,
    /// Offset the card had when the current drag was admitted. The card
    /// holds there until the finger passes it.
    drag_origin: f32,
    tracker: HorizontalSwipeTracker,
    classifier: ThresholdClassifier,
    animator: PositionAnimator,
    dispatcher: ActionDispatcher<S>,
}

impl<S: 'static> SwipeableListItem<S> {
    pub fn new(
        subject: Rc<S>,
        variant: CardVariant,
        config: SwipeConfig,
        presentation: Presentation,
        runtime: RuntimeHandle,
        callbacks: SwipeCallbacks<S>,
    ) -> Result<Self, SwipeConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            presentation,
            state: SwipeState::Resting,
            drag_origin: 0.0,
            tracker: HorizontalSwipeTracker::new(config.tracker_config()),
            classifier: ThresholdClassifier::from_config(&config),
            animator: PositionAnimator::new(variant, &config, runtime),
            dispatcher: ActionDispatcher::new(subject, callbacks),
        })
    }

    pub fn state(&self) -> SwipeState {
        self.state
    }

    pub fn subject(&self) -> Rc<S> {
        self.dispatcher.subject()
    }

    /// Swap in an updated record (e.g. after it was marked read).
    pub fn replace_subject(&mut self, subject: Rc<S>) {
        self.dispatcher.replace_subject(subject);
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn variant(&self) -> CardVariant {
        self.animator.variant()
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn set_presentation(&mut self, presentation: Presentation) {
        self.presentation = presentation;
    }

    pub fn animator(&self) -> &PositionAnimator {
        &self.animator
    }

    pub fn offset(&self) -> f32 {
        self.animator.offset()
    }

    /// No finger down and nothing animating.
    pub fn is_idle(&self) -> bool {
        !self.tracker.is_tracking() && !self.animator.is_animating()
    }

    /// The animated delete has reached `on_delete`.
    pub fn is_delete_dispatched(&self) -> bool {
        self.dispatcher.is_committed()
    }

    /// Re-derive thresholds for a new viewport width.
    ///
    /// Cards at rest or revealed keep their offset; the new limits apply to
    /// the next gesture.
    pub fn set_viewport_width(&mut self, viewport_width: f32) -> Result<(), SwipeConfigError> {
        let config = self.config.with_viewport_width(viewport_width);
        config.validate()?;
        self.config = config;
        self.tracker
            .set_max_drag_distance(config.max_drag_distance());
        self.classifier = ThresholdClassifier::from_config(&config);
        self.animator.reconfigure(&config);
        Ok(())
    }

    pub fn visuals(&self) -> SwipeVisuals {
        SwipeVisuals {
            state: self.state,
            offset: self.animator.offset(),
            opacity: self.animator.opacity(),
            scale: self.animator.scale(),
            affordance_opacity: self.animator.affordance_opacity(),
            delete_button_visible: self.presentation.shows_delete_button()
                && !self.state.is_removing(),
        }
    }

    /// Feed one pointer event. Returns the state afterwards.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> SwipeState {
        if self.state.is_removing() {
            return self.state;
        }
        if event.kind == PointerEventKind::Down && !self.tracker.is_tracking() {
            self.grab();
        }

        match self.tracker.on_pointer_event(event) {
            SwipeGestureEvent::Ignored | SwipeGestureEvent::Pending(_) => {}
            SwipeGestureEvent::Drag(update) => self.drag(update),
            SwipeGestureEvent::Released(release) => self.release(release),
            SwipeGestureEvent::Tap(_) => {
                self.tap();
            }
            SwipeGestureEvent::Cancelled => self.resume(),
        }
        self.state
    }

    /// Tap on the card body.
    pub fn tap(&mut self) -> TapOutcome {
        if self.state.is_removing() {
            return TapOutcome::Ignored;
        }
        if self.tracker.is_tracking() {
            self.tracker.abort();
        }

        let offset = self.animator.offset();
        if offset < -self.config.tap_epsilon {
            log::debug!("tap on displaced card ({offset:.1}), snapping back");
            self.settle(SwipeState::Resting);
            return TapOutcome::SnappedBack;
        }

        self.dispatcher.open();
        if self.state != SwipeState::Resting || !self.is_at_rest_visuals(0.0) {
            self.settle(SwipeState::Resting);
        }
        TapOutcome::Opened
    }

    /// Tap on the delete affordance exposed by a revealed card.
    pub fn tap_delete_affordance(&mut self) -> bool {
        if self.state != SwipeState::Revealed {
            log::debug!("delete affordance tapped while {:?}, ignoring", self.state);
            return false;
        }
        self.begin_removal(DeleteTrigger::Affordance);
        true
    }

    /// Tap on the always-visible delete button of pointer layouts.
    ///
    /// Bypasses the swipe state machine: `on_delete` runs right away and the
    /// card does not move.
    pub fn tap_delete_button(&mut self) -> bool {
        if !self.presentation.shows_delete_button() {
            log::debug!("delete button is not presented on touch layouts");
            return false;
        }
        if self.state.is_removing() {
            return false;
        }
        self.dispatcher.delete_now(DeleteTrigger::Button)
    }

    fn grab(&mut self) {
        if self.animator.is_animating() {
            let offset = self.animator.halt();
            log::debug!("card grabbed mid-animation at {offset:.1}");
        }
    }

    /// Finish whatever `grab` interrupted when the press did not become a swipe.
    fn resume(&mut self) {
        let target = self.rest_offset(self.state);
        if !self.is_at_rest_visuals(target) {
            self.animator.settle(target);
        }
    }

    fn drag(&mut self, update: DragUpdate) {
        if update.admitted_now {
            self.drag_origin = self.animator.halt();
            self.state = SwipeState::Dragging {
                offset: self.drag_origin,
            };
            log::debug!("drag started from offset {:.1}", self.drag_origin);
        }
        if let Some(offset) = self.tracker.live_offset(self.drag_origin, &update.sample) {
            self.animator.set_live(offset);
            self.state = SwipeState::Dragging { offset };
        }
    }

    fn release(&mut self, release: ReleaseSample) {
        // Measured from where the finger went down, not from the card.
        let distance = (-release.sample.horizontal_delta).max(0.0);
        let outcome = self.classifier.classify_release(distance, release.velocity);
        log::debug!(
            "released at distance {distance:.1} (velocity {:.0}, aborted {}): {outcome:?}",
            release.velocity,
            release.aborted
        );

        match outcome {
            ReleaseOutcome::SnapBack | ReleaseOutcome::Reveal => {
                self.settle(outcome.target_state())
            }
            ReleaseOutcome::CommitDelete => self.begin_removal(DeleteTrigger::Swipe),
        }
    }

    fn settle(&mut self, state: SwipeState) {
        self.state = state;
        self.animator.settle(self.rest_offset(state));
    }

    fn begin_removal(&mut self, trigger: DeleteTrigger) {
        if self.tracker.is_tracking() {
            self.tracker.abort();
        }
        self.state = SwipeState::Removing;
        self.animator.exit(self.dispatcher.commit_on_finish(trigger));
    }

    fn rest_offset(&self, state: SwipeState) -> f32 {
        match state {
            SwipeState::Revealed => -self.config.action_width,
            SwipeState::Removing => -self.config.viewport_width,
            SwipeState::Resting | SwipeState::Dragging { .. } => 0.0,
        }
    }

    fn is_at_rest_visuals(&self, offset: f32) -> bool {
        !self.animator.is_animating()
            && self.animator.offset() == offset
            && self.animator.scale() == 1.0
    }
}

impl<S: 'static> std::fmt::Debug for SwipeableListItem<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeableListItem")
            .field("state", &self.state)
            .field("animator", &self.animator)
            .field("presentation", &self.presentation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../tests/item_tests.rs"]
mod tests;
