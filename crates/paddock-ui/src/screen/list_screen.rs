//! A list screen: the ordered collection of records plus one swipeable item
//! per record.
//!
//! Items never touch the collection. They report opens and deletes through
//! a queue the screen drains after every input event and frame, so deletes
//! that complete inside a frame are applied once the frame is over.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use paddock_core::collections::map::HashMap;
use paddock_core::RuntimeHandle;
use paddock_foundation::PointerEvent;
use thiserror::Error;

use super::store::{StoreError, SubjectStore};
use super::subject::{DeletePrompt, ListSubject, OpenAction};
use crate::models::ChatRoute;
use crate::swipe::{
    DeleteTrigger, Presentation, SwipeCallbacks, SwipeConfig, SwipeConfigError, SwipeState,
    SwipeVisuals, SwipeableListItem, TapOutcome,
};

/// When deleting asks the user first. Applies to every list context alike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteConfirmation {
    /// Prompt for the explicit button only; a swipe past the threshold (or a
    /// tap on the revealed affordance) is already a deliberate gesture.
    #[default]
    ButtonOnly,
    Always,
    Never,
}

impl DeleteConfirmation {
    pub fn requires_prompt(self, trigger: DeleteTrigger) -> bool {
        match self {
            DeleteConfirmation::ButtonOnly => trigger == DeleteTrigger::Button,
            DeleteConfirmation::Always => true,
            DeleteConfirmation::Never => false,
        }
    }
}

/// Something the host has to show or do on the screen's behalf.
#[derive(Clone, Debug, PartialEq)]
pub enum ScreenEffect {
    Alert {
        title: String,
        message: String,
    },
    /// Ask the user; answer with `confirm_delete` or `cancel_delete`.
    ConfirmDelete {
        id: String,
        prompt: DeletePrompt,
    },
    Removed {
        id: String,
        notice: Option<&'static str>,
    },
    OpenChat(ChatRoute),
}

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("no list item with id {0}")]
    UnknownSubject(String),
    #[error("no delete is waiting for confirmation")]
    NoPendingDelete,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Config(#[from] SwipeConfigError),
}

#[derive(Debug)]
enum ItemAction {
    Open(String),
    Delete(String, DeleteTrigger),
}

#[derive(Debug)]
struct PendingDelete {
    id: String,
    trigger: DeleteTrigger,
}

type Clock = Box<dyn Fn() -> DateTime<Utc>>;

pub struct ListScreen<S: ListSubject, St: SubjectStore<S>> {
    store: St,
    runtime: RuntimeHandle,
    config: SwipeConfig,
    presentation: Presentation,
    confirmation: DeleteConfirmation,
    subjects: IndexMap<String, Rc<S>>,
    items: HashMap<String, SwipeableListItem<S>>,
    actions: Rc<RefCell<VecDeque<ItemAction>>>,
    effects: Vec<ScreenEffect>,
    pending: Option<PendingDelete>,
    clock: Clock,
}

impl<S: ListSubject, St: SubjectStore<S>> ListScreen<S, St> {
    pub fn new(store: St, runtime: RuntimeHandle, config: SwipeConfig) -> Result<Self, ScreenError> {
        config.validate()?;
        Ok(Self {
            store,
            runtime,
            config,
            presentation: Presentation::default(),
            confirmation: DeleteConfirmation::default(),
            subjects: IndexMap::new(),
            items: HashMap::default(),
            actions: Rc::new(RefCell::new(VecDeque::new())),
            effects: Vec::new(),
            pending: None,
            clock: Box::new(Utc::now),
        })
    }

    pub fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.set_presentation(presentation);
        self
    }

    pub fn with_confirmation(mut self, confirmation: DeleteConfirmation) -> Self {
        self.confirmation = confirmation;
        self
    }

    /// Clock used to stamp `read_at`.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut St {
        &mut self.store
    }

    pub fn runtime(&self) -> &RuntimeHandle {
        &self.runtime
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    pub fn subjects(&self) -> impl Iterator<Item = &S> {
        self.subjects.values().map(|subject| subject.as_ref())
    }

    pub fn subject(&self, id: &str) -> Option<&S> {
        self.subjects.get(id).map(|subject| subject.as_ref())
    }

    pub fn item(&self, id: &str) -> Option<&SwipeableListItem<S>> {
        self.items.get(id)
    }

    pub fn visuals(&self, id: &str) -> Option<SwipeVisuals> {
        self.items.get(id).map(SwipeableListItem::visuals)
    }

    pub fn unread_count(&self) -> usize {
        self.subjects.values().filter(|subject| subject.is_unread()).count()
    }

    /// A delete is waiting for `confirm_delete` / `cancel_delete`.
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending.as_ref().map(|pending| pending.id.as_str())
    }

    /// Nothing animating, no finger down, no queued work.
    pub fn is_idle(&self) -> bool {
        self.actions.borrow().is_empty() && self.items.values().all(SwipeableListItem::is_idle)
    }

    /// Reload the collection from the store, keeping the swipe state of
    /// records that are still present.
    pub fn refresh(&mut self) -> Result<usize, ScreenError> {
        let fetched = self.store.fetch_all().map_err(|err| {
            log::warn!("failed to load list: {err}");
            err
        })?;

        let mut subjects = IndexMap::with_capacity(fetched.len());
        let mut items = HashMap::default();
        for subject in fetched {
            let id = subject.id().to_string();
            let subject = Rc::new(subject);
            let item = match self.items.remove(&id) {
                Some(mut item) => {
                    item.replace_subject(Rc::clone(&subject));
                    item
                }
                None => self.build_item(Rc::clone(&subject))?,
            };
            items.insert(id.clone(), item);
            subjects.insert(id, subject);
        }

        if let Some(pending) = &self.pending {
            if !subjects.contains_key(&pending.id) {
                log::debug!("pending delete of {} dropped by refresh", pending.id);
                self.pending = None;
            }
        }
        self.subjects = subjects;
        self.items = items;
        log::debug!("list refreshed with {} records", self.subjects.len());
        Ok(self.subjects.len())
    }

    pub fn pointer_event(&mut self, id: &str, event: &PointerEvent) -> Result<SwipeState, ScreenError> {
        let state = self.item_mut(id)?.on_pointer_event(event);
        self.process_actions();
        Ok(state)
    }

    pub fn tap(&mut self, id: &str) -> Result<TapOutcome, ScreenError> {
        let outcome = self.item_mut(id)?.tap();
        self.process_actions();
        Ok(outcome)
    }

    pub fn tap_delete_affordance(&mut self, id: &str) -> Result<bool, ScreenError> {
        let started = self.item_mut(id)?.tap_delete_affordance();
        self.process_actions();
        Ok(started)
    }

    pub fn tap_delete_button(&mut self, id: &str) -> Result<bool, ScreenError> {
        let fired = self.item_mut(id)?.tap_delete_button();
        self.process_actions();
        Ok(fired)
    }

    pub fn confirm_delete(&mut self) -> Result<(), ScreenError> {
        let pending = self.pending.take().ok_or(ScreenError::NoPendingDelete)?;
        self.perform_delete(&pending.id);
        Ok(())
    }

    pub fn cancel_delete(&mut self) -> Result<(), ScreenError> {
        let pending = self.pending.take().ok_or(ScreenError::NoPendingDelete)?;
        self.restore_if_animated(&pending)
    }

    /// Advance every animation to `frame_time_nanos` and apply what finished.
    pub fn frame(&mut self, frame_time_nanos: u64) {
        self.runtime.drain_frame_callbacks(frame_time_nanos);
        self.process_actions();
    }

    pub fn drain_effects(&mut self) -> Vec<ScreenEffect> {
        std::mem::take(&mut self.effects)
    }

    pub fn mark_all_read(&mut self) -> Result<(), ScreenError> {
        self.store.mark_all_read()?;
        let now = (self.clock)();
        for (id, subject) in self.subjects.iter_mut() {
            if subject.is_unread() {
                Rc::make_mut(subject).mark_read(now);
                if let Some(item) = self.items.get_mut(id) {
                    item.replace_subject(Rc::clone(subject));
                }
            }
        }
        Ok(())
    }

    pub fn set_presentation(&mut self, presentation: Presentation) {
        self.presentation = presentation;
        for item in self.items.values_mut() {
            item.set_presentation(presentation);
        }
    }

    /// Apply a new viewport width to every card. An unusable width is
    /// rejected and the previous layout kept.
    pub fn set_viewport_width(&mut self, viewport_width: f32) -> Result<(), SwipeConfigError> {
        let config = self.config.with_viewport_width(viewport_width);
        if let Err(err) = config.validate() {
            log::warn!("ignoring viewport width {viewport_width}: {err}");
            return Err(err);
        }
        self.config = config;
        for item in self.items.values_mut() {
            item.set_viewport_width(viewport_width)?;
        }
        Ok(())
    }

    fn item_mut(&mut self, id: &str) -> Result<&mut SwipeableListItem<S>, ScreenError> {
        self.items
            .get_mut(id)
            .ok_or_else(|| ScreenError::UnknownSubject(id.to_string()))
    }

    fn build_item(&self, subject: Rc<S>) -> Result<SwipeableListItem<S>, SwipeConfigError> {
        let opens = Rc::clone(&self.actions);
        let deletes = Rc::clone(&self.actions);
        let callbacks = SwipeCallbacks::new(
            move |subject: &S| {
                opens
                    .borrow_mut()
                    .push_back(ItemAction::Open(subject.id().to_string()))
            },
            move |subject: &S, trigger| {
                deletes
                    .borrow_mut()
                    .push_back(ItemAction::Delete(subject.id().to_string(), trigger))
            },
        );
        SwipeableListItem::new(
            subject,
            S::VARIANT,
            self.config,
            self.presentation,
            self.runtime.clone(),
            callbacks,
        )
    }

    fn process_actions(&mut self) {
        loop {
            let next = self.actions.borrow_mut().pop_front();
            match next {
                Some(ItemAction::Open(id)) => self.open(&id),
                Some(ItemAction::Delete(id, trigger)) => self.request_delete(id, trigger),
                None => break,
            }
        }
    }

    fn open(&mut self, id: &str) {
        let Some(subject) = self.subjects.get(id) else {
            return;
        };
        match subject.open_action() {
            OpenAction::Navigate(route) => self.effects.push(ScreenEffect::OpenChat(route)),
            OpenAction::MarkRead => self.mark_read(id),
        }
    }

    fn mark_read(&mut self, id: &str) {
        let unread = self.subjects.get(id).is_some_and(|subject| subject.is_unread());
        if !unread {
            return;
        }
        if let Err(err) = self.store.mark_read(id) {
            log::warn!("failed to mark {id} as read: {err}");
            return;
        }
        let now = (self.clock)();
        if let Some(subject) = self.subjects.get_mut(id) {
            Rc::make_mut(subject).mark_read(now);
            if let Some(item) = self.items.get_mut(id) {
                item.replace_subject(Rc::clone(subject));
            }
        }
    }

    fn request_delete(&mut self, id: String, trigger: DeleteTrigger) {
        if !self.confirmation.requires_prompt(trigger) {
            self.perform_delete(&id);
            return;
        }
        let Some(subject) = self.subjects.get(&id) else {
            return;
        };
        let prompt = subject.delete_prompt();

        if let Some(previous) = self.pending.take() {
            log::debug!("confirmation for {} superseded", previous.id);
            if let Err(err) = self.restore_if_animated(&previous) {
                log::warn!("could not restore {}: {err}", previous.id);
            }
        }
        self.pending = Some(PendingDelete {
            id: id.clone(),
            trigger,
        });
        self.effects.push(ScreenEffect::ConfirmDelete { id, prompt });
    }

    /// Optimistically drop the record, then ask the store. A refused delete
    /// puts the record back where it was.
    fn perform_delete(&mut self, id: &str) {
        let Some((index, key, subject)) = self.subjects.shift_remove_full(id) else {
            log::debug!("delete of {id} ignored, no longer listed");
            return;
        };
        self.items.remove(id);

        match self.store.delete(id) {
            Ok(()) => {
                log::debug!("deleted {id}");
                self.effects.push(ScreenEffect::Removed {
                    id: key,
                    notice: S::deleted_notice(),
                });
            }
            Err(err) => {
                log::warn!("delete of {id} failed: {err}");
                match self.build_item(Rc::clone(&subject)) {
                    Ok(item) => {
                        self.items.insert(key.clone(), item);
                        self.subjects.shift_insert(index, key, subject);
                    }
                    Err(config_err) => log::warn!("could not rebuild {id}: {config_err}"),
                }
                self.effects.push(ScreenEffect::Alert {
                    title: "Hata".to_string(),
                    message: S::delete_failed_message(&err).to_string(),
                });
            }
        }
    }

    /// Bring back a card that animated away for a delete that did not happen.
    fn restore_if_animated(&mut self, pending: &PendingDelete) -> Result<(), ScreenError> {
        if !pending.trigger.is_animated() {
            return Ok(());
        }
        let subject = self
            .subjects
            .get(&pending.id)
            .cloned()
            .ok_or_else(|| ScreenError::UnknownSubject(pending.id.clone()))?;
        let item = self.build_item(subject)?;
        self.items.insert(pending.id.clone(), item);
        Ok(())
    }
}

impl<S: ListSubject, St: SubjectStore<S>> std::fmt::Debug for ListScreen<S, St> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListScreen")
            .field("len", &self.subjects.len())
            .field("pending", &self.pending)
            .field("confirmation", &self.confirmation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../tests/list_screen_tests.rs"]
mod tests;
