use paddock_animation::AnimationEnd;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Which entry point asked for the delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeleteTrigger {
    /// Released past the delete threshold (or flung).
    Swipe,
    /// Tapped the revealed affordance behind the card.
    Affordance,
    /// Tapped the always-visible delete button of pointer layouts.
    Button,
}

impl DeleteTrigger {
    /// The card has already animated away when the callback runs.
    pub fn is_animated(self) -> bool {
        !matches!(self, DeleteTrigger::Button)
    }
}

type OpenHandler<S> = Box<dyn FnMut(&S)>;
type DeleteHandler<S> = Box<dyn FnMut(&S, DeleteTrigger)>;

/// Caller-supplied reactions to a list item.
///
/// Handlers run on the UI loop, possibly from inside a frame drain, and must
/// not call back into the item that invoked them.
pub struct SwipeCallbacks<S> {
    on_open: OpenHandler<S>,
    on_delete: DeleteHandler<S>,
}

impl<S> SwipeCallbacks<S> {
    pub fn new(
        on_open: impl FnMut(&S) + 'static,
        on_delete: impl FnMut(&S, DeleteTrigger) + 'static,
    ) -> Self {
        Self {
            on_open: Box::new(on_open),
            on_delete: Box::new(on_delete),
        }
    }

    pub fn noop() -> Self {
        Self::new(|_| {}, |_, _| {})
    }
}

struct DispatcherInner<S> {
    subject: RefCell<Rc<S>>,
    callbacks: RefCell<SwipeCallbacks<S>>,
    committed: Cell<bool>,
}

/// Routes taps and completed deletes to the caller's callbacks.
///
/// The subject is handed through untouched. The animated delete path is
/// latched: however many times an exit completion reports in, `on_delete`
/// runs once.
pub struct ActionDispatcher<S> {
    inner: Rc<DispatcherInner<S>>,
}

impl<S: 'static> ActionDispatcher<S> {
    pub fn new(subject: Rc<S>, callbacks: SwipeCallbacks<S>) -> Self {
        Self {
            inner: Rc::new(DispatcherInner {
                subject: RefCell::new(subject),
                callbacks: RefCell::new(callbacks),
                committed: Cell::new(false),
            }),
        }
    }

    pub fn subject(&self) -> Rc<S> {
        Rc::clone(&self.inner.subject.borrow())
    }

    pub fn replace_subject(&self, subject: Rc<S>) {
        *self.inner.subject.borrow_mut() = subject;
    }

    /// The animated delete has been dispatched.
    pub fn is_committed(&self) -> bool {
        self.inner.committed.get()
    }

    pub fn open(&self) {
        self.inner.open();
    }

    /// Unlatched delete for the explicit button. Ignored once committed.
    pub fn delete_now(&self, trigger: DeleteTrigger) -> bool {
        if self.inner.committed.get() {
            log::debug!("delete already dispatched, ignoring {trigger:?}");
            return false;
        }
        self.inner.delete(trigger);
        true
    }

    /// Latched delete. Returns whether this call dispatched it.
    pub fn commit_delete(&self, trigger: DeleteTrigger) -> bool {
        self.inner.commit(trigger)
    }

    /// Completion handler for an exit animation: commits on `Finished`.
    pub fn commit_on_finish(&self, trigger: DeleteTrigger) -> impl FnOnce(AnimationEnd) + 'static {
        let inner = Rc::clone(&self.inner);
        move |end| match end {
            AnimationEnd::Finished => {
                inner.commit(trigger);
            }
            AnimationEnd::Interrupted => {
                log::debug!("exit animation interrupted, delete not dispatched");
            }
        }
    }
}

impl<S> DispatcherInner<S> {
    fn open(&self) {
        let subject = Rc::clone(&self.subject.borrow());
        (self.callbacks.borrow_mut().on_open)(&subject);
    }

    fn delete(&self, trigger: DeleteTrigger) {
        let subject = Rc::clone(&self.subject.borrow());
        (self.callbacks.borrow_mut().on_delete)(&subject, trigger);
    }

    fn commit(&self, trigger: DeleteTrigger) -> bool {
        if self.committed.replace(true) {
            return false;
        }
        log::debug!("dispatching delete ({trigger:?})");
        self.delete(trigger);
        true
    }
}

impl<S> std::fmt::Debug for ActionDispatcher<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionDispatcher")
            .field("committed", &self.inner.committed.get())
            .finish_non_exhaustive()
    }
}
