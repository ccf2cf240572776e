use crate::frame_clock::FrameClock;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

pub type FrameCallbackId = u64;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

struct RuntimeInner {
    next_frame_callback_id: Cell<FrameCallbackId>,
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    last_frame_nanos: Cell<Option<u64>>,
}

impl RuntimeInner {
    fn new() -> Self {
        Self {
            next_frame_callback_id: Cell::new(1),
            frame_callbacks: RefCell::new(VecDeque::new()),
            last_frame_nanos: Cell::new(None),
        }
    }

    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(last) = self.last_frame_nanos.get() {
            if frame_time_nanos < last {
                log::warn!(
                    "frame time went backwards ({} < {}), clamping",
                    frame_time_nanos,
                    last
                );
            }
        }
        let frame_time_nanos = self
            .last_frame_nanos
            .get()
            .map_or(frame_time_nanos, |last| frame_time_nanos.max(last));
        self.last_frame_nanos.set(Some(frame_time_nanos));

        // Callbacks registered while draining belong to the next frame.
        let mut callbacks = self.frame_callbacks.borrow_mut();
        let mut pending: Vec<Box<dyn FnOnce(u64) + 'static>> = Vec::with_capacity(callbacks.len());
        while let Some(mut entry) = callbacks.pop_front() {
            if let Some(callback) = entry.callback.take() {
                pending.push(callback);
            }
        }
        drop(callbacks);
        for callback in pending {
            callback(frame_time_nanos);
        }
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }
}

/// Owner of the frame-callback queue.
///
/// Dropping the runtime turns every outstanding [`RuntimeHandle`] into a
/// no-op handle.
#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new()),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.handle().frame_clock()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("pending_frame_callbacks", &self.inner.frame_callbacks.borrow().len())
            .field("last_frame_nanos", &self.inner.last_frame_nanos.get())
            .finish()
    }
}

#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_frame_callbacks(frame_time_nanos);
        }
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_frame_callbacks())
            .unwrap_or(false)
    }

    /// Timestamp of the most recently drained frame.
    pub fn last_frame_nanos(&self) -> Option<u64> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.last_frame_nanos.get())
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }
}

impl std::fmt::Debug for RuntimeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
