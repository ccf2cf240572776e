use crate::runtime::{FrameCallbackId, RuntimeHandle};

/// Schedules work for the next display frame.
///
/// Animations hold on to the returned [`FrameCallbackRegistration`]; letting
/// it go unschedules the tick, so an item that is removed mid-animation
/// never runs another frame.
#[derive(Clone, Debug)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.clone()
    }

    /// Run `callback` with the next frame's timestamp in nanoseconds.
    ///
    /// On a dropped runtime the registration comes back inactive and the
    /// callback is discarded.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let id = self.runtime.register_frame_callback(callback);
        if id.is_none() {
            log::trace!("frame requested on a dropped runtime");
        }
        FrameCallbackRegistration {
            runtime: self.runtime.clone(),
            id,
        }
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |nanos| callback(nanos / 1_000_000))
    }
}

/// Keeps a frame callback queued; cancels it on `cancel()` or drop.
#[derive(Debug)]
pub struct FrameCallbackRegistration {
    runtime: RuntimeHandle,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.release();
    }
}
