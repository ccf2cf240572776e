//! Core runtime for Paddock
//!
//! Every list item, animation and gesture runs on one cooperative event
//! loop. This crate provides the pieces of that loop the rest of the
//! workspace shares: a frame-callback queue, a frame clock handle, and
//! observable state cells the rendering layer binds to.

pub mod collections;
mod frame_clock;
mod runtime;
mod state;
mod ticker;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};
pub use state::{MutableState, State};
pub use ticker::FrameTicker;

/// Nanoseconds between frames at 60 Hz.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::runtime::{Runtime, RuntimeHandle};
    pub use crate::state::{MutableState, State};
    pub use crate::FRAME_INTERVAL_NANOS;
}
