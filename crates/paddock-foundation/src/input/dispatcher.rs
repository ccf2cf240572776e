//! Pointer event queue.
//!
//! Platform integrations enqueue raw events as they arrive; the host drains
//! them once per frame so each item sees its samples in arrival order.

use super::types::{PointerEvent, PointerId};
use smallvec::SmallVec;

#[derive(Default, Debug)]
pub struct PointerDispatcher {
    queue: SmallVec<[(PointerId, PointerEvent); 8]>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self {
            queue: SmallVec::new(),
        }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push((event.id, event));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerId, PointerEvent),
    {
        for (id, event) in self.queue.drain(..) {
            handler(id, event);
        }
    }
}
