use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Observable value cell written by animations and read by the renderer.
///
/// Every write bumps a version counter so a host can skip redraws for
/// cells that did not change since the last frame.
pub struct MutableState<T> {
    value: Rc<RefCell<T>>,
    version: Rc<Cell<u64>>,
}

impl<T> MutableState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(initial)),
            version: Rc::new(Cell::new(0)),
        }
    }

    pub fn set_value(&self, value: T) {
        *self.value.borrow_mut() = value;
        self.version.set(self.version.get() + 1);
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value.borrow_mut());
        self.version.set(self.version.get() + 1);
        result
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    pub fn version(&self) -> u64 {
        self.version.get()
    }

    pub fn as_state(&self) -> State<T> {
        State {
            value: Rc::clone(&self.value),
            version: Rc::clone(&self.version),
        }
    }
}

impl<T: Clone> MutableState<T> {
    pub fn value(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            version: Rc::clone(&self.version),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &*self.value.borrow())
            .field("version", &self.version.get())
            .finish()
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T> {
    value: Rc<RefCell<T>>,
    version: Rc<Cell<u64>>,
}

impl<T: Clone> State<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> State<T> {
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    pub fn version(&self) -> u64 {
        self.version.get()
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            version: Rc::clone(&self.version),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("State").field(&*self.value.borrow()).finish()
    }
}
