use paddock_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// The platform took the pointer away (multi-touch, system gesture).
    Cancel,
}

/// Pointer event with consumption tracking for gesture disambiguation.
///
/// A swipe that has been admitted consumes its events so the card body
/// does not also treat the release as a tap.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub phase: PointerPhase,
    /// Position relative to the list item.
    pub position: Point,
    /// Monotonic event time, used for velocity tracking.
    pub uptime_millis: i64,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_millis: i64) -> Self {
        Self {
            id: 0,
            kind,
            phase: match kind {
                PointerEventKind::Down => PointerPhase::Start,
                PointerEventKind::Move => PointerPhase::Move,
                PointerEventKind::Up => PointerPhase::End,
                PointerEventKind::Cancel => PointerPhase::Cancel,
            },
            position,
            uptime_millis,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(position: Point, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Down, position, uptime_millis)
    }

    pub fn moved(position: Point, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Move, position, uptime_millis)
    }

    pub fn up(position: Point, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Up, position, uptime_millis)
    }

    pub fn cancel(position: Point, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Cancel, position, uptime_millis)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Mark this event as consumed, preventing other handlers from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
