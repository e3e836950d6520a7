//! Normalized pointer input event model.
//!
//! The host toolkit translates its native motion events into these structures
//! before handing them to the gesture classifier. Events are consumed
//! immediately; nothing here is retained beyond the current gesture.

use pagescroll_ui_graphics::Point;
use smallvec::SmallVec;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer's position at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub position: Point,
    pub uptime_ms: u64,
}

impl PointerSample {
    pub fn new(id: PointerId, position: Point, uptime_ms: u64) -> Self {
        Self {
            id,
            position,
            uptime_ms,
        }
    }
}

/// A normalized pointer event.
///
/// `changed` names the pointer whose state changed (pressed, moved, or
/// lifted); `pointers` holds every pointer still down *after* the event. A
/// lift of one finger while another stays down is therefore an `Up` whose
/// `pointers` list is non-empty, which is how the classifier recognizes a
/// secondary-pointer hand-off.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub changed: PointerId,
    pub uptime_ms: u64,
    pub pointers: SmallVec<[PointerSample; 2]>,
}

impl PointerEvent {
    pub fn new(
        kind: PointerEventKind,
        changed: PointerId,
        uptime_ms: u64,
        pointers: SmallVec<[PointerSample; 2]>,
    ) -> Self {
        Self {
            kind,
            changed,
            uptime_ms,
            pointers,
        }
    }

    /// A press of `id` at `position`.
    pub fn down(id: PointerId, position: Point, uptime_ms: u64) -> Self {
        Self::new(
            PointerEventKind::Down,
            id,
            uptime_ms,
            smallvec::smallvec![PointerSample::new(id, position, uptime_ms)],
        )
    }

    /// A single-pointer move of `id` to `position`.
    pub fn moved(id: PointerId, position: Point, uptime_ms: u64) -> Self {
        Self::new(
            PointerEventKind::Move,
            id,
            uptime_ms,
            smallvec::smallvec![PointerSample::new(id, position, uptime_ms)],
        )
    }

    /// A lift of `id` with no pointers remaining down.
    pub fn up(id: PointerId, uptime_ms: u64) -> Self {
        Self::new(PointerEventKind::Up, id, uptime_ms, SmallVec::new())
    }

    /// A lift of `id` while `remaining` pointers stay down.
    pub fn secondary_up(
        id: PointerId,
        uptime_ms: u64,
        remaining: SmallVec<[PointerSample; 2]>,
    ) -> Self {
        Self::new(PointerEventKind::Up, id, uptime_ms, remaining)
    }

    /// Gesture abort (e.g. an ancestor stole the event stream).
    pub fn cancel(uptime_ms: u64) -> Self {
        Self::new(PointerEventKind::Cancel, 0, uptime_ms, SmallVec::new())
    }

    /// Looks up the sample for `id` among the pointers still down.
    pub fn sample(&self, id: PointerId) -> Option<&PointerSample> {
        self.pointers.iter().find(|sample| sample.id == id)
    }

    /// The first pointer still down, if any.
    pub fn first_remaining(&self) -> Option<&PointerSample> {
        self.pointers.first()
    }
}
