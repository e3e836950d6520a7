//! Page-flick gesture classification.
//!
//! A two-state machine (`Rest`/`Dragging`) that watches a raw pointer-event
//! stream and decides, on release, whether the drag was a deliberate page
//! flick. Direction is settled by the displacement slope: steep means
//! vertical, shallow means horizontal, and horizontal paging is off unless
//! the config enables it.
//!
//! The classifier owns nothing but its own touch state. Page moves go
//! through an injected [`PageFlickListener`]; long-press cancellation and
//! ancestor/descendant interception control go through a [`GestureHost`].

use std::rc::Rc;

use pagescroll_ui_graphics::Point;

use crate::gesture_constants::{PAGING_TOUCH_SLOP, TOUCH_SLOP, VERTICAL_DOMINANT_SLOPE};
use crate::input::{PointerEvent, PointerEventKind, PointerId};

/// Thresholds and axis policy for flick classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagingConfig {
    /// Displacement before a touch stops being a tap and becomes a drag.
    pub touch_slop: f32,
    /// Displacement before a drag counts as a deliberate page flick.
    pub paging_touch_slop: f32,
    /// Whether shallow (mostly-horizontal) flicks may turn pages.
    /// Off by default: vertical dominates, matching the widget's orientation.
    pub horizontal_paging_enabled: bool,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            paging_touch_slop: PAGING_TOUCH_SLOP,
            horizontal_paging_enabled: false,
        }
    }
}

/// Receives confirmed page flicks.
///
/// Implementations report whether a page move actually happened so the
/// decision can be logged; the classifier does not change behavior on the
/// result.
pub trait PageFlickListener {
    fn on_next_page(&self) -> bool;
    fn on_prev_page(&self) -> bool;
}

/// Host-side side effects the classifier does not own.
pub trait GestureHost {
    /// Cancel any pending long-press recognition on the content.
    fn cancel_long_press(&self);
    /// Suppress (or restore) gesture interception by ancestors and
    /// descendants for the remainder of the gesture.
    fn set_disallow_intercept(&self, disallow: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    Rest,
    Dragging,
}

/// Per-gesture touch tracking.
///
/// `start` is the drag origin the total displacement is measured from; it is
/// shifted on pointer hand-off so the accumulated displacement survives a
/// secondary-pointer lift.
#[derive(Clone, Copy, Debug)]
struct TouchTracking {
    state: GestureState,
    start: Point,
    last: Point,
    tracked: Option<PointerId>,
    long_press_cancelled: bool,
    intercept_latched: bool,
}

impl TouchTracking {
    fn rest() -> Self {
        Self {
            state: GestureState::Rest,
            start: Point::ZERO,
            last: Point::ZERO,
            tracked: None,
            long_press_cancelled: false,
            intercept_latched: false,
        }
    }
}

pub struct GestureClassifier {
    config: PagingConfig,
    listener: Rc<dyn PageFlickListener>,
    host: Rc<dyn GestureHost>,
    tracking: TouchTracking,
    /// Cleared by the host while a flick-initiated scroll animation is still
    /// settling; a press during that window resumes dragging immediately.
    fling_finished: bool,
}

impl GestureClassifier {
    pub fn new(
        config: PagingConfig,
        listener: Rc<dyn PageFlickListener>,
        host: Rc<dyn GestureHost>,
    ) -> Self {
        Self {
            config,
            listener,
            host,
            tracking: TouchTracking::rest(),
            fling_finished: true,
        }
    }

    pub fn state(&self) -> GestureState {
        self.tracking.state
    }

    pub fn config(&self) -> &PagingConfig {
        &self.config
    }

    /// Host callback: a previously requested animated scroll has settled
    /// (`true`) or started (`false`).
    pub fn set_fling_finished(&mut self, finished: bool) {
        self.fling_finished = finished;
    }

    /// Feeds one normalized pointer event through the state machine.
    ///
    /// Returns `false` when the event could not be attributed to the tracked
    /// pointer, in which case the caller should fall back to its default
    /// gesture handling for that event.
    pub fn handle(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_up(event),
            PointerEventKind::Cancel => {
                self.on_cancel();
                true
            }
        }
    }

    fn on_down(&mut self, event: &PointerEvent) -> bool {
        let sample = match event.sample(event.changed) {
            Some(sample) => *sample,
            None => return false,
        };
        if let Some(tracked) = self.tracking.tracked {
            if event.sample(tracked).is_some() {
                // A second finger pressed while the tracked one is still
                // down; the gesture continues on the original finger.
                return true;
            }
        }
        self.tracking = TouchTracking::rest();
        self.tracking.tracked = Some(sample.id);
        self.tracking.start = sample.position;
        self.tracking.last = sample.position;
        if !self.fling_finished {
            // Touching down mid-settle grabs the content again.
            self.tracking.state = GestureState::Dragging;
        }
        true
    }

    fn on_move(&mut self, event: &PointerEvent) -> bool {
        let tracked = match self.tracking.tracked {
            Some(id) => id,
            None => return false,
        };
        let sample = match event.sample(tracked) {
            Some(sample) => *sample,
            None => return false,
        };

        let dx = sample.position.x - self.tracking.start.x;
        let dy = sample.position.y - self.tracking.start.y;
        if self.tracking.state == GestureState::Rest
            && (dx.abs() > self.config.touch_slop || dy.abs() > self.config.touch_slop)
        {
            self.tracking.state = GestureState::Dragging;
            if !self.tracking.long_press_cancelled {
                self.tracking.long_press_cancelled = true;
                self.host.cancel_long_press();
            }
        }
        self.tracking.last = sample.position;
        true
    }

    fn on_up(&mut self, event: &PointerEvent) -> bool {
        let tracked = match self.tracking.tracked {
            Some(id) => id,
            None => return false,
        };
        if event.changed != tracked {
            // A finger we were not tracking lifted; nothing changes.
            return true;
        }

        if let Some(remaining) = event.first_remaining() {
            // The tracked pointer lifted but another is still down: hand
            // tracking over, preserving the displacement accumulated so far.
            let carried = remaining.position - self.tracking.last;
            self.tracking.start = self.tracking.start + carried;
            self.tracking.last = remaining.position;
            self.tracking.tracked = Some(remaining.id);
            return true;
        }

        if self.tracking.state == GestureState::Dragging {
            let dx = self.tracking.last.x - self.tracking.start.x;
            let dy = self.tracking.last.y - self.tracking.start.y;
            self.evaluate_flick(dx, dy);
        }
        self.finish_gesture();
        true
    }

    fn on_cancel(&mut self) {
        self.finish_gesture();
    }

    fn finish_gesture(&mut self) {
        if self.tracking.intercept_latched {
            self.host.set_disallow_intercept(false);
        }
        self.tracking = TouchTracking::rest();
    }

    /// The release decision: does the total drag displacement qualify as a
    /// page flick, and in which direction?
    fn evaluate_flick(&mut self, dx: f32, dy: f32) {
        let mut qualified = dy.abs() > self.config.paging_touch_slop;
        if dx.abs() > self.config.paging_touch_slop && self.config.horizontal_paging_enabled {
            qualified = true;
        }
        if !qualified {
            log::debug!("flick rejected: dy:{dy} dx:{dx}");
            return;
        }

        self.tracking.intercept_latched = true;
        self.host.set_disallow_intercept(true);

        let slope = if dx != 0.0 {
            (dy / dx).abs()
        } else {
            VERTICAL_DOMINANT_SLOPE
        };
        let moved = if slope >= 1.0 {
            if dy < 0.0 {
                self.listener.on_next_page()
            } else {
                self.listener.on_prev_page()
            }
        } else if self.config.horizontal_paging_enabled {
            if dx < 0.0 {
                self.listener.on_next_page()
            } else {
                self.listener.on_prev_page()
            }
        } else {
            false
        };
        log::debug!("flick: slope:{slope} dy:{dy} dx:{dx} moved:{moved}");
    }
}
