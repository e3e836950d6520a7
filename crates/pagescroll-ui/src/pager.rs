//! Page navigation over a [`ViewportHost`].
//!
//! The pager turns page-level intents (next, previous, jump to page N,
//! reveal a child) into clamped pixel deltas against the host's latest
//! metrics. It holds no geometry of its own: every query re-reads the host
//! so the answers always reflect the most recent layout pass.

use std::rc::Rc;

use pagescroll_foundation::{PageFlickListener, ViewportHost};
use pagescroll_ui_graphics::Rect;

use crate::focus::{find_focusable_in_bounds, FocusHost};

pub struct Pager {
    host: Rc<dyn ViewportHost>,
    focus: Option<Rc<dyn FocusHost>>,
    /// Selects `request_scroll_animated_by` over `request_scroll_by`.
    smooth_scrolling_enabled: bool,
}

impl Pager {
    pub fn new(host: Rc<dyn ViewportHost>) -> Self {
        Self {
            host,
            focus: None,
            smooth_scrolling_enabled: false,
        }
    }

    /// Attaches the optional focus collaborator; focus then follows paging.
    pub fn with_focus_host(mut self, focus: Rc<dyn FocusHost>) -> Self {
        self.focus = Some(focus);
        self
    }

    pub fn set_smooth_scrolling_enabled(&mut self, enabled: bool) {
        self.smooth_scrolling_enabled = enabled;
    }

    pub fn is_smooth_scrolling_enabled(&self) -> bool {
        self.smooth_scrolling_enabled
    }

    /// Number of pages the content currently spans; 0 without content or a
    /// measured viewport.
    pub fn page_count(&self) -> u32 {
        self.host.metrics().page_count()
    }

    /// The 1-indexed page currently in view; 0 when the viewport is
    /// degenerate.
    pub fn current_page(&self) -> u32 {
        self.host.metrics().current_page(self.host.scroll_offset())
    }

    pub fn can_scroll(&self) -> bool {
        self.host.metrics().can_scroll()
    }

    /// Advances one page. No-op (`false`) when the content fits the viewport
    /// or the last page is already showing.
    pub fn next_page(&self) -> bool {
        let metrics = self.host.metrics();
        if !metrics.can_scroll() {
            log::debug!("next_page: can not scroll");
            return false;
        }
        let current = metrics.current_page(self.host.scroll_offset());
        if current >= metrics.page_count() {
            log::debug!("next_page: already on last page {current}");
            return false;
        }
        self.page_scroll(metrics.viewport_height);
        true
    }

    /// Goes back one page. No-op (`false`) when the content fits the
    /// viewport or the first page is already showing.
    pub fn prev_page(&self) -> bool {
        let metrics = self.host.metrics();
        if !metrics.can_scroll() {
            log::debug!("prev_page: can not scroll");
            return false;
        }
        let current = metrics.current_page(self.host.scroll_offset());
        if current <= 1 {
            log::debug!("prev_page: already on first page");
            return false;
        }
        self.page_scroll(-metrics.viewport_height);
        true
    }

    /// Jumps to the 1-indexed `target` page.
    ///
    /// The delta is clamped so the resulting offset stays inside the
    /// content; returns `true` iff the clamped delta is nonzero. Asking for
    /// the current page, a page past the end, or any page of unscrollable
    /// content is a benign no-op.
    pub fn move_to_page(&self, target: u32) -> bool {
        let metrics = self.host.metrics();
        if !metrics.can_scroll() {
            log::debug!("move_to_page({target}): can not scroll");
            return false;
        }
        let current = metrics.current_page(self.host.scroll_offset());
        if target == current || target > metrics.page_count() {
            return false;
        }

        let offset = self.host.scroll_offset();
        let delta = metrics.viewport_height * (target as f32 - current as f32);
        let clamped = (offset + delta).clamp(0.0, metrics.max_scroll_offset()) - offset;
        if clamped == 0.0 {
            return false;
        }
        log::debug!(
            "move_to_page({target}): cur:{current} total:{} delta:{clamped}",
            metrics.page_count()
        );
        self.focus_after_scroll(offset + clamped, offset + clamped + metrics.viewport_height, clamped < 0.0);
        self.scroll_y(clamped);
        true
    }

    /// Scrolls just enough to bring `child` (content coordinates) fully on
    /// screen; `false` when it already is.
    pub fn scroll_to_child(&self, child: Rect) -> bool {
        let metrics = self.host.metrics();
        let view_top = self.host.scroll_offset();
        let view_bottom = view_top + metrics.viewport_height;
        let delta = scroll_delta_to_reveal(child.top(), child.bottom(), view_top, view_bottom);
        self.scroll_y(delta) != 0.0
    }

    fn page_scroll(&self, delta: f32) {
        let metrics = self.host.metrics();
        let offset = self.host.scroll_offset();
        self.focus_after_scroll(offset + delta, offset + delta + metrics.viewport_height, delta < 0.0);
        self.scroll_y(delta);
    }

    /// Scroll by a Y delta through whichever host request the smooth flag
    /// selects. Returns the amount the host consumed.
    fn scroll_y(&self, delta: f32) -> f32 {
        if delta == 0.0 {
            return 0.0;
        }
        if self.smooth_scrolling_enabled {
            self.host.request_scroll_animated_by(delta)
        } else {
            self.host.request_scroll_by(delta)
        }
    }

    fn focus_after_scroll(&self, band_top: f32, band_bottom: f32, up: bool) {
        let focus = match &self.focus {
            Some(focus) => focus,
            None => return,
        };
        if let Some(found) =
            find_focusable_in_bounds(up, band_top, band_bottom, &focus.focusables())
        {
            focus.request_focus(found.id);
        }
    }
}

/// Since page flicks map one-to-one onto page moves, the pager is its own
/// flick listener: wire it straight into the gesture classifier.
impl PageFlickListener for Pager {
    fn on_next_page(&self) -> bool {
        self.next_page()
    }

    fn on_prev_page(&self) -> bool {
        self.prev_page()
    }
}

/// Delta that makes `[child_top, child_bottom]` visible inside
/// `[view_top, view_bottom]`, zero when it already is.
///
/// A child taller than the viewport aligns its near edge instead of
/// overshooting past the far one.
pub fn scroll_delta_to_reveal(
    child_top: f32,
    child_bottom: f32,
    view_top: f32,
    view_bottom: f32,
) -> f32 {
    let view_height = view_bottom - view_top;
    if view_height <= 0.0 {
        return 0.0;
    }
    let child_height = child_bottom - child_top;
    if child_bottom > view_bottom && child_top > view_top {
        // Below the viewport: scroll down.
        if child_height > view_height {
            child_top - view_top
        } else {
            child_bottom - view_bottom
        }
    } else if child_top < view_top && child_bottom < view_bottom {
        // Above the viewport: scroll up.
        if child_height > view_height {
            child_bottom - view_bottom
        } else {
            child_top - view_top
        }
    } else {
        0.0
    }
}
