//! Scroll offset state.
//!
//! `ScrollState` holds the clamped scroll offset and the latest layout
//! metrics, and implements [`ViewportHost`] so it can serve as the pager's
//! scroll executor directly. It is a pure scroll model: no gesture or
//! pointer state lives here.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use pagescroll_foundation::{PageMetrics, ViewportHost};

static NEXT_SCROLL_STATE_ID: AtomicU64 = AtomicU64::new(1);

/// State object for scroll position tracking.
///
/// Cheap to clone; clones share the same underlying offset.
#[derive(Clone)]
pub struct ScrollState {
    inner: Rc<ScrollStateInner>,
}

struct ScrollStateInner {
    /// Unique ID for debugging
    id: u64,
    /// Current scroll offset in pixels.
    value: Cell<f32>,
    /// Snapshot of the most recent completed layout pass, as measured.
    metrics: Cell<PageMetrics>,
    /// When set, the content height is rounded up to a whole number of
    /// pages so the last page fills the viewport.
    fix_last_page_height: Cell<bool>,
}

impl ScrollState {
    /// Creates a new ScrollState with the given initial scroll position.
    pub fn new(initial: f32) -> Self {
        let id = NEXT_SCROLL_STATE_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            inner: Rc::new(ScrollStateInner {
                id,
                value: Cell::new(initial),
                metrics: Cell::new(PageMetrics::new(0.0, 0.0)),
                fix_last_page_height: Cell::new(false),
            }),
        }
    }

    /// Get the unique ID of this ScrollState
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// Gets the current scroll position in pixels.
    pub fn value(&self) -> f32 {
        self.inner.value.get()
    }

    /// Gets the maximum scroll value (content height minus viewport height).
    pub fn max_value(&self) -> f32 {
        self.effective_metrics().max_scroll_offset()
    }

    /// Whether the last page is padded out to the full viewport height.
    pub fn is_fix_last_page_height(&self) -> bool {
        self.inner.fix_last_page_height.get()
    }

    /// Enables or disables the last-page height fix-up.
    ///
    /// Disabling it can shrink the scroll range, so the offset is re-clamped
    /// the same way a fresh layout pass would.
    pub fn set_fix_last_page_height(&self, enabled: bool) {
        self.inner.fix_last_page_height.set(enabled);
        self.reclamp_offset();
    }

    /// Publishes the sizes from a completed layout pass.
    ///
    /// The offset is re-clamped: content may have shrunk underneath it.
    pub fn set_metrics(&self, metrics: PageMetrics) {
        self.inner.metrics.set(metrics);
        self.reclamp_offset();
    }

    /// The published metrics with the last-page fix-up applied when enabled.
    fn effective_metrics(&self) -> PageMetrics {
        let mut metrics = self.inner.metrics.get();
        if self.inner.fix_last_page_height.get() && metrics.page_count() > 0 {
            metrics.content_height = metrics.fixed_content_height();
        }
        metrics
    }

    fn reclamp_offset(&self) {
        let clamped = self.value().clamp(0.0, self.max_value());
        if clamped != self.value() {
            log::debug!(
                "scroll[{}]: offset re-clamped to {clamped} after layout",
                self.inner.id
            );
            self.inner.value.set(clamped);
        }
    }

    /// Scrolls by the given delta, clamping to valid range [0, max_value].
    /// Returns the actual amount scrolled.
    pub fn dispatch_raw_delta(&self, delta: f32) -> f32 {
        let current = self.value();
        let new_value = (current + delta).clamp(0.0, self.max_value());
        let actual_delta = new_value - current;
        if actual_delta != 0.0 {
            self.inner.value.set(new_value);
        }
        actual_delta
    }
}

impl ViewportHost for ScrollState {
    fn metrics(&self) -> PageMetrics {
        self.effective_metrics()
    }

    fn scroll_offset(&self) -> f32 {
        self.value()
    }

    fn request_scroll_by(&self, delta: f32) -> f32 {
        self.dispatch_raw_delta(delta)
    }

    fn request_scroll_animated_by(&self, delta: f32) -> f32 {
        // This state holder has no frame clock; the offset jumps. A host
        // with an animation loop implements ViewportHost itself instead.
        self.dispatch_raw_delta(delta)
    }
}
