//! Viewport metrics and the host capability trait.
//!
//! `PageMetrics` is a read-only snapshot of the most recent layout pass,
//! supplied by the caller on every query. It is never cached here: page
//! arithmetic must always reflect the latest measured sizes.

use pagescroll_ui_graphics::EdgeInsets;

/// Measured sizes of the scroll container and its content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageMetrics {
    /// Height of the visible viewport, padding included.
    pub viewport_height: f32,
    /// Total height of the scrollable content.
    pub content_height: f32,
    /// Container padding; only the vertical components affect paging.
    pub padding: EdgeInsets,
}

impl PageMetrics {
    pub fn new(viewport_height: f32, content_height: f32) -> Self {
        Self {
            viewport_height,
            content_height,
            padding: EdgeInsets::default(),
        }
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    /// Viewport height with padding removed; the height one "cut" of the
    /// scroll indicator track represents.
    pub fn usable_height(&self) -> f32 {
        self.viewport_height - self.padding.vertical_sum()
    }

    /// Whether there is anything to scroll at all.
    pub fn can_scroll(&self) -> bool {
        self.content_height > 0.0
            && self.viewport_height < self.content_height + self.padding.vertical_sum()
    }

    /// Number of viewport-sized pages the content spans, 1-indexed pages.
    ///
    /// Returns 0 for degenerate metrics (no content, or a viewport that has
    /// not been measured yet) instead of dividing by zero.
    pub fn page_count(&self) -> u32 {
        if self.viewport_height <= 0.0 || self.content_height <= 0.0 {
            return 0;
        }
        (self.content_height / self.viewport_height).ceil() as u32
    }

    /// The 1-indexed page the given scroll offset is on, clamped to
    /// `[1, page_count()]`. Returns 0 for degenerate metrics.
    pub fn current_page(&self, scroll_offset: f32) -> u32 {
        let pages = self.page_count();
        if pages == 0 {
            return 0;
        }
        let page = ((scroll_offset + self.viewport_height) / self.viewport_height).ceil() as u32;
        page.clamp(1, pages)
    }

    /// Largest valid scroll offset.
    pub fn max_scroll_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Content height rounded up to a whole number of pages, so the last
    /// page is full-height.
    pub fn fixed_content_height(&self) -> f32 {
        self.viewport_height * self.page_count() as f32
    }
}

/// Capability trait a scroll container host implements for the pager.
///
/// This replaces subclassing a concrete toolkit scroll view: the pager only
/// ever asks for the latest measured sizes and requests signed pixel deltas.
/// Whether a request jumps or animates is the host's business.
pub trait ViewportHost {
    /// Sizes from the most recent completed layout pass.
    fn metrics(&self) -> PageMetrics;

    /// Current scroll offset in pixels.
    fn scroll_offset(&self) -> f32;

    /// Scroll by `delta` pixels immediately. Returns the amount consumed,
    /// which may be less than requested at the content bounds.
    fn request_scroll_by(&self, delta: f32) -> f32;

    /// Scroll by `delta` pixels, animating if the host supports it.
    /// Returns the amount that will be consumed.
    fn request_scroll_animated_by(&self, delta: f32) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        let metrics = PageMetrics::new(1000.0, 2500.0);
        assert_eq!(metrics.page_count(), 3);

        let exact = PageMetrics::new(1000.0, 2000.0);
        assert_eq!(exact.page_count(), 2);
    }

    #[test]
    fn test_degenerate_metrics_yield_zero() {
        assert_eq!(PageMetrics::new(0.0, 2500.0).page_count(), 0);
        assert_eq!(PageMetrics::new(-1.0, 2500.0).page_count(), 0);
        assert_eq!(PageMetrics::new(1000.0, 0.0).page_count(), 0);
        assert_eq!(PageMetrics::new(0.0, 2500.0).current_page(0.0), 0);
    }

    #[test]
    fn test_current_page_clamped() {
        let metrics = PageMetrics::new(1000.0, 2500.0);
        assert_eq!(metrics.current_page(0.0), 1);
        assert_eq!(metrics.current_page(1000.0), 2);
        assert_eq!(metrics.current_page(1500.0), 3);
        // Overscrolled offsets still land on the last page.
        assert_eq!(metrics.current_page(9000.0), 3);
        assert_eq!(metrics.current_page(-50.0), 1);
    }

    #[test]
    fn test_can_scroll_accounts_for_padding() {
        assert!(PageMetrics::new(1000.0, 2500.0).can_scroll());
        assert!(!PageMetrics::new(1000.0, 800.0).can_scroll());
        // Padding shrinks the room the content has.
        let padded = PageMetrics::new(1000.0, 990.0).with_padding(EdgeInsets::vertical(10.0));
        assert!(padded.can_scroll());
    }

    #[test]
    fn test_fixed_content_height_rounds_to_whole_pages() {
        let metrics = PageMetrics::new(1000.0, 2500.0);
        assert_eq!(metrics.fixed_content_height(), 3000.0);
        assert_eq!(PageMetrics::new(1000.0, 0.0).fixed_content_height(), 0.0);
    }

    #[test]
    fn test_max_scroll_offset() {
        assert_eq!(PageMetrics::new(1000.0, 2500.0).max_scroll_offset(), 1500.0);
        assert_eq!(PageMetrics::new(1000.0, 800.0).max_scroll_offset(), 0.0);
    }
}
