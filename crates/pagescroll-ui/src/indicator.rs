//! Page-position scroll indicator geometry.
//!
//! The indicator is a thin track along the right edge with a thumb whose
//! slot is one page: `usable_height / page_count` tall (floored at a
//! minimum), positioned by the current page. Everything here is a pure
//! function of the metrics and scroll offset; the output is draw primitives
//! for the host renderer. Coordinates are content-local, so the emitted
//! rects ride along with the scrolled content.

use pagescroll_foundation::PageMetrics;
use pagescroll_ui_graphics::{Brush, Color, CornerRadii, DrawPrimitive, Rect};

/// Smallest thumb the indicator will draw, in pixels.
pub const MIN_THUMB_HEIGHT: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorStyle {
    pub track_width: f32,
    /// Thumb width; 0 falls back to the track width.
    pub thumb_width: f32,
    /// Corner radius of the thumb.
    pub radius: f32,
    pub thumb_color: Color,
    pub track_color: Color,
    pub min_thumb_height: f32,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            track_width: 1.0,
            thumb_width: 0.0,
            radius: 0.0,
            thumb_color: Color::BLACK,
            track_color: Color::WHITE,
            min_thumb_height: MIN_THUMB_HEIGHT,
        }
    }
}

impl IndicatorStyle {
    fn effective_thumb_width(&self) -> f32 {
        if self.thumb_width > 0.0 {
            self.thumb_width
        } else {
            self.track_width
        }
    }
}

pub struct ScrollIndicator {
    style: IndicatorStyle,
}

impl ScrollIndicator {
    pub fn new(style: IndicatorStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &IndicatorStyle {
        &self.style
    }

    /// The thumb rect for the current page.
    ///
    /// `thumb_top = (usable_height / page_count) × (current_page − 1) +
    /// scroll_offset`; the height is one page's slot, floored at the
    /// configured minimum.
    pub fn thumb_rect(
        &self,
        metrics: &PageMetrics,
        scroll_offset: f32,
        viewport_width: f32,
    ) -> Rect {
        let pages = metrics.page_count().max(1);
        let one_cut = metrics.usable_height() / pages as f32;
        let current = metrics.current_page(scroll_offset).max(1);

        let thumb_width = self.style.effective_thumb_width();
        let left = viewport_width - metrics.padding.right - thumb_width;
        let top = one_cut * (current - 1) as f32 + scroll_offset;
        let height = one_cut.max(self.style.min_thumb_height);
        Rect::from_edges(left, top, left + thumb_width, top + height)
    }

    /// Track and thumb primitives, painted in that order.
    ///
    /// Empty when the content is not scrollable; a page indicator for a
    /// single page is noise.
    pub fn primitives(
        &self,
        metrics: &PageMetrics,
        scroll_offset: f32,
        viewport_width: f32,
    ) -> Vec<DrawPrimitive> {
        if !metrics.can_scroll() {
            return Vec::new();
        }

        let thumb_width = self.style.effective_thumb_width();
        let track_left =
            viewport_width - metrics.padding.right - thumb_width / 2.0 - self.style.track_width / 2.0;
        let track = Rect::from_edges(
            track_left,
            metrics.padding.top,
            track_left + self.style.track_width,
            metrics.content_height - metrics.padding.bottom,
        );

        vec![
            DrawPrimitive::Rect {
                rect: track,
                brush: Brush::solid(self.style.track_color),
            },
            DrawPrimitive::RoundRect {
                rect: self.thumb_rect(metrics, scroll_offset, viewport_width),
                brush: Brush::solid(self.style.thumb_color),
                radii: CornerRadii::uniform(self.style.radius),
            },
        ]
    }
}

impl Default for ScrollIndicator {
    fn default() -> Self {
        Self::new(IndicatorStyle::default())
    }
}
