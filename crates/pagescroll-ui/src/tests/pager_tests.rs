use std::cell::RefCell;
use std::rc::Rc;

use pagescroll_foundation::{PageMetrics, ViewportHost};
use pagescroll_ui_graphics::Rect;

use crate::focus::{FocusCandidate, FocusHost, FocusId};
use crate::pager::{scroll_delta_to_reveal, Pager};
use crate::scroll::ScrollState;

fn pager_with_state(viewport: f32, content: f32) -> (Pager, ScrollState) {
    let state = ScrollState::new(0.0);
    state.set_metrics(PageMetrics::new(viewport, content));
    let pager = Pager::new(Rc::new(state.clone()));
    (pager, state)
}

#[test]
fn test_page_queries_match_ceil_arithmetic() {
    let (pager, _state) = pager_with_state(1000.0, 2500.0);
    assert_eq!(pager.page_count(), 3);
    assert_eq!(pager.current_page(), 1);

    let (pager, _state) = pager_with_state(1000.0, 2000.0);
    assert_eq!(pager.page_count(), 2);
}

#[test]
fn test_degenerate_viewport_yields_zero_pages() {
    let (pager, _state) = pager_with_state(0.0, 2500.0);
    assert_eq!(pager.page_count(), 0);
    assert_eq!(pager.current_page(), 0);
    assert!(!pager.next_page());
    assert!(!pager.move_to_page(2));
}

#[test]
fn test_paging_scenario_viewport_1000_content_2500() {
    // The walkthrough from the widget's reference behavior: 3 pages,
    // next_page lands on page 2, move_to_page(3) is clamped to offset 1500.
    let (pager, state) = pager_with_state(1000.0, 2500.0);
    assert_eq!(pager.page_count(), 3);
    assert_eq!(pager.current_page(), 1);

    assert!(pager.next_page());
    assert_eq!(state.value(), 1000.0);
    assert_eq!(pager.current_page(), 2);

    assert!(pager.move_to_page(3));
    assert_eq!(state.value(), 1500.0);
    assert_eq!(pager.current_page(), 3);
}

#[test]
fn test_current_page_stays_in_range_while_scrollable() {
    let (pager, state) = pager_with_state(1000.0, 2500.0);
    for offset in [0.0, 250.0, 999.0, 1000.0, 1499.0, 1500.0] {
        state.dispatch_raw_delta(offset - state.value());
        let page = pager.current_page();
        assert!(
            (1..=pager.page_count()).contains(&page),
            "page {page} out of range at offset {offset}"
        );
    }
}

#[test]
fn test_next_and_prev_refuse_at_bounds() {
    let (pager, _state) = pager_with_state(1000.0, 2500.0);
    assert!(!pager.prev_page(), "already on first page");

    assert!(pager.next_page());
    assert!(pager.next_page());
    assert_eq!(pager.current_page(), 3);
    assert!(!pager.next_page(), "already on last page");

    assert!(pager.prev_page());
    assert_eq!(pager.current_page(), 2);
}

#[test]
fn test_unscrollable_content_is_a_no_op() {
    let (pager, state) = pager_with_state(1000.0, 600.0);
    assert!(!pager.next_page());
    assert!(!pager.prev_page());
    assert!(!pager.move_to_page(1));
    assert_eq!(state.value(), 0.0);
}

#[test]
fn test_move_to_current_page_is_idempotent_no_op() {
    let (pager, state) = pager_with_state(1000.0, 2500.0);
    assert!(!pager.move_to_page(pager.current_page()));
    assert_eq!(state.value(), 0.0);
}

#[test]
fn test_move_past_last_page_is_refused() {
    let (pager, _state) = pager_with_state(1000.0, 2500.0);
    assert!(!pager.move_to_page(4));
}

#[test]
fn test_move_to_page_zero_clamps_to_nothing() {
    // From page 1 the delta to "page 0" clamps to zero, so it reports false.
    let (pager, state) = pager_with_state(1000.0, 2500.0);
    assert!(!pager.move_to_page(0));
    assert_eq!(state.value(), 0.0);
}

#[test]
fn test_move_to_page_round_trips() {
    let (pager, _state) = pager_with_state(1000.0, 2500.0);
    for target in [2u32, 1, 3, 2] {
        assert!(pager.move_to_page(target), "move to {target}");
        assert_eq!(pager.current_page(), target);
    }
}

#[test]
fn test_scroll_state_clamps_deltas() {
    let state = ScrollState::new(0.0);
    state.set_metrics(PageMetrics::new(1000.0, 2500.0));
    assert_eq!(state.dispatch_raw_delta(2000.0), 1500.0);
    assert_eq!(state.value(), 1500.0);
    assert_eq!(state.dispatch_raw_delta(-9999.0), -1500.0);
    assert_eq!(state.value(), 0.0);
}

#[test]
fn test_scroll_state_reclamps_when_content_shrinks() {
    let state = ScrollState::new(0.0);
    state.set_metrics(PageMetrics::new(1000.0, 2500.0));
    state.dispatch_raw_delta(1500.0);

    state.set_metrics(PageMetrics::new(1000.0, 1200.0));
    assert_eq!(state.value(), 200.0);
}

#[test]
fn test_fix_last_page_height_pads_last_page_to_full_height() {
    let state = ScrollState::new(0.0);
    state.set_metrics(PageMetrics::new(1000.0, 2500.0));
    assert!(!state.is_fix_last_page_height());
    assert_eq!(state.max_value(), 1500.0);

    // Rounding content up to whole pages makes the last page full height.
    state.set_fix_last_page_height(true);
    assert_eq!(state.max_value(), 2000.0);

    let pager = Pager::new(Rc::new(state.clone()));
    assert_eq!(pager.page_count(), 3);
    assert!(pager.move_to_page(3));
    assert_eq!(state.value(), 2000.0);
    assert_eq!(pager.current_page(), 3);

    // Turning it off shrinks the scroll range; the offset follows.
    state.set_fix_last_page_height(false);
    assert_eq!(state.value(), 1500.0);
}

// Host that records which scroll request the pager issued.
#[derive(Default)]
struct RecordingHost {
    offset: RefCell<f32>,
    animated: RefCell<u32>,
    immediate: RefCell<u32>,
}

impl ViewportHost for RecordingHost {
    fn metrics(&self) -> PageMetrics {
        PageMetrics::new(1000.0, 2500.0)
    }

    fn scroll_offset(&self) -> f32 {
        *self.offset.borrow()
    }

    fn request_scroll_by(&self, delta: f32) -> f32 {
        *self.immediate.borrow_mut() += 1;
        *self.offset.borrow_mut() += delta;
        delta
    }

    fn request_scroll_animated_by(&self, delta: f32) -> f32 {
        *self.animated.borrow_mut() += 1;
        *self.offset.borrow_mut() += delta;
        delta
    }
}

#[test]
fn test_smooth_flag_selects_host_request() {
    let host = Rc::new(RecordingHost::default());
    let mut pager = Pager::new(host.clone());

    assert!(pager.next_page());
    assert_eq!(*host.immediate.borrow(), 1);
    assert_eq!(*host.animated.borrow(), 0);

    pager.set_smooth_scrolling_enabled(true);
    assert!(pager.next_page());
    assert_eq!(*host.animated.borrow(), 1);
}

// Focus host with three focusables, one per page.
struct ThreePageFocus {
    requested: RefCell<Vec<FocusId>>,
}

impl FocusHost for ThreePageFocus {
    fn focusables(&self) -> Vec<FocusCandidate> {
        vec![
            FocusCandidate::new(FocusId::new(1), 100.0, 300.0),
            FocusCandidate::new(FocusId::new(2), 1100.0, 1300.0),
            FocusCandidate::new(FocusId::new(3), 2100.0, 2300.0),
        ]
    }

    fn request_focus(&self, id: FocusId) {
        self.requested.borrow_mut().push(id);
    }
}

#[test]
fn test_focus_follows_page_moves() {
    let state = ScrollState::new(0.0);
    state.set_metrics(PageMetrics::new(1000.0, 2500.0));
    let focus = Rc::new(ThreePageFocus {
        requested: RefCell::new(Vec::new()),
    });
    let pager = Pager::new(Rc::new(state.clone())).with_focus_host(focus.clone());

    assert!(pager.next_page());
    assert!(pager.move_to_page(3));
    assert!(pager.prev_page());

    assert_eq!(
        *focus.requested.borrow(),
        vec![FocusId::new(2), FocusId::new(3), FocusId::new(2)]
    );
}

#[test]
fn test_scroll_to_child_reveals_and_reports() {
    let (pager, state) = pager_with_state(1000.0, 2500.0);

    // Already visible: nothing to do.
    assert!(!pager.scroll_to_child(Rect::from_edges(0.0, 100.0, 400.0, 300.0)));

    // Below the fold: scroll down just enough.
    assert!(pager.scroll_to_child(Rect::from_edges(0.0, 1200.0, 400.0, 1400.0)));
    assert_eq!(state.value(), 400.0);

    // Above the viewport now: scroll back up to its top.
    assert!(pager.scroll_to_child(Rect::from_edges(0.0, 100.0, 400.0, 300.0)));
    assert_eq!(state.value(), 100.0);
}

#[test]
fn test_reveal_delta_aligns_near_edge_of_tall_children() {
    // Child taller than the viewport below the fold: align its top.
    assert_eq!(
        scroll_delta_to_reveal(1200.0, 2600.0, 0.0, 1000.0),
        1200.0
    );
    // Above the fold: align its bottom.
    assert_eq!(
        scroll_delta_to_reveal(-800.0, 600.0, 1000.0, 2000.0),
        -1400.0
    );
    // Degenerate viewport: no movement.
    assert_eq!(scroll_delta_to_reveal(0.0, 100.0, 500.0, 500.0), 0.0);
}
