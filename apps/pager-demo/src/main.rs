//! Headless demo: feeds a synthetic gesture stream through the classifier
//! and prints how the pager and the scroll indicator react.
//!
//! Run with `RUST_LOG=debug` to see the flick decisions as they are made.

use std::rc::Rc;

use pagescroll_foundation::{
    GestureClassifier, GestureHost, PageMetrics, PagingConfig, PointerEvent, ViewportHost,
};
use pagescroll_ui::{Pager, ScrollIndicator, ScrollState};
use pagescroll_ui_graphics::Point;

struct LoggingGestureHost;

impl GestureHost for LoggingGestureHost {
    fn cancel_long_press(&self) {
        log::info!("host: long press cancelled");
    }

    fn set_disallow_intercept(&self, disallow: bool) {
        log::info!("host: disallow intercept = {disallow}");
    }
}

/// One vertical swipe: press, a few moves, release.
fn swipe(classifier: &mut GestureClassifier, from_y: f32, to_y: f32, start_ms: u64) {
    let x = 200.0;
    classifier.handle(&PointerEvent::down(1, Point::new(x, from_y), start_ms));
    let steps: u64 = 4;
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        let y = from_y + (to_y - from_y) * t;
        classifier.handle(&PointerEvent::moved(1, Point::new(x, y), start_ms + step * 16));
    }
    classifier.handle(&PointerEvent::up(1, start_ms + (steps + 1) * 16));
}

fn main() {
    env_logger::init();

    // A 1000px viewport over 2500px of content: three pages.
    let state = ScrollState::new(0.0);
    state.set_metrics(PageMetrics::new(1000.0, 2500.0));

    let pager = Rc::new(Pager::new(Rc::new(state.clone())));
    let mut classifier = GestureClassifier::new(
        PagingConfig::default(),
        pager.clone(),
        Rc::new(LoggingGestureHost),
    );

    let indicator = ScrollIndicator::default();
    let report = |label: &str| {
        let metrics = state.metrics();
        let thumb = indicator.thumb_rect(&metrics, state.value(), 400.0);
        println!(
            "{label}: page {}/{} offset {} thumb@{:.0}+{:.0}",
            pager.current_page(),
            pager.page_count(),
            state.value(),
            thumb.top(),
            thumb.height,
        );
    };

    report("start");

    swipe(&mut classifier, 800.0, 300.0, 0); // flick up: next page
    report("after flick up");

    swipe(&mut classifier, 800.0, 750.0, 1000); // too short: no page change
    report("after short drag");

    swipe(&mut classifier, 800.0, 300.0, 2000);
    report("after second flick up");

    swipe(&mut classifier, 300.0, 800.0, 3000); // flick down: previous page
    report("after flick down");

    pager.move_to_page(3);
    report("after move_to_page(3)");
}
