//! Pointer input model and paging gesture classification for pagescroll
//!
//! Everything here is host-toolkit independent: the host feeds normalized
//! pointer events in, and gets page-flick callbacks and scroll requests out.

pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod viewport;


// Re-export commonly used items
pub use gestures::paging::{
    GestureClassifier, GestureHost, GestureState, PageFlickListener, PagingConfig,
};
pub use input::{PointerEvent, PointerEventKind, PointerId, PointerSample};
pub use viewport::{PageMetrics, ViewportHost};

pub mod prelude {
    pub use crate::gesture_constants::{PAGING_TOUCH_SLOP, TOUCH_SLOP};
    pub use crate::gestures::paging::{
        GestureClassifier, GestureHost, GestureState, PageFlickListener, PagingConfig,
    };
    pub use crate::input::{PointerEvent, PointerEventKind, PointerId, PointerSample};
    pub use crate::viewport::{PageMetrics, ViewportHost};
}
