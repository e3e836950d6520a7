//! Pager, scroll state, indicator geometry, and focus traversal for
//! pagescroll.
//!
//! This crate sits on top of `pagescroll-foundation`: the classifier down
//! there decides *that* a page should turn; the [`Pager`] here decides *how
//! far* to scroll and keeps the queries (`page_count`, `current_page`) that
//! the indicator and focus traversal derive from.

pub mod focus;
pub mod indicator;
pub mod pager;
pub mod scroll;

#[cfg(test)]
mod tests;

pub use focus::{find_focusable_in_bounds, FocusCandidate, FocusHost, FocusId};
pub use indicator::{IndicatorStyle, ScrollIndicator};
pub use pager::Pager;
pub use scroll::ScrollState;

pub mod prelude {
    pub use crate::focus::{FocusCandidate, FocusHost, FocusId};
    pub use crate::indicator::{IndicatorStyle, ScrollIndicator};
    pub use crate::pager::Pager;
    pub use crate::scroll::ScrollState;
}
