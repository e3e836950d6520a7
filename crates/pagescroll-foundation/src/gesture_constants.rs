//! Shared gesture constants for consistent touch/pointer handling.
//!
//! These values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor before building a
//! `PagingConfig` from them.

/// Drag threshold in logical pixels.
///
/// If a pointer moves more than this distance from the initial press
/// position, the gesture stops being a tap: the classifier enters its
/// dragging state and asks the host to cancel any pending long-press.
///
/// Value of 8.0 matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const TOUCH_SLOP: f32 = 8.0;

/// Paging threshold in logical pixels.
///
/// A drag only counts as a deliberate page flick once its total displacement
/// exceeds this, which is intentionally much larger than [`TOUCH_SLOP`]:
/// small drags should neither tap nor turn the page. Matches Android's
/// ViewConfiguration.PAGING_TOUCH_SLOP on a baseline density.
pub const PAGING_TOUCH_SLOP: f32 = 96.0;

/// Slope used for the vertical/horizontal tie-break when `dx == 0`.
///
/// Any value >= 1 forces the vertical branch; the displacement is straight
/// down the axis, so vertical dominates.
pub const VERTICAL_DOMINANT_SLOPE: f32 = 2.0;
