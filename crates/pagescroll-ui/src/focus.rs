//! Focus traversal that follows paging.
//!
//! When a page turn scrolls a new vertical band into view, focus should land
//! on the best focusable inside that band. Candidates are plain vertical
//! extents reported by the host; the selection rule is pure.

/// Unique identifier for focusable elements, allocated by the host.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusId(pub usize);

impl FocusId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn as_usize(self) -> usize {
        self.0
    }
}

/// Vertical extent of one focusable element, in content coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusCandidate {
    pub id: FocusId,
    pub top: f32,
    pub bottom: f32,
}

impl FocusCandidate {
    pub fn new(id: FocusId, top: f32, bottom: f32) -> Self {
        Self { id, top, bottom }
    }
}

/// Optional focus collaborator for the pager.
pub trait FocusHost {
    /// Focusable elements in traversal order.
    fn focusables(&self) -> Vec<FocusCandidate>;

    /// Give focus to the element previously reported with `id`.
    fn request_focus(&self, id: FocusId);
}

/// Finds the best focusable inside the band `[top, bottom]`.
///
/// A fully contained candidate is one whose top is below the band's top and
/// whose bottom is above the band's bottom; fully contained beats partially
/// contained. Among candidates of the same containment, the one closer to
/// the leading edge wins: the top of the band when `top_focus` is true
/// (scrolling up), the bottom otherwise.
pub fn find_focusable_in_bounds(
    top_focus: bool,
    top: f32,
    bottom: f32,
    candidates: &[FocusCandidate],
) -> Option<FocusCandidate> {
    let mut best: Option<FocusCandidate> = None;
    let mut best_fully_contained = false;

    for candidate in candidates {
        if top >= candidate.bottom || candidate.top >= bottom {
            continue;
        }
        let fully_contained = top < candidate.top && candidate.bottom < bottom;

        let current = match best {
            None => {
                best = Some(*candidate);
                best_fully_contained = fully_contained;
                continue;
            }
            Some(current) => current,
        };

        let closer_to_boundary = (top_focus && candidate.top < current.top)
            || (!top_focus && candidate.bottom > current.bottom);

        if best_fully_contained {
            // Only another fully contained candidate can win, and it has to
            // be closer to the boundary.
            if fully_contained && closer_to_boundary {
                best = Some(*candidate);
            }
        } else if fully_contained {
            best = Some(*candidate);
            best_fully_contained = true;
        } else if closer_to_boundary {
            best = Some(*candidate);
        }
    }

    best
}
