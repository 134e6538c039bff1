//! Rectangle intersection tests used to decide view visibility.
//!
//! The two tests differ on edge handling:
//!
//! - [`in_view`] (element containers) is a strict axis-aligned overlap test in box coordinates.
//!   Rects that merely touch an edge are *not* visible.
//! - [`in_viewport`] (window containers) compares the rect's far edges against the box origin and
//!   its near edges against the box *size*, inclusively. A rect touching the viewport edge *is*
//!   visible.

use crate::{BoundingBox, ClientRect};

/// Strict overlap test for element containers.
pub fn in_view(pos: &ClientRect, bbox: &BoundingBox) -> bool {
    pos.top < bbox.top + bbox.height
        && pos.left < bbox.left + bbox.width
        && pos.top + pos.height > bbox.top
        && pos.left + pos.width > bbox.left
}

/// Inclusive viewport test for the window container.
pub fn in_viewport(pos: &ClientRect, bbox: &BoundingBox) -> bool {
    pos.bottom() >= bbox.top
        && pos.right() >= bbox.left
        && pos.top <= bbox.height
        && pos.left <= bbox.width
}
