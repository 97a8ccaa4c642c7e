//! Wire anchor resolution.
//!
//! Every element has two terminals on opposite edges of its bounding box:
//! left/right when horizontal, top/bottom when vertical. For a wire between
//! two elements each end attaches to the terminal facing the other element,
//! judged along the element's own axis:
//!
//! ```text
//!   horizontal a          vertical b
//!   +--------+            +--+
//!   |        |o---------->o  |   a picks Right (b is further along x)
//!   +--------+            |  |   b picks Top   (a is higher up in y)
//!                         +--+
//! ```
//!
//! When both centers sit level on the deciding axis the cross axis breaks the
//! tie, and when they coincide entirely the first element takes its trailing
//! terminal and the second its leading one. The result is a pure function of
//! the two element snapshots.

use std::cmp::Ordering;

use super::element::Element;
use super::types::{Orientation, Point, Side, Terminal};

/// Centers closer than this on an axis count as level.
pub const TIE_EPSILON: f64 = 1e-9;

/// Where one wire end attaches to an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub terminal: Terminal,
    pub side: Side,
    /// Midpoint of the chosen bounding-box edge
    pub point: Point,
}

/// Anchors for both ends of a wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPair {
    pub on_a: Anchor,
    pub on_b: Anchor,
}

/// Resolve which terminal of `a` and of `b` a wire between them uses.
///
/// Returns `None` while either element has no measured footprint; callers
/// should skip drawing the wire rather than treat it as an error.
pub fn resolve_anchors(a: &Element, b: &Element) -> Option<AnchorPair> {
    let on_a = anchor_for(a, b, true)?;
    let on_b = anchor_for(b, a, false)?;
    Some(AnchorPair { on_a, on_b })
}

fn anchor_for(own: &Element, other: &Element, first: bool) -> Option<Anchor> {
    let bounds = own.bounds()?;
    let own_center = bounds.center();
    let other_center = other.center()?;

    let (along, across) = match own.orientation {
        Orientation::Horizontal => (
            other_center.x - own_center.x,
            other_center.y - own_center.y,
        ),
        Orientation::Vertical => (
            other_center.y - own_center.y,
            other_center.x - own_center.x,
        ),
    };

    let terminal = match compare(along).then_with(|| compare(across)) {
        Ordering::Greater => Terminal::Target,
        Ordering::Less => Terminal::Source,
        Ordering::Equal if first => Terminal::Target,
        Ordering::Equal => Terminal::Source,
    };
    let side = terminal.side(own.orientation);

    Some(Anchor {
        terminal,
        side,
        point: bounds.edge_midpoint(side),
    })
}

fn compare(delta: f64) -> Ordering {
    if delta > TIE_EPSILON {
        Ordering::Greater
    } else if delta < -TIE_EPSILON {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}
