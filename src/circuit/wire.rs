//! Wires between elements.

use super::anchors::Anchor;
use super::types::{ElementId, WireId};

/// Logically undirected connection between two elements.
///
/// `source`/`target` only record the direction the wire was drawn in.
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    pub id: WireId,
    pub source: ElementId,
    pub target: ElementId,
    /// Derived attachment on the source element
    pub source_anchor: Option<Anchor>,
    /// Derived attachment on the target element
    pub target_anchor: Option<Anchor>,
    /// Rendering hint, set while the simulation runs
    pub animated: bool,
}

impl Wire {
    pub fn new(id: WireId, source: ElementId, target: ElementId) -> Self {
        Self {
            id,
            source,
            target,
            source_anchor: None,
            target_anchor: None,
            animated: false,
        }
    }

    /// Check if the wire touches an element.
    pub fn touches(&self, element: &ElementId) -> bool {
        &self.source == element || &self.target == element
    }

    /// Check if the wire joins the same two elements as `(a, b)`, in either
    /// direction.
    pub fn joins(&self, a: &ElementId, b: &ElementId) -> bool {
        (&self.source == a && &self.target == b) || (&self.source == b && &self.target == a)
    }

    /// Endpoint on the other side of `element`.
    pub fn other_end(&self, element: &ElementId) -> Option<&ElementId> {
        if &self.source == element {
            Some(&self.target)
        } else if &self.target == element {
            Some(&self.source)
        } else {
            None
        }
    }
}
