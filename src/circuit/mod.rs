//! Circuit diagram representation, wire routing and validation.
//!
//! This module provides the in-memory model of a diagram: placed
//! [`Element`]s, the [`Wire`]s between them, and the [`Diagram`] store that
//! keeps the two consistent. On top of it sit the anchor resolver used to
//! draw wires and the topology validator consulted before a run.

mod anchors;
mod element;
mod graph;
mod types;
mod validate;
mod wire;

pub use anchors::{resolve_anchors, Anchor, AnchorPair, TIE_EPSILON};
pub use element::Element;
pub use graph::Diagram;
pub use types::*;
pub use validate::{
    connected_components, validate, validate_circuit, ConnectedComponent, Remediation,
    TopologyIssue, TopologyReport,
};
pub use wire::Wire;
