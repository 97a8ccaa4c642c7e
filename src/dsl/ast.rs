//! Abstract Syntax Tree types for the diagram DSL.

use crate::circuit::{Orientation, Polarity};
use crate::components::{ElementKind, ParamValue};

/// Complete AST representation of a parsed diagram.
#[derive(Debug, Clone, Default)]
pub struct DiagramAst {
    /// Placed elements, in file order
    pub elements: Vec<ElementDef>,
    /// Wires, in file order
    pub wires: Vec<WireDef>,
}

impl DiagramAst {
    /// Create a new empty diagram AST.
    pub fn new() -> Self {
        Self::default()
    }
}

/// An element placement from the DSL.
#[derive(Debug, Clone)]
pub struct ElementDef {
    pub kind: ElementKind,
    /// Element id, unique within the diagram
    pub name: String,
    /// Canvas position of the top-left corner
    pub x: f64,
    pub y: f64,
    /// Defaults to horizontal when omitted
    pub orientation: Option<Orientation>,
    /// Only valid on polar kinds
    pub polarity: Option<Polarity>,
    /// Overrides of the catalog defaults
    pub params: Vec<(String, ParamValue)>,
    /// Source line number for error reporting
    pub line: usize,
}

/// A `.wire` directive.
#[derive(Debug, Clone)]
pub struct WireDef {
    pub source: String,
    pub target: String,
    /// Explicit wire id; generated when omitted
    pub id: Option<String>,
    pub line: usize,
}
