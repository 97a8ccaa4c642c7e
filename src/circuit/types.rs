//! Core types for diagram representation.

use std::collections::HashMap;
use std::fmt;

use crate::components::ElementKind;

/// A unique identifier for a placed element, `"<kind>_<n>"` when generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub String);

impl ElementId {
    /// Build an id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A unique identifier for a wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WireId(pub String);

impl WireId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WireId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Element footprint measured along its own axis: `length` runs between the
/// two terminals, `thickness` across them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub length: f64,
    pub thickness: f64,
}

impl Size {
    pub const fn new(length: f64, thickness: f64) -> Self {
        Self { length, thickness }
    }
}

/// Axis-aligned bounding box on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Center of the box.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check whether two boxes come closer than `margin` to each other.
    pub fn overlaps(&self, other: &Rect, margin: f64) -> bool {
        !(self.x + self.width + margin < other.x
            || self.x > other.x + other.width + margin
            || self.y + self.height + margin < other.y
            || self.y > other.y + other.height + margin)
    }

    /// Midpoint of one edge.
    pub fn edge_midpoint(&self, side: Side) -> Point {
        match side {
            Side::Left => Point::new(self.x, self.y + self.height / 2.0),
            Side::Right => Point::new(self.x + self.width, self.y + self.height / 2.0),
            Side::Top => Point::new(self.x + self.width / 2.0, self.y),
            Side::Bottom => Point::new(self.x + self.width / 2.0, self.y + self.height),
        }
    }
}

/// Layout orientation of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Wide and short, terminals on the left and right edges
    #[default]
    Horizontal,
    /// Narrow and tall, terminals on the top and bottom edges
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn rotated(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Parse from a keyword (`hor`, `horizontal`, `ver`, `vertical`, ...).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "h" | "hor" | "horizontal" => Some(Self::Horizontal),
            "v" | "ver" | "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "hor"),
            Self::Vertical => write!(f, "ver"),
        }
    }
}

/// Directional marker on electrically asymmetric elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Polarity {
    /// Positive terminal on the leading (left/top) side
    #[default]
    Positive,
    /// Positive terminal on the trailing (right/bottom) side
    Negative,
}

impl Polarity {
    pub fn flipped(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "pos" | "positive" => Some(Self::Positive),
            "neg" | "negative" => Some(Self::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "pos"),
            Self::Negative => write!(f, "neg"),
        }
    }
}

/// Edge of an element's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// One of the two connection points of an element.
///
/// `Source` sits on the leading edge (left when horizontal, top when
/// vertical), `Target` on the trailing edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    Source,
    Target,
}

impl Terminal {
    /// Box edge this terminal occupies for a given orientation.
    pub fn side(self, orientation: Orientation) -> Side {
        match (self, orientation) {
            (Self::Source, Orientation::Horizontal) => Side::Left,
            (Self::Target, Orientation::Horizontal) => Side::Right,
            (Self::Source, Orientation::Vertical) => Side::Top,
            (Self::Target, Orientation::Vertical) => Side::Bottom,
        }
    }
}

/// Generator for element and wire ids owned by an editing session.
///
/// Each element kind has its own counter, so ids read `resistor_1`,
/// `resistor_2`, `bulb_1`... Counters only move forward; an id is never
/// handed out twice by the same generator.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: u64,
    counters: HashMap<ElementKind, u64>,
    next_wire: u64,
}

impl IdGenerator {
    /// Create a generator whose counters start at 1.
    pub fn new() -> Self {
        Self::with_seed(1)
    }

    /// Create a generator whose counters all start at `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            counters: HashMap::new(),
            next_wire: seed,
        }
    }

    /// Next id for an element of `kind`.
    pub fn next_element(&mut self, kind: ElementKind) -> ElementId {
        let counter = self.counters.entry(kind).or_insert(self.seed);
        let id = ElementId(format!("{}_{}", kind.slug(), counter));
        *counter += 1;
        id
    }

    /// Next wire id.
    pub fn next_wire(&mut self) -> WireId {
        let id = WireId(format!("wire_{}", self.next_wire));
        self.next_wire += 1;
        id
    }

    /// Advance counters past an externally assigned element id so the
    /// generator never collides with it.
    pub fn observe_element(&mut self, kind: ElementKind, id: &ElementId) {
        if let Some(n) = numeric_suffix(id.as_str(), kind.slug()) {
            let counter = self.counters.entry(kind).or_insert(self.seed);
            if *counter <= n {
                *counter = n + 1;
            }
        }
    }

    /// Advance the wire counter past an externally assigned wire id.
    pub fn observe_wire(&mut self, id: &WireId) {
        if let Some(n) = numeric_suffix(id.as_str(), "wire") {
            if self.next_wire <= n {
                self.next_wire = n + 1;
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn numeric_suffix(id: &str, prefix: &str) -> Option<u64> {
    id.strip_prefix(prefix)?.strip_prefix('_')?.parse().ok()
}
