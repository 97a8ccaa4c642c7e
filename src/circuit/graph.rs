//! Diagram store: the central collection of elements and wires.

use log::debug;

use super::anchors::{resolve_anchors, AnchorPair};
use super::element::Element;
use super::types::{ElementId, Point, WireId};
use super::wire::Wire;
use crate::components::{catalog, ElementKind, Parameters};
use crate::dsl::DiagramAst;
use crate::error::{BreadboardError, Result};

/// Elements and wires of one circuit diagram.
///
/// Invariants kept by every method:
/// - element ids are unique
/// - every wire's endpoints exist (deleting an element deletes its wires)
/// - no wire joins an element to itself, and no two wires join the same pair
///
/// The store itself has no notion of simulation state; see
/// [`Editor`](crate::Editor) for the session that invalidates it.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    elements: Vec<Element>,
    wires: Vec<Wire>,
}

impl Diagram {
    /// Create an empty diagram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a diagram from a parsed description.
    ///
    /// Elements get their catalog footprint so the result is routable
    /// straight away. Wires without an explicit id are numbered in file
    /// order, skipping ids the file already uses.
    pub fn from_ast(ast: DiagramAst) -> Result<Self> {
        let mut diagram = Diagram::new();

        for def in ast.elements {
            let params = Parameters::from_values(
                def.kind,
                def.params.iter().map(|(name, value)| (name.as_str(), *value)),
            )
            .map_err(|e| BreadboardError::invalid_element(&def.name, def.line, e.to_string()))?;

            let mut element = Element::with_params(
                ElementId::new(def.name.clone()),
                params,
                Point::new(def.x, def.y),
            )
            .measured(catalog(def.kind).footprint);
            if let Some(orientation) = def.orientation {
                element.orientation = orientation;
            }
            if let Some(polarity) = def.polarity {
                element
                    .set_polarity(polarity)
                    .map_err(|e| BreadboardError::invalid_element(&def.name, def.line, e.to_string()))?;
            }

            diagram.insert_element(element)?;
        }

        let taken: Vec<&str> = ast.wires.iter().filter_map(|w| w.id.as_deref()).collect();
        let mut next = 1usize;
        let mut fresh_id = || loop {
            let candidate = format!("wire_{}", next);
            next += 1;
            if !taken.contains(&candidate.as_str()) {
                return WireId(candidate);
            }
        };

        let mut wires = Vec::with_capacity(ast.wires.len());
        for def in &ast.wires {
            let id = match &def.id {
                Some(id) => WireId::new(id.clone()),
                None => fresh_id(),
            };
            wires.push((def.line, Wire::new(id, def.source.as_str().into(), def.target.as_str().into())));
        }
        for (line, wire) in wires {
            diagram
                .insert_wire(wire)
                .map_err(|e| BreadboardError::parse(line, e.to_string()))?;
        }

        diagram.refresh_anchors();
        Ok(diagram)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Find an element by id.
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    pub(crate) fn element_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| &e.id == id)
    }

    /// Find a wire by id.
    pub fn wire(&self, id: &WireId) -> Option<&Wire> {
        self.wires.iter().find(|w| &w.id == id)
    }

    pub(crate) fn wires_mut(&mut self) -> impl Iterator<Item = &mut Wire> {
        self.wires.iter_mut()
    }

    pub(crate) fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.iter_mut()
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.element(id).is_some()
    }

    /// Elements of one kind.
    pub fn elements_of(&self, kind: ElementKind) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.kind() == kind)
    }

    /// Measured elements whose boxes come within `margin` of `candidate`.
    ///
    /// `candidate` itself is skipped by id, so this also checks moves.
    pub fn overlaps<'a>(&'a self, candidate: &Element, margin: f64) -> impl Iterator<Item = &'a Element> + 'a {
        let id = candidate.id.clone();
        let bounds = candidate.bounds();
        self.elements.iter().filter(move |other| {
            other.id != id
                && match (bounds, other.bounds()) {
                    (Some(a), Some(b)) => a.overlaps(&b, margin),
                    _ => false,
                }
        })
    }

    /// First element `candidate` would overlap.
    pub fn overlapping(&self, candidate: &Element, margin: f64) -> Option<&Element> {
        self.overlaps(candidate, margin).next()
    }

    /// Add an element.
    pub fn insert_element(&mut self, element: Element) -> Result<()> {
        if self.contains(&element.id) {
            return Err(BreadboardError::DuplicateElement {
                id: element.id.to_string(),
            });
        }
        debug!("Inserting {} '{}'", element.kind(), element.id);
        self.elements.push(element);
        Ok(())
    }

    /// Remove an element together with every wire attached to it.
    pub fn remove_element(&mut self, id: &ElementId) -> Result<(Element, Vec<Wire>)> {
        let pos = self
            .elements
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| BreadboardError::element_not_found(id))?;
        let element = self.elements.remove(pos);

        let (removed, kept): (Vec<Wire>, Vec<Wire>) =
            std::mem::take(&mut self.wires).into_iter().partition(|w| w.touches(id));
        self.wires = kept;

        debug!("Removed '{}' and {} wire(s)", id, removed.len());
        Ok((element, removed))
    }

    /// Add a wire between two existing, distinct, not yet joined elements.
    pub fn insert_wire(&mut self, wire: Wire) -> Result<()> {
        for end in [&wire.source, &wire.target] {
            if !self.contains(end) {
                return Err(BreadboardError::element_not_found(end));
            }
        }
        if wire.source == wire.target {
            return Err(BreadboardError::SelfConnection {
                id: wire.source.to_string(),
            });
        }
        if let Some(existing) = self
            .wires
            .iter()
            .find(|w| w.id == wire.id || w.joins(&wire.source, &wire.target))
        {
            return Err(BreadboardError::DuplicateWire {
                id: existing.id.to_string(),
                source_id: wire.source.to_string(),
                target_id: wire.target.to_string(),
            });
        }

        debug!("Wiring '{}' -> '{}' as '{}'", wire.source, wire.target, wire.id);
        self.wires.push(wire);
        Ok(())
    }

    /// Remove a wire.
    pub fn remove_wire(&mut self, id: &WireId) -> Result<Wire> {
        let pos = self
            .wires
            .iter()
            .position(|w| &w.id == id)
            .ok_or_else(|| BreadboardError::WireNotFound { id: id.to_string() })?;
        Ok(self.wires.remove(pos))
    }

    /// Resolve anchors for one wire, `None` when it cannot be drawn yet.
    pub fn route(&self, wire: &Wire) -> Option<AnchorPair> {
        let source = self.element(&wire.source)?;
        let target = self.element(&wire.target)?;
        resolve_anchors(source, target)
    }

    /// Recompute the derived anchors stored on every wire.
    pub fn refresh_anchors(&mut self) {
        let routes: Vec<Option<AnchorPair>> = self.wires.iter().map(|w| self.route(w)).collect();
        for (wire, route) in self.wires.iter_mut().zip(routes) {
            wire.source_anchor = route.map(|r| r.on_a);
            wire.target_anchor = route.map(|r| r.on_b);
        }
    }
}
