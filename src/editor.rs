//! Editing session: the command interface used by front-ends.
//!
//! An [`Editor`] owns the [`Diagram`], the id generator and the
//! [`Simulation`] machine. Every structural edit goes through it, so it can
//! stop a running simulation before the edit is visible and keep derived
//! state (anchors, animation and error flags) in step with the diagram.
//!
//! Edits are atomic: a rejected command returns an error and leaves the
//! diagram, the id counters and the simulation untouched.

use std::collections::BTreeSet;

use log::{debug, warn};

use crate::circuit::{
    AnchorPair, Diagram, Element, ElementId, IdGenerator, Orientation, Point, Polarity, Size,
    TopologyIssue, TopologyReport, Wire, WireId,
};
use crate::components::{catalog, ElementKind, ParamValue, Parameters, Rgb};
use crate::dsl::{self, DiagramAst};
use crate::error::{BreadboardError, Result};
use crate::simulation::{Simulation, SimulationState};

/// Default clearance kept between placed elements.
pub const DEFAULT_OVERLAP_MARGIN: f64 = 1.0;

/// The diagram a fresh workspace opens with: a lamp circuit with a switch.
pub const STARTER_CIRCUIT: &str = "\
power_source power_source_1 140 0   hor
switch       switch_1       220 40  ver
bulb         bulb_1         140 120 hor
resistor     resistor_1     100 40  ver

.wire power_source_1 switch_1       wire_1
.wire switch_1       bulb_1         wire_2
.wire bulb_1         resistor_1     wire_3
.wire resistor_1     power_source_1 wire_4
";

/// Configuration for an editing session.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// First value of every id counter.
    pub id_seed: u64,
    /// Minimum gap between the boxes of two placed elements.
    pub overlap_margin: f64,
    /// Allow at most one power source in the whole diagram.
    pub single_power_source: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            id_seed: 1,
            overlap_margin: DEFAULT_OVERLAP_MARGIN,
            single_power_source: false,
        }
    }
}

impl EditorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first value of the id counters.
    pub fn with_id_seed(mut self, seed: u64) -> Self {
        self.id_seed = seed;
        self
    }

    /// Set the placement clearance.
    ///
    /// A margin of 0 lets elements touch edge to edge.
    pub fn with_overlap_margin(mut self, margin: f64) -> Self {
        self.overlap_margin = margin;
        self
    }

    /// Reject placing a second power source.
    pub fn with_single_power_source(mut self, single: bool) -> Self {
        self.single_power_source = single;
        self
    }
}

/// Several changes to one element, applied all at once or not at all.
#[derive(Debug, Clone, Default)]
pub struct ElementPatch {
    pub params: Vec<(String, ParamValue)>,
    pub orientation: Option<Orientation>,
    pub polarity: Option<Polarity>,
    pub position: Option<Point>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = Some(polarity);
        self
    }

    pub fn position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    fn is_empty(&self) -> bool {
        self.params.is_empty()
            && self.orientation.is_none()
            && self.polarity.is_none()
            && self.position.is_none()
    }
}

/// A diagram editing session.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    diagram: Diagram,
    ids: IdGenerator,
    simulation: Simulation,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Create an editor with an empty diagram.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            ids: IdGenerator::with_seed(config.id_seed),
            config,
            diagram: Diagram::new(),
            simulation: Simulation::new(),
        }
    }

    /// Take over an existing diagram.
    ///
    /// Id counters are moved past every id already in use. Fails when the
    /// diagram breaks the configured power source limit.
    pub fn from_diagram(mut diagram: Diagram, config: EditorConfig) -> Result<Self> {
        if config.single_power_source {
            let mut sources = diagram.elements_of(ElementKind::PowerSource);
            if let (Some(existing), Some(_)) = (sources.next(), sources.next()) {
                return Err(BreadboardError::PowerSourceLimit {
                    existing: existing.id.to_string(),
                });
            }
        }

        let mut ids = IdGenerator::with_seed(config.id_seed);
        for element in diagram.elements() {
            ids.observe_element(element.kind(), &element.id);
        }
        for wire in diagram.wires() {
            ids.observe_wire(&wire.id);
        }
        diagram.refresh_anchors();

        Ok(Self {
            config,
            diagram,
            ids,
            simulation: Simulation::new(),
        })
    }

    /// Build a session from a parsed diagram description.
    pub fn from_ast(ast: DiagramAst, config: EditorConfig) -> Result<Self> {
        Self::from_diagram(Diagram::from_ast(ast)?, config)
    }

    /// Build a session from diagram DSL text.
    pub fn from_dsl(input: &str, config: EditorConfig) -> Result<Self> {
        Self::from_ast(dsl::parse(input)?, config)
    }

    /// Open the starter lamp circuit.
    pub fn with_starter_circuit(config: EditorConfig) -> Result<Self> {
        Self::from_dsl(STARTER_CIRCUIT, config)
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.diagram.element(id)
    }

    pub fn state(&self) -> SimulationState {
        self.simulation.state()
    }

    /// Orphans of the current errored run.
    pub fn errored_elements(&self) -> BTreeSet<ElementId> {
        self.simulation.errored_elements()
    }

    /// Why the last run request was refused.
    pub fn issue(&self) -> Option<&TopologyIssue> {
        self.simulation.issue()
    }

    pub fn report(&self) -> Option<&TopologyReport> {
        self.simulation.report()
    }

    /// Every wire with its resolved anchors, `None` while unroutable.
    pub fn anchors(&self) -> impl Iterator<Item = (&Wire, Option<AnchorPair>)> {
        self.diagram.wires().iter().map(move |w| (w, self.diagram.route(w)))
    }

    /// Icon to draw for an element.
    ///
    /// Switches follow their state. A bulb is lit while the circuit runs.
    pub fn element_icon(&self, id: &ElementId) -> Option<&'static str> {
        let element = self.diagram.element(id)?;
        let lit = self.state().is_running() && !element.errored;
        Some(catalog(element.kind()).icon_for(element.params(), lit))
    }

    /// Emission colour of a diode, `None` for other kinds or invisible light.
    pub fn element_color(&self, id: &ElementId) -> Option<Rgb> {
        match self.diagram.element(id)?.params() {
            Parameters::Diode(diode) => diode.emission_color(),
            _ => None,
        }
    }

    // ============ Run control ============

    /// Handle the run/stop button.
    pub fn toggle_run(&mut self) -> SimulationState {
        let state = self
            .simulation
            .toggle(self.diagram.elements(), self.diagram.wires());
        let orphans = self.simulation.errored_elements();

        for wire in self.diagram.wires_mut() {
            wire.animated = state.is_running();
        }
        for element in self.diagram.elements_mut() {
            element.errored = orphans.contains(&element.id);
        }
        state
    }

    // ============ Structural edits ============

    /// Place a new element with catalog defaults.
    pub fn add_element(&mut self, kind: ElementKind, position: Point) -> Result<ElementId> {
        if self.config.single_power_source && kind == ElementKind::PowerSource {
            if let Some(existing) = self.diagram.elements_of(kind).next() {
                return Err(rejected(
                    "placement",
                    BreadboardError::PowerSourceLimit {
                        existing: existing.id.to_string(),
                    },
                ));
            }
        }

        let mut ids = self.ids.clone();
        let id = loop {
            let id = ids.next_element(kind);
            if !self.diagram.contains(&id) {
                break id;
            }
        };
        let element = Element::new(id.clone(), kind, position).measured(catalog(kind).footprint);
        self.check_overlap(&element, None)
            .map_err(|e| rejected("placement", e))?;

        self.diagram
            .insert_element(element)
            .map_err(|e| rejected("placement", e))?;
        self.ids = ids;
        self.commit();
        Ok(id)
    }

    /// Apply several changes to one element atomically.
    pub fn update_element(&mut self, id: &ElementId, patch: ElementPatch) -> Result<()> {
        let current = self
            .diagram
            .element(id)
            .ok_or_else(|| BreadboardError::element_not_found(id))?;
        if patch.is_empty() {
            return Ok(());
        }

        let mut updated = current.clone();
        for (name, value) in &patch.params {
            updated
                .set_param(name, *value)
                .map_err(|e| rejected("update", e))?;
        }
        if let Some(polarity) = patch.polarity {
            updated
                .set_polarity(polarity)
                .map_err(|e| rejected("update", e))?;
        }
        if let Some(orientation) = patch.orientation {
            updated.orientation = orientation;
        }
        if let Some(position) = patch.position {
            updated.position = position;
        }
        // Rotation swaps the box, so it can collide just like a move
        if patch.orientation.is_some() || patch.position.is_some() {
            self.check_overlap(&updated, Some(current))
                .map_err(|e| rejected("move", e))?;
        }

        debug!("Updating '{}'", id);
        if let Some(slot) = self.diagram.element_mut(id) {
            *slot = updated;
        }
        self.commit();
        Ok(())
    }

    pub fn move_element(&mut self, id: &ElementId, position: Point) -> Result<()> {
        self.update_element(id, ElementPatch::new().position(position))
    }

    /// Swap between horizontal and vertical layout.
    pub fn rotate_element(&mut self, id: &ElementId) -> Result<()> {
        let orientation = self.require(id)?.orientation.rotated();
        self.update_element(id, ElementPatch::new().orientation(orientation))
    }

    pub fn set_parameter(&mut self, id: &ElementId, name: &str, value: impl Into<ParamValue>) -> Result<()> {
        self.update_element(id, ElementPatch::new().param(name, value))
    }

    pub fn set_polarity(&mut self, id: &ElementId, polarity: Polarity) -> Result<()> {
        self.update_element(id, ElementPatch::new().polarity(polarity))
    }

    /// Reverse the polarity of a polar element.
    pub fn flip_polarity(&mut self, id: &ElementId) -> Result<()> {
        let element = self.require(id)?;
        let polarity = element.polarity().ok_or_else(|| {
            rejected(
                "update",
                BreadboardError::NotPolar {
                    id: id.to_string(),
                    kind: element.kind().to_string(),
                },
            )
        })?;
        self.set_polarity(id, polarity.flipped())
    }

    /// Delete an element and every wire attached to it.
    pub fn delete_element(&mut self, id: &ElementId) -> Result<Element> {
        let (element, _wires) = self
            .diagram
            .remove_element(id)
            .map_err(|e| rejected("delete", e))?;
        self.commit();
        Ok(element)
    }

    /// Wire two elements together.
    pub fn connect(&mut self, source: &ElementId, target: &ElementId) -> Result<WireId> {
        let mut ids = self.ids.clone();
        let id = loop {
            let id = ids.next_wire();
            if self.diagram.wire(&id).is_none() {
                break id;
            }
        };

        self.diagram
            .insert_wire(Wire::new(id.clone(), source.clone(), target.clone()))
            .map_err(|e| rejected("connection", e))?;
        self.ids = ids;
        self.commit();
        Ok(id)
    }

    /// Remove one wire.
    pub fn disconnect(&mut self, id: &WireId) -> Result<Wire> {
        let wire = self
            .diagram
            .remove_wire(id)
            .map_err(|e| rejected("disconnect", e))?;
        debug!("Removed wire '{}'", id);
        self.commit();
        Ok(wire)
    }

    /// Delete the orphans reported by an errored run.
    ///
    /// Returns the deleted ids; nothing happens unless the simulation is
    /// errored.
    pub fn delete_errored_elements(&mut self) -> Vec<ElementId> {
        let orphans = self.simulation.errored_elements();
        let mut deleted = Vec::with_capacity(orphans.len());
        for id in orphans {
            if self.diagram.remove_element(&id).is_ok() {
                deleted.push(id);
            }
        }
        if !deleted.is_empty() {
            debug!("Deleted {} errored element(s)", deleted.len());
            self.commit();
        }
        deleted
    }

    // ============ Layout and selection ============

    /// Record the rendered footprint of an element.
    ///
    /// Not a structural edit: a running simulation keeps running.
    pub fn measure(&mut self, id: &ElementId, footprint: Size) -> Result<()> {
        let element = self
            .diagram
            .element_mut(id)
            .ok_or_else(|| BreadboardError::element_not_found(id))?;
        element.footprint = Some(footprint);
        self.diagram.refresh_anchors();
        Ok(())
    }

    /// Make `id` the only selected element.
    pub fn select(&mut self, id: &ElementId) -> Result<()> {
        self.require(id)?;
        for element in self.diagram.elements_mut() {
            element.selected = &element.id == id;
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        for element in self.diagram.elements_mut() {
            element.selected = false;
        }
    }

    fn require(&self, id: &ElementId) -> Result<&Element> {
        self.diagram
            .element(id)
            .ok_or_else(|| BreadboardError::element_not_found(id))
    }

    /// Reject `candidate` if it overlaps an element that `before` (its
    /// previous layout) did not already overlap.
    fn check_overlap(&self, candidate: &Element, before: Option<&Element>) -> Result<()> {
        let margin = self.config.overlap_margin;
        let existing: Vec<&ElementId> = match before {
            Some(before) => self.diagram.overlaps(before, margin).map(|e| &e.id).collect(),
            None => Vec::new(),
        };
        let fresh = self
            .diagram
            .overlaps(candidate, margin)
            .find(|other| !existing.contains(&&other.id));
        match fresh {
            Some(other) => Err(BreadboardError::Overlap {
                id: candidate.id.to_string(),
                other: other.id.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Bookkeeping after a successful structural edit.
    fn commit(&mut self) {
        if self.simulation.invalidate() {
            for wire in self.diagram.wires_mut() {
                wire.animated = false;
            }
            for element in self.diagram.elements_mut() {
                element.errored = false;
            }
        }
        self.diagram.refresh_anchors();
    }
}

fn rejected(action: &str, err: BreadboardError) -> BreadboardError {
    warn!("Rejected {}: {}", action, err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Side;

    fn id(s: &str) -> ElementId {
        ElementId::new(s)
    }

    fn setup_log() {
        env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init()
            .ok();
    }

    fn starter() -> Editor {
        setup_log();
        Editor::with_starter_circuit(EditorConfig::default()).unwrap()
    }

    #[test]
    fn test_starter_circuit_runs() {
        let mut editor = starter();
        assert_eq!(editor.diagram().elements().len(), 4);
        assert_eq!(editor.diagram().wires().len(), 4);

        assert_eq!(editor.toggle_run(), SimulationState::Running);
        assert!(editor.diagram().wires().iter().all(|w| w.animated));
        assert_eq!(editor.toggle_run(), SimulationState::Stopped);
        assert!(editor.diagram().wires().iter().all(|w| !w.animated));
    }

    #[test]
    fn test_starter_anchors() {
        let editor = starter();
        let (_, route) = editor
            .anchors()
            .find(|(w, _)| w.id.as_str() == "wire_1")
            .unwrap();
        let route = route.unwrap();
        assert_eq!(route.on_a.side, Side::Right);
        assert_eq!(route.on_b.side, Side::Top);
    }

    #[test]
    fn test_generated_ids_skip_loaded_ones() {
        let mut editor = starter();
        let r = editor.add_element(ElementKind::Resistor, Point::new(400.0, 400.0)).unwrap();
        assert_eq!(r.as_str(), "resistor_2");
        let w = editor.connect(&r, &id("bulb_1")).unwrap();
        assert_eq!(w.as_str(), "wire_5");
    }

    #[test]
    fn test_any_edit_stops_running() {
        let edits: [fn(&mut Editor); 8] = [
            |e| {
                e.add_element(ElementKind::Bulb, Point::new(500.0, 500.0)).unwrap();
            },
            |e| {
                e.delete_element(&id("resistor_1")).unwrap();
            },
            |e| {
                e.disconnect(&WireId::new("wire_2")).unwrap();
            },
            |e| e.set_parameter(&id("resistor_1"), "resistance", 47.0).unwrap(),
            |e| e.rotate_element(&id("bulb_1")).unwrap(),
            |e| e.flip_polarity(&id("power_source_1")).unwrap(),
            |e| e.move_element(&id("bulb_1"), Point::new(600.0, 600.0)).unwrap(),
            |e| {
                e.connect(&id("bulb_1"), &id("power_source_1")).unwrap();
            },
        ];

        for edit in edits {
            let mut editor = starter();
            editor.toggle_run();
            assert_eq!(editor.state(), SimulationState::Running);
            edit(&mut editor);
            assert_eq!(editor.state(), SimulationState::Stopped);
            assert!(editor.diagram().wires().iter().all(|w| !w.animated));
        }
    }

    #[test]
    fn test_layout_changes_keep_running() {
        let mut editor = starter();
        editor.toggle_run();
        editor.measure(&id("bulb_1"), Size::new(100.0, 50.0)).unwrap();
        editor.select(&id("bulb_1")).unwrap();
        assert_eq!(editor.state(), SimulationState::Running);
        assert!(editor.element(&id("bulb_1")).unwrap().selected);
        editor.clear_selection();
        assert!(editor.diagram().elements().iter().all(|e| !e.selected));
    }

    #[test]
    fn test_broken_cycle_scenario() {
        let mut editor = starter();
        editor.disconnect(&WireId::new("wire_1")).unwrap();
        let r2 = editor.add_element(ElementKind::Resistor, Point::new(400.0, 0.0)).unwrap();

        assert_eq!(editor.toggle_run(), SimulationState::Errored);
        // The rest of the cycle still reaches the power source via wire_4
        let expected: BTreeSet<ElementId> = [r2.clone()].into_iter().collect();
        assert_eq!(editor.errored_elements(), expected);
        assert_eq!(
            editor.issue(),
            Some(&TopologyIssue::UnreachableElements { elements: vec![r2.clone()] })
        );
        assert!(editor.element(&r2).unwrap().errored);
        assert!(!editor.element(&id("switch_1")).unwrap().errored);

        assert_eq!(editor.toggle_run(), SimulationState::Stopped);
        assert!(editor.diagram().elements().iter().all(|e| !e.errored));
    }

    #[test]
    fn test_delete_errored_elements() {
        let mut editor = starter();
        assert!(editor.delete_errored_elements().is_empty());

        editor.disconnect(&WireId::new("wire_2")).unwrap();
        editor.disconnect(&WireId::new("wire_3")).unwrap();
        assert_eq!(editor.toggle_run(), SimulationState::Errored);
        let deleted = editor.delete_errored_elements();
        assert_eq!(deleted, vec![id("bulb_1")]);
        assert_eq!(editor.state(), SimulationState::Stopped);
        assert_eq!(editor.diagram().wires().len(), 2);

        assert_eq!(editor.toggle_run(), SimulationState::Running);
    }

    #[test]
    fn test_overlap_rejected() {
        let mut editor = starter();
        let before = editor.diagram().elements().len();
        let err = editor
            .add_element(ElementKind::Bulb, Point::new(150.0, 10.0))
            .unwrap_err();
        assert!(matches!(err, BreadboardError::Overlap { .. }));
        assert_eq!(editor.diagram().elements().len(), before);

        // Rejection does not consume an id
        let b = editor.add_element(ElementKind::Bulb, Point::new(500.0, 0.0)).unwrap();
        assert_eq!(b.as_str(), "bulb_2");

        let err = editor.move_element(&b, Point::new(140.0, 120.0)).unwrap_err();
        assert!(matches!(err, BreadboardError::Overlap { .. }));
        assert_eq!(editor.element(&b).unwrap().position, Point::new(500.0, 0.0));
    }

    #[test]
    fn test_rotation_checks_overlap() {
        let mut editor = Editor::default();
        let upper = editor.add_element(ElementKind::Resistor, Point::new(0.0, 0.0)).unwrap();
        let lower = editor.add_element(ElementKind::Resistor, Point::new(0.0, 50.0)).unwrap();
        editor.toggle_run();
        let state = editor.state();

        // Standing upright the 80x40 box reaches down to y = 80
        let err = editor.rotate_element(&upper).unwrap_err();
        assert!(matches!(err, BreadboardError::Overlap { ref other, .. } if other == lower.as_str()));
        assert_eq!(editor.element(&upper).unwrap().orientation, Orientation::Horizontal);
        assert!(editor.diagram().overlapping(editor.element(&upper).unwrap(), 1.0).is_none());
        assert_eq!(editor.state(), state);

        // Rotating the lower one downwards is clear
        editor.rotate_element(&lower).unwrap();
        assert_eq!(editor.element(&lower).unwrap().orientation, Orientation::Vertical);
    }

    #[test]
    fn test_rotation_tolerates_touching_neighbours() {
        // Starter parts already touch at their corners
        let mut editor = starter();
        editor.rotate_element(&id("bulb_1")).unwrap();
        assert_eq!(editor.element(&id("bulb_1")).unwrap().orientation, Orientation::Vertical);
    }

    #[test]
    fn test_icons_and_colors() {
        let mut editor = starter();
        assert_eq!(editor.element_icon(&id("bulb_1")), Some("lamp_off_icon.svg"));
        assert_eq!(editor.element_icon(&id("switch_1")), Some("switcher_off_icon.svg"));
        editor.toggle_run();
        assert_eq!(editor.element_icon(&id("bulb_1")), Some("lamp_on_icon.svg"));

        let led = editor.add_element(ElementKind::Diode, Point::new(400.0, 0.0)).unwrap();
        assert_eq!(editor.element_color(&led), Some(Rgb::new(255, 0, 0)));
        editor.set_parameter(&led, "wave_length", 525.0).unwrap();
        assert_eq!(editor.element_color(&led), Some(Rgb::new(0, 255, 0)));
        assert_eq!(editor.element_color(&id("bulb_1")), None);
        assert_eq!(editor.element_icon(&id("nope")), None);
    }

    #[test]
    fn test_single_power_source() {
        let config = EditorConfig::new().with_single_power_source(true);
        let mut editor = Editor::with_starter_circuit(config).unwrap();
        let err = editor
            .add_element(ElementKind::PowerSource, Point::new(500.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, BreadboardError::PowerSourceLimit { .. }));

        let mut relaxed = starter();
        assert!(relaxed
            .add_element(ElementKind::PowerSource, Point::new(500.0, 0.0))
            .is_ok());

        // Loading a diagram that already breaks the rule fails too
        let two = "battery p1 0 0\nbattery p2 200 0\n";
        assert!(Editor::from_dsl(two, EditorConfig::default()).is_ok());
        let err = Editor::from_dsl(two, EditorConfig::new().with_single_power_source(true)).unwrap_err();
        assert!(matches!(err, BreadboardError::PowerSourceLimit { .. }));
    }

    #[test]
    fn test_patch_is_atomic() {
        let mut editor = starter();
        editor.toggle_run();
        let before = editor.element(&id("resistor_1")).unwrap().clone();

        let patch = ElementPatch::new()
            .param("resistance", 100.0)
            .orientation(Orientation::Horizontal)
            .polarity(Polarity::Negative);
        let err = editor.update_element(&id("resistor_1"), patch).unwrap_err();
        assert!(matches!(err, BreadboardError::NotPolar { .. }));
        assert_eq!(editor.element(&id("resistor_1")).unwrap(), &before);
        assert_eq!(editor.state(), SimulationState::Running);
    }

    #[test]
    fn test_missing_targets() {
        let mut editor = starter();
        assert!(matches!(
            editor.delete_element(&id("nope")),
            Err(BreadboardError::ElementNotFound { .. })
        ));
        assert!(matches!(
            editor.disconnect(&WireId::new("nope")),
            Err(BreadboardError::WireNotFound { .. })
        ));
        assert!(matches!(
            editor.connect(&id("bulb_1"), &id("switch_1")),
            Err(BreadboardError::DuplicateWire { .. })
        ));
    }

    #[test]
    fn test_id_seed() {
        let mut editor = Editor::new(EditorConfig::new().with_id_seed(10));
        let a = editor.add_element(ElementKind::Diode, Point::default()).unwrap();
        assert_eq!(a.as_str(), "diode_10");
        assert_eq!(editor.toggle_run(), SimulationState::Errored);
        assert_eq!(editor.issue(), Some(&TopologyIssue::NoPowerSource));
    }
}
