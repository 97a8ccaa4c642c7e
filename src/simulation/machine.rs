//! The simulation state machine.

use std::collections::BTreeSet;

use log::info;

use super::SimulationState;
use crate::circuit::{validate, Element, ElementId, TopologyIssue, TopologyReport, Wire};

/// Run/stop state plus the outcome of the last run request.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    state: SimulationState,
    /// Report of the run request that produced the current state
    report: Option<TopologyReport>,
}

impl Simulation {
    /// Create a stopped simulation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Orphaned elements of an errored run; empty in every other state.
    pub fn errored_elements(&self) -> BTreeSet<ElementId> {
        match (&self.state, &self.report) {
            (SimulationState::Errored, Some(report)) => report.errored_elements.clone(),
            _ => BTreeSet::new(),
        }
    }

    /// Validation report of the last run request, cleared on stop.
    pub fn report(&self) -> Option<&TopologyReport> {
        self.report.as_ref()
    }

    /// Why the last run request was refused, if it was.
    pub fn issue(&self) -> Option<&TopologyIssue> {
        self.report.as_ref().and_then(|r| r.issue.as_ref())
    }

    /// Handle a run/stop request.
    ///
    /// From `stopped` the topology is validated: a clean report starts the
    /// run, unreachable elements or a missing power source end in `errored`,
    /// and an empty diagram leaves the machine stopped with the issue
    /// recorded. From `running` or `errored` the machine stops without
    /// looking at the diagram.
    pub fn toggle(&mut self, elements: &[Element], wires: &[Wire]) -> SimulationState {
        match self.state {
            SimulationState::Stopped => {
                let report = validate(elements, wires);
                let next = match report.issue {
                    None => SimulationState::Running,
                    Some(TopologyIssue::EmptyCircuit) => SimulationState::Stopped,
                    Some(_) => SimulationState::Errored,
                };
                if let Some(issue) = &report.issue {
                    info!("Run refused: {}", issue);
                }
                self.report = Some(report);
                self.transition(next);
            }
            SimulationState::Running | SimulationState::Errored => self.stop(),
        }
        self.state
    }

    /// Return to `stopped` after a structural edit.
    ///
    /// Returns whether the machine was running or errored.
    pub fn invalidate(&mut self) -> bool {
        let was_active = self.state != SimulationState::Stopped;
        self.stop();
        was_active
    }

    fn stop(&mut self) {
        self.report = None;
        self.transition(SimulationState::Stopped);
    }

    fn transition(&mut self, next: SimulationState) {
        if self.state != next {
            info!("Simulation {} -> {}", self.state, next);
            self.state = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{Point, Size};
    use crate::components::ElementKind;

    fn element(id: &str, kind: ElementKind) -> Element {
        Element::new(id.into(), kind, Point::default()).measured(Size::new(80.0, 40.0))
    }

    fn wire(id: &str, a: &str, b: &str) -> Wire {
        Wire::new(id.into(), a.into(), b.into())
    }

    fn lamp_circuit() -> (Vec<Element>, Vec<Wire>) {
        let elements = vec![
            element("p1", ElementKind::PowerSource),
            element("s1", ElementKind::Switch),
            element("b1", ElementKind::Bulb),
            element("r1", ElementKind::Resistor),
        ];
        let wires = vec![
            wire("w1", "p1", "s1"),
            wire("w2", "s1", "b1"),
            wire("w3", "b1", "r1"),
            wire("w4", "r1", "p1"),
        ];
        (elements, wires)
    }

    #[test]
    fn test_initial_state() {
        let sim = Simulation::new();
        assert_eq!(sim.state(), SimulationState::Stopped);
        assert!(sim.errored_elements().is_empty());
        assert!(sim.issue().is_none());
    }

    #[test]
    fn test_toggle_valid_circuit() {
        let (elements, wires) = lamp_circuit();
        let mut sim = Simulation::new();
        assert_eq!(sim.toggle(&elements, &wires), SimulationState::Running);
        assert!(sim.errored_elements().is_empty());
        assert_eq!(sim.toggle(&elements, &wires), SimulationState::Stopped);
    }

    #[test]
    fn test_toggle_orphans() {
        let (mut elements, mut wires) = lamp_circuit();
        wires.retain(|w| w.id.as_str() != "w1");
        elements.push(element("r2", ElementKind::Resistor));

        let mut sim = Simulation::new();
        assert_eq!(sim.toggle(&elements, &wires), SimulationState::Errored);
        // The broken cycle is still a path p1-r1-b1-s1
        let errored = sim.errored_elements();
        assert_eq!(errored.len(), 1);
        assert!(errored.contains(&ElementId::new("r2")));

        // Cutting the path again strands s1 and b1
        sim.toggle(&elements, &wires);
        wires.retain(|w| w.id.as_str() != "w3");
        assert_eq!(sim.toggle(&elements, &wires), SimulationState::Errored);
        let errored: Vec<&str> = sim
            .report()
            .unwrap()
            .errored_elements
            .iter()
            .map(|id| id.as_str())
            .collect();
        assert_eq!(errored, vec!["b1", "r2", "s1"]);
    }

    #[test]
    fn test_errored_toggle_does_not_revalidate() {
        let elements = vec![element("b1", ElementKind::Bulb)];
        let mut sim = Simulation::new();
        assert_eq!(sim.toggle(&elements, &[]), SimulationState::Errored);
        assert_eq!(sim.issue(), Some(&TopologyIssue::NoPowerSource));
        assert!(sim.errored_elements().is_empty());

        // Even a now-valid diagram only stops the machine
        let (elements, wires) = lamp_circuit();
        assert_eq!(sim.toggle(&elements, &wires), SimulationState::Stopped);
        assert!(sim.issue().is_none());
    }

    #[test]
    fn test_empty_circuit_is_noop() {
        let mut sim = Simulation::new();
        assert_eq!(sim.toggle(&[], &[]), SimulationState::Stopped);
        assert_eq!(sim.issue(), Some(&TopologyIssue::EmptyCircuit));
    }

    #[test]
    fn test_invalidate() {
        let (elements, wires) = lamp_circuit();
        let mut sim = Simulation::new();
        assert!(!sim.invalidate());
        sim.toggle(&elements, &wires);
        assert!(sim.invalidate());
        assert_eq!(sim.state(), SimulationState::Stopped);
        assert!(sim.report().is_none());
    }

    #[test]
    fn test_state_labels() {
        assert_eq!(SimulationState::Running.to_string(), "running");
        assert_eq!(SimulationState::Errored.action_label(), "Stop");
        assert_eq!(SimulationState::default().action_label(), "Run");
    }
}
