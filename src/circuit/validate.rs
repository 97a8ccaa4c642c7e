//! Circuit topology validation.
//!
//! A diagram can run when it is non-empty, holds a power source, and every
//! connected group of elements contains at least one power source. Elements
//! in a group without one are unreachable and reported back so the editor
//! can offer to delete them.

use std::collections::{BTreeSet, HashMap, VecDeque};

use log::debug;
use thiserror::Error;

use super::element::Element;
use super::graph::Diagram;
use super::types::{ElementId, WireId};
use super::wire::Wire;
use crate::error::Result;

/// Reason a diagram cannot run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopologyIssue {
    /// Nothing placed yet
    #[error("Circuit is empty")]
    EmptyCircuit,

    /// Elements present but none of them is a power source
    #[error("Circuit has no power source")]
    NoPowerSource,

    /// Some elements are not connected to any power source
    #[error(
        "{} element(s) not connected to a power source: {}",
        .elements.len(),
        join_ids(.elements)
    )]
    UnreachableElements { elements: Vec<ElementId> },
}

impl TopologyIssue {
    /// User-facing remediation for this issue.
    pub fn remediation(&self) -> Remediation {
        match self {
            TopologyIssue::EmptyCircuit => Remediation {
                title: "The workspace is empty",
                prompt: "Place some elements and wire them to a power source.".to_string(),
                action: None,
            },
            TopologyIssue::NoPowerSource => Remediation {
                title: "The circuit has no power source",
                prompt: "Add a power source and connect it to the circuit.".to_string(),
                action: None,
            },
            TopologyIssue::UnreachableElements { elements } => Remediation {
                title: "The workspace contains invalid elements",
                prompt: format!("Delete these {} element(s)?", elements.len()),
                action: Some("Delete"),
            },
        }
    }
}

/// Message and optional one-click fix shown for a [`TopologyIssue`].
#[derive(Debug, Clone, PartialEq)]
pub struct Remediation {
    pub title: &'static str,
    pub prompt: String,
    /// Label of the bulk-delete button, when a fix exists
    pub action: Option<&'static str>,
}

/// Maximal set of elements reachable from one another through wires.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectedComponent {
    pub elements: BTreeSet<ElementId>,
    /// Whether the group contains a power source
    pub powered: bool,
}

/// Outcome of validating a diagram.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TopologyReport {
    /// Why the diagram cannot run, if it cannot
    pub issue: Option<TopologyIssue>,
    /// Partition of all elements, ordered by smallest member id
    pub components: Vec<ConnectedComponent>,
    /// Elements in unpowered components
    pub errored_elements: BTreeSet<ElementId>,
    /// Wires skipped because an endpoint no longer exists
    pub dangling_wires: Vec<WireId>,
}

impl TopologyReport {
    /// Check if the diagram may start running.
    pub fn is_runnable(&self) -> bool {
        self.issue.is_none()
    }
}

/// Validate a set of elements and wires.
///
/// Never fails: every problem is described in the returned report. Wires
/// referencing missing elements are ignored.
pub fn validate(elements: &[Element], wires: &[Wire]) -> TopologyReport {
    if elements.is_empty() {
        return TopologyReport {
            issue: Some(TopologyIssue::EmptyCircuit),
            ..TopologyReport::default()
        };
    }

    let (components, dangling_wires) = connected_components(elements, wires);

    if !elements.iter().any(Element::is_power_source) {
        return TopologyReport {
            issue: Some(TopologyIssue::NoPowerSource),
            components,
            errored_elements: BTreeSet::new(),
            dangling_wires,
        };
    }

    let errored_elements: BTreeSet<ElementId> = components
        .iter()
        .filter(|c| !c.powered)
        .flat_map(|c| c.elements.iter().cloned())
        .collect();

    let issue = if errored_elements.is_empty() {
        None
    } else {
        Some(TopologyIssue::UnreachableElements {
            elements: errored_elements.iter().cloned().collect(),
        })
    };

    TopologyReport {
        issue,
        components,
        errored_elements,
        dangling_wires,
    }
}

/// Validate a diagram, turning any issue into an error.
pub fn validate_circuit(diagram: &Diagram) -> Result<TopologyReport> {
    let report = validate(diagram.elements(), diagram.wires());
    match report.issue {
        Some(ref issue) => Err(issue.clone().into()),
        None => Ok(report),
    }
}

/// Partition elements into connected components by breadth-first search.
///
/// Each element lands in exactly one component. Also returns the wires that
/// were skipped for referencing unknown elements.
pub fn connected_components(
    elements: &[Element],
    wires: &[Wire],
) -> (Vec<ConnectedComponent>, Vec<WireId>) {
    let index: HashMap<&ElementId, usize> = elements
        .iter()
        .enumerate()
        .map(|(i, e)| (&e.id, i))
        .collect();

    // Undirected adjacency list
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); elements.len()];
    let mut dangling = Vec::new();
    for wire in wires {
        match (index.get(&wire.source), index.get(&wire.target)) {
            (Some(&s), Some(&t)) => {
                adjacency[s].push(t);
                adjacency[t].push(s);
            }
            _ => {
                debug!(
                    "Skipping wire '{}': endpoint '{}' or '{}' missing",
                    wire.id, wire.source, wire.target
                );
                dangling.push(wire.id.clone());
            }
        }
    }

    let mut visited = vec![false; elements.len()];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..elements.len() {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        queue.push_back(start);

        let mut members = BTreeSet::new();
        let mut powered = false;
        while let Some(current) = queue.pop_front() {
            let element = &elements[current];
            powered |= element.is_power_source();
            members.insert(element.id.clone());
            for &next in &adjacency[current] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        components.push(ConnectedComponent {
            elements: members,
            powered,
        });
    }

    components.sort_by(|a, b| a.elements.iter().next().cmp(&b.elements.iter().next()));
    (components, dangling)
}

fn join_ids(ids: &[ElementId]) -> String {
    ids.iter()
        .map(ElementId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Point;
    use crate::components::ElementKind;

    fn element(id: &str, kind: ElementKind) -> Element {
        Element::new(id.into(), kind, Point::default())
    }

    fn wire(a: &str, b: &str) -> Wire {
        Wire::new(format!("{}-{}", a, b).as_str().into(), a.into(), b.into())
    }

    fn ids(names: &[&str]) -> BTreeSet<ElementId> {
        names.iter().map(|n| ElementId::new(*n)).collect()
    }

    fn cycle() -> (Vec<Element>, Vec<Wire>) {
        let elements = vec![
            element("P1", ElementKind::PowerSource),
            element("S1", ElementKind::Switch),
            element("B1", ElementKind::Bulb),
            element("R1", ElementKind::Resistor),
        ];
        let wires = vec![
            wire("P1", "S1"),
            wire("S1", "B1"),
            wire("B1", "R1"),
            wire("R1", "P1"),
        ];
        (elements, wires)
    }

    #[test]
    fn test_empty_circuit() {
        let report = validate(&[], &[]);
        assert_eq!(report.issue, Some(TopologyIssue::EmptyCircuit));
        assert!(report.errored_elements.is_empty());
        assert!(!report.is_runnable());
    }

    #[test]
    fn test_no_power_source() {
        let elements = vec![element("R1", ElementKind::Resistor), element("B1", ElementKind::Bulb)];
        let report = validate(&elements, &[wire("R1", "B1")]);
        assert_eq!(report.issue, Some(TopologyIssue::NoPowerSource));
        assert!(report.errored_elements.is_empty());
    }

    #[test]
    fn test_closed_cycle_runs() {
        let (elements, wires) = cycle();
        let report = validate(&elements, &wires);
        assert!(report.is_runnable());
        assert!(report.errored_elements.is_empty());
        assert_eq!(report.components.len(), 1);
        assert!(report.components[0].powered);
    }

    #[test]
    fn test_broken_cycle_with_isolated_resistor() {
        let (mut elements, mut wires) = cycle();
        wires.retain(|w| !w.joins(&"P1".into(), &"S1".into()));
        elements.push(element("R2", ElementKind::Resistor));

        // P1 still reaches R1, B1 and S1 the other way round the loop
        let report = validate(&elements, &wires);
        assert_eq!(report.errored_elements, ids(&["R2"]));

        // Cutting R1-P1 as well isolates the power source
        wires.retain(|w| !w.joins(&"R1".into(), &"P1".into()));
        let report = validate(&elements, &wires);
        assert_eq!(report.errored_elements, ids(&["S1", "B1", "R1", "R2"]));
        assert_eq!(
            report.issue,
            Some(TopologyIssue::UnreachableElements {
                elements: vec!["B1".into(), "R1".into(), "R2".into(), "S1".into()],
            })
        );
    }

    #[test]
    fn test_two_disjoint_components() {
        let elements = vec![
            element("P1", ElementKind::PowerSource),
            element("B1", ElementKind::Bulb),
            element("R1", ElementKind::Resistor),
            element("C1", ElementKind::Capacitor),
        ];
        let wires = vec![wire("P1", "B1"), wire("R1", "C1")];
        let report = validate(&elements, &wires);
        assert_eq!(report.errored_elements, ids(&["R1", "C1"]));
        assert_eq!(report.components.len(), 2);
    }

    #[test]
    fn test_every_element_visited_once() {
        let elements: Vec<Element> = (0..12)
            .map(|i| {
                let kind = if i % 5 == 0 { ElementKind::PowerSource } else { ElementKind::Resistor };
                element(&format!("E{:02}", i), kind)
            })
            .collect();
        let wires = vec![
            wire("E01", "E02"),
            wire("E02", "E03"),
            wire("E03", "E01"),
            wire("E05", "E06"),
            wire("E07", "E08"),
            wire("E08", "E09"),
            wire("E09", "E07"),
            wire("E10", "E10"),
        ];

        let (components, _) = connected_components(&elements, &wires);
        let total: usize = components.iter().map(|c| c.elements.len()).sum();
        assert_eq!(total, elements.len());

        let union: BTreeSet<ElementId> =
            components.iter().flat_map(|c| c.elements.iter().cloned()).collect();
        assert_eq!(union.len(), elements.len());
    }

    #[test]
    fn test_partition_invariant_under_ordering() {
        let (mut elements, mut wires) = cycle();
        elements.push(element("R2", ElementKind::Resistor));
        elements.push(element("B2", ElementKind::Bulb));
        wires.push(wire("R2", "B2"));
        wires.retain(|w| !w.joins(&"B1".into(), &"R1".into()));

        let expected = validate(&elements, &wires);
        for rotation in 0..wires.len() {
            let mut w = wires.clone();
            w.rotate_left(rotation);
            let mut e = elements.clone();
            e.rotate_left(rotation % elements.len());
            assert_eq!(validate(&e, &w), expected);

            w.reverse();
            e.reverse();
            assert_eq!(validate(&e, &w), expected);
        }
    }

    #[test]
    fn test_dangling_wire_is_ignored() {
        let (elements, mut wires) = cycle();
        wires.push(wire("B1", "ghost"));
        let report = validate(&elements, &wires);
        assert!(report.is_runnable());
        assert_eq!(report.dangling_wires, vec![WireId::new("B1-ghost")]);
    }

    #[test]
    fn test_issue_messages() {
        let issue = TopologyIssue::UnreachableElements {
            elements: vec!["R2".into(), "S1".into()],
        };
        assert_eq!(
            issue.to_string(),
            "2 element(s) not connected to a power source: R2, S1"
        );
        assert_eq!(issue.remediation().action, Some("Delete"));
        assert_eq!(TopologyIssue::NoPowerSource.remediation().action, None);
    }
}
