//! Plain-text run report for the CLI frontend.

use std::io::Write;

use log::info;

use crate::circuit::{validate_circuit, Anchor, ElementId};
use crate::editor::Editor;
use crate::error::{BreadboardError, Result};
use crate::simulation::SimulationState;

/// Result of pressing run once from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub state: SimulationState,
    /// Elements deleted by `--prune`
    pub pruned: Vec<ElementId>,
}

/// Press run, optionally deleting unreachable elements and running again.
///
/// The second run only happens when something was actually deleted; an
/// errored run with no orphans (no power source) stays errored.
pub fn run_once(editor: &mut Editor, prune: bool) -> RunOutcome {
    let mut state = editor.toggle_run();
    let mut pruned = Vec::new();
    if prune && state == SimulationState::Errored {
        pruned = editor.delete_errored_elements();
        info!("Pruned {} unreachable element(s)", pruned.len());
        if !pruned.is_empty() {
            state = editor.toggle_run();
        }
    }
    RunOutcome { state, pruned }
}

/// Fail unless the diagram is running.
///
/// Re-validates rather than trusting the recorded issue, which a stop
/// clears.
pub fn require_running(editor: &Editor) -> Result<()> {
    if editor.state().is_running() {
        return Ok(());
    }
    validate_circuit(editor.diagram())?;
    Err(BreadboardError::OutputError {
        message: format!("diagram is {}", editor.state()),
    })
}

/// What to include beyond state and topology.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Print the resolved anchors of every wire
    pub anchors: bool,
}

/// Write a report of the editor's diagram and last run request.
pub fn write_report<W: Write>(out: &mut W, editor: &Editor, options: ReportOptions) -> Result<()> {
    write_lines(out, editor, options).map_err(|e| BreadboardError::OutputError {
        message: e.to_string(),
    })
}

fn write_lines<W: Write>(out: &mut W, editor: &Editor, options: ReportOptions) -> std::io::Result<()> {
    let diagram = editor.diagram();
    writeln!(
        out,
        "Diagram: {} element(s), {} wire(s)",
        diagram.elements().len(),
        diagram.wires().len()
    )?;
    writeln!(out, "State: {}", editor.state())?;

    if let Some(report) = editor.report() {
        if !report.components.is_empty() {
            writeln!(out, "Components:")?;
            for (i, component) in report.components.iter().enumerate() {
                let label = if component.powered { "powered" } else { "unpowered" };
                writeln!(out, "  [{}] {}: {}", i + 1, label, join(component.elements.iter()))?;
            }
        }
        if !report.dangling_wires.is_empty() {
            writeln!(out, "Ignored wires: {}", join(report.dangling_wires.iter()))?;
        }
    }

    if let Some(issue) = editor.issue() {
        let remediation = issue.remediation();
        writeln!(out, "Issue: {}", issue)?;
        writeln!(out, "  {}", remediation.title)?;
        match remediation.action {
            Some(action) => writeln!(out, "  {} [{}]", remediation.prompt, action)?,
            None => writeln!(out, "  {}", remediation.prompt)?,
        }
    }

    if options.anchors {
        writeln!(out, "Anchors:")?;
        for (wire, route) in editor.anchors() {
            match route {
                Some(pair) => writeln!(
                    out,
                    "  {}: {} -> {}",
                    wire.id,
                    endpoint(&wire.source, &pair.on_a),
                    endpoint(&wire.target, &pair.on_b)
                )?,
                None => writeln!(out, "  {}: unmeasured", wire.id)?,
            }
        }
    }

    Ok(())
}

fn endpoint(id: &ElementId, anchor: &Anchor) -> String {
    format!("{}.{} ({}, {})", id, anchor.side, anchor.point.x, anchor.point.y)
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{Point, TopologyIssue};
    use crate::components::ElementKind;
    use crate::editor::EditorConfig;

    fn render(editor: &Editor, anchors: bool) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, editor, ReportOptions { anchors }).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_running_report() {
        let mut editor = Editor::with_starter_circuit(EditorConfig::default()).unwrap();
        editor.toggle_run();
        let text = render(&editor, true);
        assert!(text.starts_with("Diagram: 4 element(s), 4 wire(s)\nState: running\n"));
        assert!(text.contains("[1] powered: bulb_1, power_source_1, resistor_1, switch_1"));
        assert!(!text.contains("Issue:"));
        assert!(text.contains("wire_1: power_source_1.right (220, 20) -> switch_1.top (240, 40)"));
    }

    #[test]
    fn test_errored_report() {
        let mut editor = Editor::with_starter_circuit(EditorConfig::default()).unwrap();
        editor
            .add_element(ElementKind::Bulb, Point::new(400.0, 0.0))
            .unwrap();
        editor.toggle_run();
        let text = render(&editor, false);
        assert!(text.contains("State: errored"));
        assert!(text.contains("[2] unpowered: bulb_2"));
        assert!(text.contains("Issue: 1 element(s) not connected to a power source: bulb_2"));
        assert!(text.contains("Delete these 1 element(s)? [Delete]"));
        assert!(!text.contains("Anchors:"));
    }

    #[test]
    fn test_prune_without_power_source_stays_errored() {
        let mut editor =
            Editor::from_dsl("resistor r1 0 0\nbulb b1 200 0\n.wire r1 b1\n", EditorConfig::default())
                .unwrap();
        let outcome = run_once(&mut editor, true);
        assert_eq!(outcome.state, SimulationState::Errored);
        assert!(outcome.pruned.is_empty());
        assert_eq!(editor.diagram().elements().len(), 2);
        assert!(render(&editor, false).contains("State: errored"));

        let err = require_running(&editor).unwrap_err();
        assert!(matches!(err, BreadboardError::Topology(TopologyIssue::NoPowerSource)));
    }

    #[test]
    fn test_prune_then_run() {
        let mut editor = Editor::with_starter_circuit(EditorConfig::default()).unwrap();
        editor
            .add_element(ElementKind::Bulb, Point::new(400.0, 0.0))
            .unwrap();
        let outcome = run_once(&mut editor, true);
        assert_eq!(outcome.state, SimulationState::Running);
        assert_eq!(outcome.pruned, vec![ElementId::from("bulb_2")]);
        assert!(require_running(&editor).is_ok());
    }

    #[test]
    fn test_empty_diagram_is_not_running() {
        let mut editor = Editor::default();
        let outcome = run_once(&mut editor, true);
        assert_eq!(outcome.state, SimulationState::Stopped);
        let err = require_running(&editor).unwrap_err();
        assert!(matches!(err, BreadboardError::Topology(TopologyIssue::EmptyCircuit)));
    }

    #[test]
    fn test_stopped_report() {
        let editor = Editor::default();
        let text = render(&editor, true);
        assert_eq!(text, "Diagram: 0 element(s), 0 wire(s)\nState: stopped\nAnchors:\n");
    }
}
