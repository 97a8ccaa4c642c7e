//! # Breadboard Core
//!
//! The editing core of an interactive circuit-diagram builder.
//!
//! This library provides:
//! - A catalog of placeable elements with their default parameters
//! - An element/wire model kept consistent by a central diagram store
//! - Anchor resolution that picks which sides of two elements a wire joins
//! - Topology validation by connected-component analysis
//! - A run/stop state machine driven by the validator's verdict
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`components`] - Element kinds, catalog and per-kind parameters
//! - [`circuit`] - Diagram model, anchor resolver and validator
//! - [`simulation`] - Run/stop state machine
//! - [`editor`] - Command interface owning a diagram session
//! - [`dsl`] - Parser for the text diagram format
//! - `report` - Human-readable run report (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! breadboard lamp.bb --anchors
//! ```
//!
//! ### Library
//!
//! ```
//! use breadboard_core::{Editor, EditorConfig, SimulationState};
//! use breadboard_core::components::ElementKind;
//! use breadboard_core::circuit::Point;
//!
//! let mut editor = Editor::with_starter_circuit(EditorConfig::default()).unwrap();
//! assert_eq!(editor.toggle_run(), SimulationState::Running);
//!
//! // Any structural edit stops the run
//! editor.add_element(ElementKind::Resistor, Point::new(400.0, 0.0)).unwrap();
//! assert_eq!(editor.state(), SimulationState::Stopped);
//!
//! // The new resistor is not wired to anything
//! assert_eq!(editor.toggle_run(), SimulationState::Errored);
//! assert_eq!(editor.errored_elements().len(), 1);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmEditor } from 'breadboard_core';
//!
//! const editor = WasmEditor.starter();
//! editor.toggle_run(); // "running"
//! ```

pub mod circuit;
pub mod components;
pub mod dsl;
pub mod editor;
pub mod error;
pub mod simulation;

#[cfg(feature = "cli")]
pub mod report;

// Re-export main types for convenience
pub use circuit::Diagram;
pub use editor::{Editor, EditorConfig, ElementPatch};
pub use error::{BreadboardError, Result};
pub use simulation::{Simulation, SimulationState};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmEditor;
