//! WASM bindings for Breadboard Core.
//!
//! This module exposes the [`Editor`] command interface to a JavaScript
//! front-end. Ids cross the boundary as plain strings, coordinates as
//! numbers, and every rejected command throws with the error message.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmEditor } from 'breadboard_core';
//!
//! await init();
//!
//! const editor = WasmEditor.starter();
//! const r2 = editor.add_element('resistor', 400, 0);
//!
//! editor.toggle_run();               // "errored"
//! editor.errored_elements();         // ["resistor_2"]
//! editor.delete_errored_elements();
//! editor.toggle_run();               // "running"
//!
//! // [x1, y1, x2, y2] for drawing the wire path
//! editor.wire_anchors('wire_1');
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{ElementId, Point, Size, WireId};
use crate::components::{ElementKind, ParamValue};
use crate::editor::{Editor, EditorConfig};
use crate::error::BreadboardError;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_err(err: BreadboardError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_kind(kind: &str) -> crate::error::Result<ElementKind> {
    ElementKind::from_keyword(kind).ok_or_else(|| BreadboardError::WasmError {
        message: format!("unknown element kind '{}'", kind),
    })
}

/// WASM-compatible diagram editor.
#[wasm_bindgen]
pub struct WasmEditor {
    editor: Editor,
}

#[wasm_bindgen]
impl WasmEditor {
    /// Create an editor with an empty workspace.
    #[wasm_bindgen(constructor)]
    pub fn new(single_power_source: bool) -> WasmEditor {
        let config = EditorConfig::new().with_single_power_source(single_power_source);
        WasmEditor {
            editor: Editor::new(config),
        }
    }

    /// Create an editor on the starter lamp circuit.
    #[wasm_bindgen]
    pub fn starter() -> Result<WasmEditor, JsValue> {
        let editor = Editor::with_starter_circuit(EditorConfig::default()).map_err(js_err)?;
        Ok(WasmEditor { editor })
    }

    /// Load a saved diagram.
    #[wasm_bindgen]
    pub fn from_dsl(diagram_dsl: &str, single_power_source: bool) -> Result<WasmEditor, JsValue> {
        let config = EditorConfig::new().with_single_power_source(single_power_source);
        let editor = Editor::from_dsl(diagram_dsl, config).map_err(js_err)?;
        Ok(WasmEditor { editor })
    }

    /// Current state: "stopped", "running" or "errored".
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.editor.state().to_string()
    }

    /// Press the run/stop button; returns the new state.
    #[wasm_bindgen]
    pub fn toggle_run(&mut self) -> String {
        self.editor.toggle_run().to_string()
    }

    #[wasm_bindgen]
    pub fn errored_elements(&self) -> Vec<String> {
        self.editor
            .errored_elements()
            .into_iter()
            .map(|id| id.0)
            .collect()
    }

    /// Message explaining why the last run was refused.
    #[wasm_bindgen]
    pub fn issue(&self) -> Option<String> {
        self.editor.issue().map(|i| i.to_string())
    }

    /// Remediation prompt for the last refused run.
    #[wasm_bindgen]
    pub fn remediation(&self) -> Option<String> {
        self.editor
            .issue()
            .map(|i| i.remediation())
            .map(|r| format!("{}: {}", r.title, r.prompt))
    }

    #[wasm_bindgen]
    pub fn delete_errored_elements(&mut self) -> Vec<String> {
        self.editor
            .delete_errored_elements()
            .into_iter()
            .map(|id| id.0)
            .collect()
    }

    /// Place an element; returns its generated id.
    #[wasm_bindgen]
    pub fn add_element(&mut self, kind: &str, x: f64, y: f64) -> Result<String, JsValue> {
        let kind = parse_kind(kind).map_err(js_err)?;
        let id = self
            .editor
            .add_element(kind, Point::new(x, y))
            .map_err(js_err)?;
        Ok(id.0)
    }

    #[wasm_bindgen]
    pub fn delete_element(&mut self, id: &str) -> Result<(), JsValue> {
        self.editor
            .delete_element(&ElementId::from(id))
            .map(|_| ())
            .map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn move_element(&mut self, id: &str, x: f64, y: f64) -> Result<(), JsValue> {
        self.editor
            .move_element(&ElementId::from(id), Point::new(x, y))
            .map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn rotate_element(&mut self, id: &str) -> Result<(), JsValue> {
        self.editor
            .rotate_element(&ElementId::from(id))
            .map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn flip_polarity(&mut self, id: &str) -> Result<(), JsValue> {
        self.editor
            .flip_polarity(&ElementId::from(id))
            .map_err(js_err)
    }

    /// Set a numeric parameter such as `resistance`.
    #[wasm_bindgen]
    pub fn set_parameter(&mut self, id: &str, name: &str, value: f64) -> Result<(), JsValue> {
        self.editor
            .set_parameter(&ElementId::from(id), name, ParamValue::Number(value))
            .map_err(js_err)
    }

    /// Set an on/off parameter such as `switch_state`.
    #[wasm_bindgen]
    pub fn set_flag(&mut self, id: &str, name: &str, value: bool) -> Result<(), JsValue> {
        self.editor
            .set_parameter(&ElementId::from(id), name, ParamValue::Flag(value))
            .map_err(js_err)
    }

    /// Wire two elements; returns the wire id.
    #[wasm_bindgen]
    pub fn connect(&mut self, source: &str, target: &str) -> Result<String, JsValue> {
        let id = self
            .editor
            .connect(&ElementId::from(source), &ElementId::from(target))
            .map_err(js_err)?;
        Ok(id.0)
    }

    #[wasm_bindgen]
    pub fn disconnect(&mut self, wire: &str) -> Result<(), JsValue> {
        self.editor
            .disconnect(&WireId::from(wire))
            .map(|_| ())
            .map_err(js_err)
    }

    /// Report the rendered size of an element.
    #[wasm_bindgen]
    pub fn measure(&mut self, id: &str, length: f64, thickness: f64) -> Result<(), JsValue> {
        self.editor
            .measure(&ElementId::from(id), Size::new(length, thickness))
            .map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn select(&mut self, id: &str) -> Result<(), JsValue> {
        self.editor.select(&ElementId::from(id)).map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn clear_selection(&mut self) {
        self.editor.clear_selection();
    }

    #[wasm_bindgen]
    pub fn element_ids(&self) -> Vec<String> {
        self.editor
            .diagram()
            .elements()
            .iter()
            .map(|e| e.id.to_string())
            .collect()
    }

    #[wasm_bindgen]
    pub fn wire_ids(&self) -> Vec<String> {
        self.editor
            .diagram()
            .wires()
            .iter()
            .map(|w| w.id.to_string())
            .collect()
    }

    /// Icon to draw for an element, reflecting its on/off state.
    #[wasm_bindgen]
    pub fn element_icon(&self, id: &str) -> Option<String> {
        self.editor
            .element_icon(&ElementId::from(id))
            .map(str::to_string)
    }

    /// CSS colour of a diode's light, e.g. `rgb(255, 0, 0)`.
    #[wasm_bindgen]
    pub fn element_color(&self, id: &str) -> Option<String> {
        self.editor
            .element_color(&ElementId::from(id))
            .map(|c| c.to_string())
    }

    /// Endpoints `[x1, y1, x2, y2]` of a wire, or `undefined` while either
    /// end is unmeasured.
    #[wasm_bindgen]
    pub fn wire_anchors(&self, wire: &str) -> Option<Vec<f64>> {
        let wire = self.editor.diagram().wire(&WireId::from(wire))?;
        let pair = self.editor.diagram().route(wire)?;
        Some(vec![
            pair.on_a.point.x,
            pair.on_a.point.y,
            pair.on_b.point.x,
            pair.on_b.point.y,
        ])
    }

    /// Whether a wire should be drawn animated.
    #[wasm_bindgen]
    pub fn wire_animated(&self, wire: &str) -> bool {
        self.editor
            .diagram()
            .wire(&WireId::from(wire))
            .map(|w| w.animated)
            .unwrap_or(false)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Keywords accepted by `add_element`.
#[wasm_bindgen]
pub fn element_kinds() -> Vec<String> {
    ElementKind::ALL.iter().map(|k| k.slug().to_string()).collect()
}
