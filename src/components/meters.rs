//! Measuring instruments: Ammeter, Voltmeter, Ohmmeter, Galvanometer.

use super::{number, unknown, ElementKind, ParamValue};
use crate::error::Result;

/// Meter parameters, shared by every instrument kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Meter {
    /// Full-scale reading in the instrument's unit (A, V or ohm)
    pub range: f64,
}

impl Meter {
    pub const PARAMS: &'static [&'static str] = &["range"];

    /// Default full scale for an instrument kind.
    pub fn for_kind(kind: ElementKind) -> Self {
        let range = match kind {
            ElementKind::Ammeter => 10.0,
            ElementKind::Voltmeter => 50.0,
            ElementKind::Ohmmeter => 1e3,
            ElementKind::Galvanometer => 1e-3,
            _ => 1.0,
        };
        Self { range }
    }

    pub fn get(&self, param: &str) -> Option<ParamValue> {
        match param {
            "range" => Some(ParamValue::Number(self.range)),
            _ => None,
        }
    }

    pub fn set(&mut self, kind: ElementKind, param: &str, value: ParamValue) -> Result<()> {
        match param {
            "range" => {
                self.range = number(kind, param, value, 0.0, true)?;
                Ok(())
            }
            _ => Err(unknown(kind, param)),
        }
    }
}
