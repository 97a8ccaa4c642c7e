//! Power source.

use super::{number, unknown, ElementKind, ParamValue};
use crate::error::Result;

/// Power source (battery) parameters.
///
/// A diagram needs at least one of these in every connected group of
/// elements before it can run.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSource {
    /// Source voltage in volts
    pub power: f64,
}

impl PowerSource {
    pub const PARAMS: &'static [&'static str] = &["power"];

    pub fn get(&self, param: &str) -> Option<ParamValue> {
        match param {
            "power" => Some(ParamValue::Number(self.power)),
            _ => None,
        }
    }

    pub fn set(&mut self, param: &str, value: ParamValue) -> Result<()> {
        match param {
            "power" => {
                self.power = number(ElementKind::PowerSource, param, value, 0.0, false)?;
                Ok(())
            }
            _ => Err(unknown(ElementKind::PowerSource, param)),
        }
    }
}

impl Default for PowerSource {
    fn default() -> Self {
        Self { power: 10.0 }
    }
}
