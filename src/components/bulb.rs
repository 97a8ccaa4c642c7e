//! Incandescent bulb.

use super::{number, unknown, ElementKind, ParamValue};
use crate::error::Result;

/// Bulb parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Bulb {
    /// Rated power in watts
    pub power: f64,
    /// Rated voltage in volts
    pub voltage: f64,
}

impl Bulb {
    pub const PARAMS: &'static [&'static str] = &["power", "voltage"];

    pub fn get(&self, param: &str) -> Option<ParamValue> {
        match param {
            "power" => Some(ParamValue::Number(self.power)),
            "voltage" => Some(ParamValue::Number(self.voltage)),
            _ => None,
        }
    }

    pub fn set(&mut self, param: &str, value: ParamValue) -> Result<()> {
        let kind = ElementKind::Bulb;
        match param {
            "power" => self.power = number(kind, param, value, 0.0, false)?,
            "voltage" => self.voltage = number(kind, param, value, 0.0, false)?,
            _ => return Err(unknown(kind, param)),
        }
        Ok(())
    }
}

impl Default for Bulb {
    fn default() -> Self {
        Self {
            power: 5.0,
            voltage: 10.0,
        }
    }
}
