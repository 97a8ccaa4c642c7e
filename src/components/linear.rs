//! Passive components: Resistor, Capacitor, Polar Capacitor.

use super::{number, unknown, ElementKind, ParamValue};
use crate::error::Result;

/// Resistor parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor {
    /// Resistance in ohms
    pub resistance: f64,
}

impl Resistor {
    pub const PARAMS: &'static [&'static str] = &["resistance"];

    pub fn get(&self, param: &str) -> Option<ParamValue> {
        match param {
            "resistance" => Some(ParamValue::Number(self.resistance)),
            _ => None,
        }
    }

    pub fn set(&mut self, param: &str, value: ParamValue) -> Result<()> {
        match param {
            "resistance" => {
                self.resistance = number(ElementKind::Resistor, param, value, 0.0, true)?;
                Ok(())
            }
            _ => Err(unknown(ElementKind::Resistor, param)),
        }
    }
}

impl Default for Resistor {
    fn default() -> Self {
        Self { resistance: 10.0 }
    }
}

/// Non-polarised capacitor parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Capacitor {
    /// Capacitance in farads
    pub capacitance: f64,
}

impl Capacitor {
    pub const PARAMS: &'static [&'static str] = &["capacitance"];

    pub fn get(&self, param: &str) -> Option<ParamValue> {
        match param {
            "capacitance" => Some(ParamValue::Number(self.capacitance)),
            _ => None,
        }
    }

    pub fn set(&mut self, param: &str, value: ParamValue) -> Result<()> {
        match param {
            "capacitance" => {
                self.capacitance = number(ElementKind::Capacitor, param, value, 0.0, true)?;
                Ok(())
            }
            _ => Err(unknown(ElementKind::Capacitor, param)),
        }
    }
}

impl Default for Capacitor {
    fn default() -> Self {
        Self { capacitance: 1e-6 }
    }
}

/// Electrolytic (polarised) capacitor parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarCapacitor {
    /// Capacitance in farads
    pub capacitance: f64,
    /// Rated voltage in volts
    pub voltage: f64,
}

impl PolarCapacitor {
    pub const PARAMS: &'static [&'static str] = &["capacitance", "voltage"];

    pub fn get(&self, param: &str) -> Option<ParamValue> {
        match param {
            "capacitance" => Some(ParamValue::Number(self.capacitance)),
            "voltage" => Some(ParamValue::Number(self.voltage)),
            _ => None,
        }
    }

    pub fn set(&mut self, param: &str, value: ParamValue) -> Result<()> {
        let kind = ElementKind::PolarCapacitor;
        match param {
            "capacitance" => self.capacitance = number(kind, param, value, 0.0, true)?,
            "voltage" => self.voltage = number(kind, param, value, 0.0, true)?,
            _ => return Err(unknown(kind, param)),
        }
        Ok(())
    }
}

impl Default for PolarCapacitor {
    fn default() -> Self {
        Self {
            capacitance: 100e-6,
            voltage: 16.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resistor_rejects_zero() {
        let mut r = Resistor::default();
        assert!(r.set("resistance", ParamValue::Number(0.0)).is_err());
        r.set("resistance", ParamValue::Number(4.7e3)).unwrap();
        assert_eq!(r.resistance, 4.7e3);
    }

    #[test]
    fn test_polar_capacitor_has_voltage_rating() {
        let mut c = PolarCapacitor::default();
        c.set("voltage", ParamValue::Number(25.0)).unwrap();
        assert_eq!(c.get("voltage"), Some(ParamValue::Number(25.0)));
        assert!(Capacitor::default().get("voltage").is_none());
    }
}
