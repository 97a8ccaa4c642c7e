//! Element kinds and their parameter records.
//!
//! This module provides the closed set of placeable circuit elements:
//! - Sources: Power Source
//! - Passive: Resistor, Capacitor, Polar Capacitor
//! - Indicators: Bulb, Diode
//! - Controls: Switch
//! - Meters: Ammeter, Voltmeter, Ohmmeter, Galvanometer
//!
//! Every kind owns its own parameter record. [`Parameters`] is the tagged
//! union over those records, so an element's parameters always have exactly
//! the attributes its kind requires.

mod bulb;
mod catalog;
mod controls;
mod diode;
mod linear;
mod meters;
mod sources;

pub use bulb::Bulb;
pub use catalog::{catalog, defaults_for, CatalogEntry};
pub use controls::Switch;
pub use diode::{Diode, Rgb};
pub use linear::{Capacitor, PolarCapacitor, Resistor};
pub use meters::Meter;
pub use sources::PowerSource;

use std::fmt;

use crate::error::{BreadboardError, Result};

/// Kind of a placed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    PowerSource,
    Resistor,
    Bulb,
    Switch,
    Capacitor,
    PolarCapacitor,
    Diode,
    Ammeter,
    Voltmeter,
    Ohmmeter,
    Galvanometer,
}

impl ElementKind {
    /// Every kind, in palette order.
    pub const ALL: [ElementKind; 11] = [
        Self::PowerSource,
        Self::Resistor,
        Self::Bulb,
        Self::Switch,
        Self::Capacitor,
        Self::PolarCapacitor,
        Self::Diode,
        Self::Ammeter,
        Self::Voltmeter,
        Self::Ohmmeter,
        Self::Galvanometer,
    ];

    /// Identifier fragment used in generated ids and diagram files.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::PowerSource => "power_source",
            Self::Resistor => "resistor",
            Self::Bulb => "bulb",
            Self::Switch => "switch",
            Self::Capacitor => "capacitor",
            Self::PolarCapacitor => "polar_capacitor",
            Self::Diode => "diode",
            Self::Ammeter => "ammeter",
            Self::Voltmeter => "voltmeter",
            Self::Ohmmeter => "ohmmeter",
            Self::Galvanometer => "galvanometer",
        }
    }

    /// Parse a kind from a diagram keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "power_source" | "powersource" | "battery" => Some(Self::PowerSource),
            "resistor" => Some(Self::Resistor),
            "bulb" | "lamp" => Some(Self::Bulb),
            "switch" => Some(Self::Switch),
            "capacitor" => Some(Self::Capacitor),
            "polar_capacitor" | "polarcapacitor" => Some(Self::PolarCapacitor),
            "diode" | "led" => Some(Self::Diode),
            "ammeter" => Some(Self::Ammeter),
            "voltmeter" => Some(Self::Voltmeter),
            "ohmmeter" => Some(Self::Ohmmeter),
            "galvanometer" => Some(Self::Galvanometer),
            _ => None,
        }
    }

    /// Check if this kind has a directional polarity.
    pub fn is_polar(&self) -> bool {
        matches!(
            self,
            Self::PowerSource
                | Self::PolarCapacitor
                | Self::Diode
                | Self::Ammeter
                | Self::Voltmeter
                | Self::Ohmmeter
                | Self::Galvanometer
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A single parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Flag(bool),
}

impl ParamValue {
    /// Parse a flag keyword (`on`, `off`, `true`, `false`, `closed`, `open`).
    pub fn flag_from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "on" | "true" | "closed" => Some(Self::Flag(true)),
            "off" | "false" | "open" => Some(Self::Flag(false)),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{}", v),
            Self::Flag(true) => write!(f, "on"),
            Self::Flag(false) => write!(f, "off"),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

/// Kind-indexed parameter record of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameters {
    PowerSource(PowerSource),
    Resistor(Resistor),
    Bulb(Bulb),
    Switch(Switch),
    Capacitor(Capacitor),
    PolarCapacitor(PolarCapacitor),
    Diode(Diode),
    Ammeter(Meter),
    Voltmeter(Meter),
    Ohmmeter(Meter),
    Galvanometer(Meter),
}

impl Parameters {
    /// Build a record for `kind` from defaults overridden by `values`.
    ///
    /// Fails on the first name the kind does not define or value it rejects.
    pub fn from_values<'a, I>(kind: ElementKind, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, ParamValue)>,
    {
        let mut params = defaults_for(kind);
        for (name, value) in values {
            params.set(name, value)?;
        }
        Ok(params)
    }

    /// Get the element kind this record belongs to.
    pub fn kind(&self) -> ElementKind {
        match self {
            Parameters::PowerSource(_) => ElementKind::PowerSource,
            Parameters::Resistor(_) => ElementKind::Resistor,
            Parameters::Bulb(_) => ElementKind::Bulb,
            Parameters::Switch(_) => ElementKind::Switch,
            Parameters::Capacitor(_) => ElementKind::Capacitor,
            Parameters::PolarCapacitor(_) => ElementKind::PolarCapacitor,
            Parameters::Diode(_) => ElementKind::Diode,
            Parameters::Ammeter(_) => ElementKind::Ammeter,
            Parameters::Voltmeter(_) => ElementKind::Voltmeter,
            Parameters::Ohmmeter(_) => ElementKind::Ohmmeter,
            Parameters::Galvanometer(_) => ElementKind::Galvanometer,
        }
    }

    /// Names of the attributes this record holds.
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            Parameters::PowerSource(_) => PowerSource::PARAMS,
            Parameters::Resistor(_) => Resistor::PARAMS,
            Parameters::Bulb(_) => Bulb::PARAMS,
            Parameters::Switch(_) => Switch::PARAMS,
            Parameters::Capacitor(_) => Capacitor::PARAMS,
            Parameters::PolarCapacitor(_) => PolarCapacitor::PARAMS,
            Parameters::Diode(_) => Diode::PARAMS,
            Parameters::Ammeter(_)
            | Parameters::Voltmeter(_)
            | Parameters::Ohmmeter(_)
            | Parameters::Galvanometer(_) => Meter::PARAMS,
        }
    }

    /// Read one attribute.
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        match self {
            Parameters::PowerSource(p) => p.get(name),
            Parameters::Resistor(p) => p.get(name),
            Parameters::Bulb(p) => p.get(name),
            Parameters::Switch(p) => p.get(name),
            Parameters::Capacitor(p) => p.get(name),
            Parameters::PolarCapacitor(p) => p.get(name),
            Parameters::Diode(p) => p.get(name),
            Parameters::Ammeter(p)
            | Parameters::Voltmeter(p)
            | Parameters::Ohmmeter(p)
            | Parameters::Galvanometer(p) => p.get(name),
        }
    }

    /// Overwrite one attribute. The record is untouched on error.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<()> {
        let kind = self.kind();
        match self {
            Parameters::PowerSource(p) => p.set(name, value),
            Parameters::Resistor(p) => p.set(name, value),
            Parameters::Bulb(p) => p.set(name, value),
            Parameters::Switch(p) => p.set(name, value),
            Parameters::Capacitor(p) => p.set(name, value),
            Parameters::PolarCapacitor(p) => p.set(name, value),
            Parameters::Diode(p) => p.set(name, value),
            Parameters::Ammeter(p)
            | Parameters::Voltmeter(p)
            | Parameters::Ohmmeter(p)
            | Parameters::Galvanometer(p) => p.set(kind, name, value),
        }
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for name in self.names() {
            if let Some(value) = self.get(name) {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}={}", name, value)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Error for a name outside the kind's record.
pub(crate) fn unknown(kind: ElementKind, param: &str) -> BreadboardError {
    BreadboardError::UnknownParameter {
        kind: kind.to_string(),
        param: param.to_string(),
    }
}

/// Extract a finite number, at least `min` (exclusive when `strict`).
pub(crate) fn number(
    kind: ElementKind,
    param: &str,
    value: ParamValue,
    min: f64,
    strict: bool,
) -> Result<f64> {
    let v = match value {
        ParamValue::Number(v) => v,
        ParamValue::Flag(_) => {
            return Err(BreadboardError::invalid_parameter(
                kind.to_string(),
                param,
                "expected a number, got a flag",
            ))
        }
    };
    if !v.is_finite() {
        return Err(BreadboardError::invalid_parameter(
            kind.to_string(),
            param,
            "value must be finite",
        ));
    }
    if v < min || (strict && v == min) {
        let bound = if strict { "greater than" } else { "at least" };
        return Err(BreadboardError::invalid_parameter(
            kind.to_string(),
            param,
            format!("value {} must be {} {}", v, bound, min),
        ));
    }
    Ok(v)
}

/// Extract a flag; numbers 0 and 1 are accepted as off/on.
pub(crate) fn flag(kind: ElementKind, param: &str, value: ParamValue) -> Result<bool> {
    match value {
        ParamValue::Flag(b) => Ok(b),
        ParamValue::Number(v) if v == 0.0 => Ok(false),
        ParamValue::Number(v) if v == 1.0 => Ok(true),
        ParamValue::Number(v) => Err(BreadboardError::invalid_parameter(
            kind.to_string(),
            param,
            format!("expected on/off or 0/1, got {}", v),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_record() {
        for kind in ElementKind::ALL {
            assert_eq!(defaults_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_keywords_roundtrip_slugs() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::from_keyword(kind.slug()), Some(kind));
        }
        assert_eq!(ElementKind::from_keyword("Battery"), Some(ElementKind::PowerSource));
        assert_eq!(ElementKind::from_keyword("transistor"), None);
    }

    #[test]
    fn test_polar_kinds() {
        assert!(ElementKind::PowerSource.is_polar());
        assert!(ElementKind::Diode.is_polar());
        assert!(ElementKind::Galvanometer.is_polar());
        assert!(!ElementKind::Resistor.is_polar());
        assert!(!ElementKind::Capacitor.is_polar());
        assert!(!ElementKind::Switch.is_polar());
    }

    #[test]
    fn test_set_rejects_unknown_attribute() {
        let mut params = defaults_for(ElementKind::Resistor);
        let err = params.set("wave_length", ParamValue::Number(500.0)).unwrap_err();
        assert!(matches!(err, BreadboardError::UnknownParameter { .. }));
        assert_eq!(params, defaults_for(ElementKind::Resistor));
    }

    #[test]
    fn test_set_rejects_wrong_value_type() {
        let mut params = defaults_for(ElementKind::Bulb);
        assert!(params.set("power", ParamValue::Flag(true)).is_err());
        assert!(params.set("voltage", ParamValue::Number(-1.0)).is_err());
        assert!(params.set("voltage", ParamValue::Number(f64::NAN)).is_err());
        assert_eq!(params, defaults_for(ElementKind::Bulb));
    }

    #[test]
    fn test_from_values_overrides_defaults() {
        let params = Parameters::from_values(
            ElementKind::Diode,
            [
                ("voltage", ParamValue::Number(3.1)),
                ("wave_length", ParamValue::Number(470.0)),
            ],
        )
        .unwrap();
        assert_eq!(params.get("voltage"), Some(ParamValue::Number(3.1)));
        assert_eq!(params.get("wave_length"), Some(ParamValue::Number(470.0)));
        assert_eq!(params.get("current"), defaults_for(ElementKind::Diode).get("current"));
    }

    #[test]
    fn test_every_listed_name_is_readable() {
        for kind in ElementKind::ALL {
            let params = defaults_for(kind);
            for name in params.names() {
                assert!(params.get(name).is_some(), "{} lacks {}", kind, name);
            }
        }
    }

    #[test]
    fn test_switch_accepts_numeric_flags() {
        let mut params = defaults_for(ElementKind::Switch);
        params.set("switch_state", ParamValue::Number(1.0)).unwrap();
        assert_eq!(params.get("switch_state"), Some(ParamValue::Flag(true)));
        assert!(params.set("switch_state", ParamValue::Number(0.5)).is_err());
    }

    #[test]
    fn test_display_lists_attributes() {
        let params = defaults_for(ElementKind::Resistor);
        assert_eq!(params.to_string(), "resistance=10");
    }
}
