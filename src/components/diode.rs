//! Light-emitting diode.

use std::fmt;

use super::{number, unknown, ElementKind, ParamValue};
use crate::error::Result;

/// Diode parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Diode {
    /// Forward voltage in volts
    pub voltage: f64,
    /// Rated forward current in amperes
    pub current: f64,
    /// Emission wavelength in nanometres
    pub wave_length: f64,
}

impl Diode {
    pub const PARAMS: &'static [&'static str] = &["voltage", "current", "wave_length"];

    pub fn get(&self, param: &str) -> Option<ParamValue> {
        match param {
            "voltage" => Some(ParamValue::Number(self.voltage)),
            "current" => Some(ParamValue::Number(self.current)),
            "wave_length" => Some(ParamValue::Number(self.wave_length)),
            _ => None,
        }
    }

    pub fn set(&mut self, param: &str, value: ParamValue) -> Result<()> {
        let kind = ElementKind::Diode;
        match param {
            "voltage" => self.voltage = number(kind, param, value, 0.0, false)?,
            "current" => self.current = number(kind, param, value, 0.0, false)?,
            "wave_length" => self.wave_length = number(kind, param, value, 0.0, true)?,
            _ => return Err(unknown(kind, param)),
        }
        Ok(())
    }

    /// Display colour for the emission wavelength.
    ///
    /// Returns `None` outside the visible 400-780 nm window and inside the
    /// deep-red gap above 740 nm that has no colour band.
    pub fn emission_color(&self) -> Option<Rgb> {
        let wl = self.wave_length;
        if !(400.0..=780.0).contains(&wl) {
            return None;
        }

        if (690.0..=740.0).contains(&wl) {
            Some(Rgb::new(255, 0, 0))
        } else if (590.0..690.0).contains(&wl) {
            Some(Rgb::new(255, 165, 0))
        } else if (560.0..590.0).contains(&wl) {
            Some(Rgb::new(255, 255, 0))
        } else if (485.0..560.0).contains(&wl) {
            Some(Rgb::new(0, 255, 0))
        } else if (400.0..485.0).contains(&wl) {
            Some(Rgb::new(0, 0, 255))
        } else {
            None
        }
    }
}

impl Default for Diode {
    fn default() -> Self {
        Self {
            voltage: 2.0,
            current: 0.02,
            wave_length: 700.0,
        }
    }
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diode(wave_length: f64) -> Diode {
        Diode {
            wave_length,
            ..Diode::default()
        }
    }

    #[test]
    fn test_emission_color_bands() {
        assert_eq!(diode(700.0).emission_color(), Some(Rgb::new(255, 0, 0)));
        assert_eq!(diode(620.0).emission_color(), Some(Rgb::new(255, 165, 0)));
        assert_eq!(diode(570.0).emission_color(), Some(Rgb::new(255, 255, 0)));
        assert_eq!(diode(525.0).emission_color(), Some(Rgb::new(0, 255, 0)));
        assert_eq!(diode(450.0).emission_color(), Some(Rgb::new(0, 0, 255)));
        assert_eq!(diode(590.0).emission_color(), Some(Rgb::new(255, 165, 0)));
    }

    #[test]
    fn test_emission_color_out_of_range() {
        assert_eq!(diode(350.0).emission_color(), None);
        assert_eq!(diode(760.0).emission_color(), None);
        assert_eq!(diode(900.0).emission_color(), None);
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb::new(255, 165, 0).to_string(), "rgb(255, 165, 0)");
    }
}
