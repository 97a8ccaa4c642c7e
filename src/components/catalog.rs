//! Element catalog: display metadata and default parameters per kind.

use super::{
    Bulb, Capacitor, Diode, ElementKind, Meter, Parameters, PolarCapacitor, PowerSource, Resistor,
    Switch,
};
use crate::circuit::Size;

/// Default footprint of two-terminal parts.
const STANDARD_FOOTPRINT: Size = Size::new(80.0, 40.0);

/// Round dial instruments are square.
const METER_FOOTPRINT: Size = Size::new(60.0, 60.0);

/// Palette metadata for one element kind.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub kind: ElementKind,
    /// Human-readable name shown in menus
    pub display_name: &'static str,
    /// Icon asset name
    pub icon: &'static str,
    /// Icon used while the element is on (bulbs, switches)
    pub on_icon: Option<&'static str>,
    /// Icon used while the element is off (bulbs, switches)
    pub off_icon: Option<&'static str>,
    /// Rendered size before the front-end measures the element
    pub footprint: Size,
}

impl CatalogEntry {
    /// Pick the icon for the current parameter values.
    ///
    /// Switches follow their own state and bulbs follow `lit`; everything
    /// else uses the plain icon.
    pub fn icon_for(&self, params: &Parameters, lit: bool) -> &'static str {
        let on = match params {
            Parameters::Switch(sw) => sw.switch_state,
            Parameters::Bulb(_) => lit,
            _ => return self.icon,
        };
        match (on, self.on_icon, self.off_icon) {
            (true, Some(icon), _) | (false, _, Some(icon)) => icon,
            _ => self.icon,
        }
    }
}

static CATALOG: [CatalogEntry; 11] = [
    CatalogEntry {
        kind: ElementKind::PowerSource,
        display_name: "Battery",
        icon: "battery_icon.svg",
        on_icon: None,
        off_icon: None,
        footprint: STANDARD_FOOTPRINT,
    },
    CatalogEntry {
        kind: ElementKind::Resistor,
        display_name: "Resistor",
        icon: "resistor_icon.svg",
        on_icon: None,
        off_icon: None,
        footprint: STANDARD_FOOTPRINT,
    },
    CatalogEntry {
        kind: ElementKind::Bulb,
        display_name: "Bulb",
        icon: "lamp_off_icon.svg",
        on_icon: Some("lamp_on_icon.svg"),
        off_icon: Some("lamp_off_icon.svg"),
        footprint: STANDARD_FOOTPRINT,
    },
    CatalogEntry {
        kind: ElementKind::Switch,
        display_name: "Switch",
        icon: "switcher_off_icon.svg",
        on_icon: Some("switcher_on_icon.svg"),
        off_icon: Some("switcher_off_icon.svg"),
        footprint: STANDARD_FOOTPRINT,
    },
    CatalogEntry {
        kind: ElementKind::Capacitor,
        display_name: "Capacitor",
        icon: "capacitor_icon.svg",
        on_icon: None,
        off_icon: None,
        footprint: STANDARD_FOOTPRINT,
    },
    CatalogEntry {
        kind: ElementKind::PolarCapacitor,
        display_name: "Polar capacitor",
        icon: "polar_capacitor_icon.svg",
        on_icon: None,
        off_icon: None,
        footprint: STANDARD_FOOTPRINT,
    },
    CatalogEntry {
        kind: ElementKind::Diode,
        display_name: "Diode",
        icon: "diode_icon.svg",
        on_icon: None,
        off_icon: None,
        footprint: STANDARD_FOOTPRINT,
    },
    CatalogEntry {
        kind: ElementKind::Ammeter,
        display_name: "Ammeter",
        icon: "ammeter_icon.svg",
        on_icon: None,
        off_icon: None,
        footprint: METER_FOOTPRINT,
    },
    CatalogEntry {
        kind: ElementKind::Voltmeter,
        display_name: "Voltmeter",
        icon: "voltmeter_icon.svg",
        on_icon: None,
        off_icon: None,
        footprint: METER_FOOTPRINT,
    },
    CatalogEntry {
        kind: ElementKind::Ohmmeter,
        display_name: "Ohmmeter",
        icon: "ohmmeter_icon.svg",
        on_icon: None,
        off_icon: None,
        footprint: METER_FOOTPRINT,
    },
    CatalogEntry {
        kind: ElementKind::Galvanometer,
        display_name: "Galvanometer",
        icon: "galvanometer_icon.svg",
        on_icon: None,
        off_icon: None,
        footprint: METER_FOOTPRINT,
    },
];

/// Look up the catalog entry for a kind.
pub fn catalog(kind: ElementKind) -> &'static CatalogEntry {
    // CATALOG is laid out in ElementKind::ALL order
    &CATALOG[kind as usize]
}

/// Default parameter record for a freshly placed element.
pub fn defaults_for(kind: ElementKind) -> Parameters {
    match kind {
        ElementKind::PowerSource => Parameters::PowerSource(PowerSource::default()),
        ElementKind::Resistor => Parameters::Resistor(Resistor::default()),
        ElementKind::Bulb => Parameters::Bulb(Bulb::default()),
        ElementKind::Switch => Parameters::Switch(Switch::default()),
        ElementKind::Capacitor => Parameters::Capacitor(Capacitor::default()),
        ElementKind::PolarCapacitor => Parameters::PolarCapacitor(PolarCapacitor::default()),
        ElementKind::Diode => Parameters::Diode(Diode::default()),
        ElementKind::Ammeter => Parameters::Ammeter(Meter::for_kind(kind)),
        ElementKind::Voltmeter => Parameters::Voltmeter(Meter::for_kind(kind)),
        ElementKind::Ohmmeter => Parameters::Ohmmeter(Meter::for_kind(kind)),
        ElementKind::Galvanometer => Parameters::Galvanometer(Meter::for_kind(kind)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ParamValue;

    #[test]
    fn test_catalog_indexed_by_kind() {
        for kind in ElementKind::ALL {
            assert_eq!(catalog(kind).kind, kind);
        }
    }

    #[test]
    fn test_switch_icon_follows_state() {
        let entry = catalog(ElementKind::Switch);
        let mut params = defaults_for(ElementKind::Switch);
        assert_eq!(entry.icon_for(&params, true), "switcher_off_icon.svg");
        params.set("switch_state", true.into()).unwrap();
        assert_eq!(entry.icon_for(&params, false), "switcher_on_icon.svg");
    }

    #[test]
    fn test_bulb_icon_follows_lit() {
        let entry = catalog(ElementKind::Bulb);
        let params = defaults_for(ElementKind::Bulb);
        assert_eq!(entry.icon_for(&params, false), "lamp_off_icon.svg");
        assert_eq!(entry.icon_for(&params, true), "lamp_on_icon.svg");
        let resistor = catalog(ElementKind::Resistor);
        assert_eq!(resistor.icon_for(&defaults_for(ElementKind::Resistor), true), resistor.icon);
    }

    #[test]
    fn test_meters_use_square_footprint() {
        assert_eq!(catalog(ElementKind::Ohmmeter).footprint, METER_FOOTPRINT);
        assert_eq!(catalog(ElementKind::Resistor).footprint, STANDARD_FOOTPRINT);
    }

    #[test]
    fn test_default_values() {
        assert_eq!(defaults_for(ElementKind::Resistor).get("resistance"), Some(ParamValue::Number(10.0)));
        assert_eq!(defaults_for(ElementKind::PowerSource).get("power"), Some(ParamValue::Number(10.0)));
        assert_eq!(defaults_for(ElementKind::Switch).get("switch_state"), Some(ParamValue::Flag(false)));
    }
}
