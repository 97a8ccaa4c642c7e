//! Control components: Switch.

use super::{flag, unknown, ElementKind, ParamValue};
use crate::error::Result;

/// Switch parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Switch {
    /// True when closed (conducting)
    pub switch_state: bool,
}

impl Switch {
    pub const PARAMS: &'static [&'static str] = &["switch_state"];

    pub fn get(&self, param: &str) -> Option<ParamValue> {
        match param {
            "switch_state" => Some(ParamValue::Flag(self.switch_state)),
            _ => None,
        }
    }

    pub fn set(&mut self, param: &str, value: ParamValue) -> Result<()> {
        match param {
            "switch_state" => {
                self.switch_state = flag(ElementKind::Switch, param, value)?;
                Ok(())
            }
            _ => Err(unknown(ElementKind::Switch, param)),
        }
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.switch_state = !self.switch_state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_starts_open() {
        let mut sw = Switch::default();
        assert!(!sw.switch_state);
        sw.toggle();
        assert_eq!(sw.get("switch_state"), Some(ParamValue::Flag(true)));
    }
}
