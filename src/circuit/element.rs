//! Placed circuit elements.

use super::types::{ElementId, Orientation, Point, Polarity, Rect, Size, Terminal};
use crate::components::{defaults_for, ElementKind, ParamValue, Parameters};
use crate::error::{BreadboardError, Result};

/// One placed circuit component.
///
/// The kind is carried by the parameter record itself, so parameters can
/// never drift out of shape for their kind. Polarity is present exactly when
/// the kind is polar.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    params: Parameters,
    /// Top-left corner on the canvas
    pub position: Point,
    pub orientation: Orientation,
    polarity: Option<Polarity>,
    /// Rendered footprint; `None` until the front-end has measured it
    pub footprint: Option<Size>,
    /// Transient UI flag
    pub selected: bool,
    /// Set when the last run flagged this element as unreachable
    pub errored: bool,
}

impl Element {
    /// Create an element with the catalog defaults for `kind`.
    pub fn new(id: ElementId, kind: ElementKind, position: Point) -> Self {
        Self::with_params(id, defaults_for(kind), position)
    }

    /// Create an element from an explicit parameter record.
    pub fn with_params(id: ElementId, params: Parameters, position: Point) -> Self {
        let polarity = params.kind().is_polar().then_some(Polarity::Positive);
        Self {
            id,
            params,
            position,
            orientation: Orientation::Horizontal,
            polarity,
            footprint: None,
            selected: false,
            errored: false,
        }
    }

    /// Builder-style orientation.
    pub fn oriented(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Builder-style footprint.
    pub fn measured(mut self, footprint: Size) -> Self {
        self.footprint = Some(footprint);
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.params.kind()
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn polarity(&self) -> Option<Polarity> {
        self.polarity
    }

    pub fn is_power_source(&self) -> bool {
        self.kind() == ElementKind::PowerSource
    }

    /// Overwrite one parameter, keeping the record's shape.
    pub fn set_param(&mut self, name: &str, value: ParamValue) -> Result<()> {
        self.params.set(name, value)
    }

    /// Set the polarity of a polar element.
    pub fn set_polarity(&mut self, polarity: Polarity) -> Result<()> {
        if self.polarity.is_none() {
            return Err(BreadboardError::NotPolar {
                id: self.id.to_string(),
                kind: self.kind().to_string(),
            });
        }
        self.polarity = Some(polarity);
        Ok(())
    }

    /// Terminal carrying the positive marker, if the element is polar.
    pub fn positive_terminal(&self) -> Option<Terminal> {
        self.polarity.map(|p| match p {
            Polarity::Positive => Terminal::Source,
            Polarity::Negative => Terminal::Target,
        })
    }

    /// Bounding box on the canvas; wide when horizontal, tall when vertical.
    pub fn bounds(&self) -> Option<Rect> {
        let size = self.footprint?;
        let (width, height) = match self.orientation {
            Orientation::Horizontal => (size.length, size.thickness),
            Orientation::Vertical => (size.thickness, size.length),
        };
        Some(Rect {
            x: self.position.x,
            y: self.position.y,
            width,
            height,
        })
    }

    pub fn center(&self) -> Option<Point> {
        self.bounds().map(|b| b.center())
    }
}
