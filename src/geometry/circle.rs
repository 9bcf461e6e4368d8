use glam::Vec4;
use serde_json::Value;

use super::Record;
use crate::color;
use crate::defaults::{CENTER_KEY, COLOR_KEY, RADIUS_KEY, TAG_KEY};
use crate::document::{self, Fields, extras, float, floats, require};
use crate::errors::GeometryError;
use crate::registry::Kind;
use crate::shape::pad_position;

/// A circle with a homogeneous center, a radius and a fill color
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec4,
    pub radius: f32,
    pub color: Vec4,
    /// Unrecognized fields, written back on encode
    pub extra: Fields,
}

impl Circle {
    const RESERVED: &'static [&'static str] = &[TAG_KEY, CENTER_KEY, RADIUS_KEY, COLOR_KEY];

    pub fn new(center: Vec4, radius: f32, color: Vec4) -> Self {
        Self {
            center,
            radius,
            color,
            extra: Fields::new(),
        }
    }

    /// Decode from a node's fields.
    ///
    /// `center` may have up to four components; missing ones default to
    /// `(0, 0, 1, 1)` and any beyond the fourth are dropped.
    pub fn from_fields(fields: &Fields) -> Result<Self, GeometryError> {
        let center = match require(fields, CENTER_KEY)? {
            Value::Array(components) => {
                let raw = components
                    .iter()
                    .map(|c| document::number(c, CENTER_KEY))
                    .collect::<Result<Vec<_>, _>>()?;
                pad_position(&raw)
            }
            _ => {
                return Err(GeometryError::InvalidField {
                    field: CENTER_KEY,
                    expected: "a sequence of numbers",
                });
            }
        };
        let radius = document::number(require(fields, RADIUS_KEY)?, RADIUS_KEY)?;
        let color = color::resolve(fields.get(COLOR_KEY))?;

        Ok(Self {
            center,
            radius,
            color,
            extra: extras(fields, Self::RESERVED),
        })
    }
}

impl Record for Circle {
    fn kind(&self) -> Kind {
        Kind::Circle
    }

    fn fields(&self) -> Fields {
        let mut out = self.extra.clone();
        out.insert(COLOR_KEY.into(), floats(&self.color.to_array()));
        out.insert(CENTER_KEY.into(), floats(&self.center.to_array()));
        out.insert(RADIUS_KEY.into(), float(self.radius));
        out
    }
}
