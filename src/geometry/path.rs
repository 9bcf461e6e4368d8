use super::{Record, decode_vertex_list};
use crate::defaults::VERTICES_KEY;
use crate::document::Fields;
use crate::errors::GeometryError;
use crate::registry::Kind;
use crate::shape::VertexList;

/// An open polyline through its vertices
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LinePath {
    pub vertices: VertexList,
    pub extra: Fields,
}

impl LinePath {
    pub fn new(vertices: VertexList) -> Self {
        Self {
            vertices,
            extra: Fields::new(),
        }
    }

    pub fn from_fields(fields: &Fields) -> Result<Self, GeometryError> {
        let (vertices, extra) = decode_vertex_list(fields)?;
        Ok(Self { vertices, extra })
    }
}

impl Record for LinePath {
    fn kind(&self) -> Kind {
        Kind::LinePath
    }

    fn fields(&self) -> Fields {
        let mut out = self.extra.clone();
        out.insert(VERTICES_KEY.into(), self.vertices.to_value());
        out
    }
}

/// A cubic Hermite spline.
///
/// Rows alternate between points and tangents; they are stored in the same
/// canonical layout as any other vertex list and are not interpreted here.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CubicHermitePath {
    pub vertices: VertexList,
    pub extra: Fields,
}

impl CubicHermitePath {
    pub fn new(vertices: VertexList) -> Self {
        Self {
            vertices,
            extra: Fields::new(),
        }
    }

    pub fn from_fields(fields: &Fields) -> Result<Self, GeometryError> {
        let (vertices, extra) = decode_vertex_list(fields)?;
        Ok(Self { vertices, extra })
    }
}

impl Record for CubicHermitePath {
    fn kind(&self) -> Kind {
        Kind::CubicHermitePath
    }

    fn fields(&self) -> Fields {
        let mut out = self.extra.clone();
        out.insert(VERTICES_KEY.into(), self.vertices.to_value());
        out
    }
}
