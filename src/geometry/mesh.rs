use super::{Record, decode_vertex_grid};
use crate::defaults::VERTICES_KEY;
use crate::document::Fields;
use crate::errors::GeometryError;
use crate::registry::Kind;
use crate::shape::VertexGrid;

/// A grid of micropolygon vertices
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MicropolygonMesh {
    pub vertices: VertexGrid,
    pub extra: Fields,
}

impl MicropolygonMesh {
    pub fn new(vertices: VertexGrid) -> Self {
        Self {
            vertices,
            extra: Fields::new(),
        }
    }

    pub fn from_fields(fields: &Fields) -> Result<Self, GeometryError> {
        let (vertices, extra) = decode_vertex_grid(fields)?;
        Ok(Self { vertices, extra })
    }
}

impl Record for MicropolygonMesh {
    fn kind(&self) -> Kind {
        Kind::MicropolygonMesh
    }

    fn fields(&self) -> Fields {
        let mut out = self.extra.clone();
        out.insert(VERTICES_KEY.into(), self.vertices.to_value());
        out
    }
}
