use super::{Record, decode_vertex_list};
use crate::defaults::VERTICES_KEY;
use crate::document::Fields;
use crate::errors::GeometryError;
use crate::registry::Kind;
use crate::shape::VertexList;

/// A convex polygon given by its corner vertices
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ConvexPolygon {
    pub vertices: VertexList,
    pub extra: Fields,
}

impl ConvexPolygon {
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

impl Record for ConvexPolygon {
    fn kind(&self) -> Kind {
        Kind::ConvexPolygon
    }

    fn fields(&self) -> Fields {
        let mut out = self.extra.clone();
        out.insert(VERTICES_KEY.into(), self.vertices.to_value());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;
    use serde_json::{Value, json};

    fn decode(node: Value) -> Result<ConvexPolygon, GeometryError> {
        ConvexPolygon::from_fields(node.as_object().unwrap())
    }

    #[test]
    fn triangle_with_color() {
        let p = decode(json!({"vertices": [[0, 0], [1, 0], [0, 1]], "color": "#00f8"})).unwrap();
        assert_eq!(p.vertices.len(), 3);
        let blue = Vec4::new(0.0, 0.0, 1.0, 136.0 / 255.0);
        assert!(p.vertices.iter().all(|v| v.color == blue));
        assert_eq!(p.vertices.as_slice()[1].position, Vec4::new(1.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn color_is_not_kept_as_an_extra() {
        let p = decode(json!({"vertices": [[0, 0, 0]], "color": "#fff", "label": 3})).unwrap();
        assert_eq!(p.extra.len(), 1);
        let fields = p.fields();
        assert!(!fields.contains_key("color"));
        assert_eq!(fields["label"], json!(3));
    }

    #[test]
    fn missing_vertices() {
        let err = decode(json!({"color": "#fff"})).unwrap_err();
        assert_eq!(err, GeometryError::MissingField { field: "vertices" });
    }

    #[test]
    fn grid_vertices_are_rejected() {
        let err = decode(json!({"vertices": [[[0, 0]]]})).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidRank { rank: 3, .. }));
    }
}
